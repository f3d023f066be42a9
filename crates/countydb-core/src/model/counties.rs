// crates/countydb-core/src/model/counties.rs
use crate::text::{fold_key, title_case};
use std::collections::BTreeSet;

/// Distinct county names, folded, used to validate user-entered counties.
///
/// Derived from a [`super::RecordStore`] once per load and never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountySet {
    names: BTreeSet<String>,
}

impl CountySet {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: names.into_iter().map(fold_key).collect(),
        }
    }

    /// Membership test on the folded form of `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&fold_key(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Folded names in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Title-cased names in alphabetical order, for listing to users.
    pub fn display_names(&self) -> Vec<String> {
        self.names.iter().map(|n| title_case(n)).collect()
    }
}
