// crates/countydb-core/src/model/store.rs
use super::{CountySet, Record};
use crate::traits::Schema;
use std::collections::HashMap;

/// In-memory key → [`Record`] map built from the backing file.
///
/// A store is built wholesale by the loader and replaced wholesale after a
/// write; it is never patched in place by the add flow.
#[derive(Debug, Clone)]
pub struct RecordStore<S: Schema> {
    records: HashMap<S::Key, Record<S>>,
}

impl<S: Schema> Default for RecordStore<S> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<S: Schema> RecordStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any previous record with the same key.
    /// Returns the replaced record.
    pub fn insert(&mut self, key: S::Key, record: Record<S>) -> Option<Record<S>> {
        self.records.insert(key, record)
    }

    pub fn get(&self, key: &S::Key) -> Option<&Record<S>> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &S::Key) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S::Key, &Record<S>)> {
        self.records.iter()
    }

    /// Records sorted by key, for stable listings.
    pub fn sorted(&self) -> Vec<(&S::Key, &Record<S>)> {
        let mut out: Vec<_> = self.records.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Derives the set of valid county names from the county column.
    pub fn counties(&self) -> CountySet {
        CountySet::from_names(self.records.values().map(Record::county))
    }
}
