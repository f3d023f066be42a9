// crates/countydb-core/src/model/record.rs
use crate::error::{CountyDbError, Result};
use crate::traits::{ByCity, ByCode, Schema};
use std::marker::PhantomData;

/// One row of the backing file.
///
/// Holds exactly `S::arity()` string values in file order. Records are never
/// mutated; adding data means building a new record and reloading the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<S: Schema> {
    values: Box<[String]>,
    _schema: PhantomData<S>,
}

impl<S: Schema> Record<S> {
    /// Builds a record from positional values.
    ///
    /// Fails with [`CountyDbError::InvalidInput`] if the number of values does
    /// not match the schema.
    pub fn from_fields(values: Vec<String>) -> Result<Self> {
        if values.len() != S::arity() {
            return Err(CountyDbError::InvalidInput(format!(
                "expected {} fields, found {}",
                S::arity(),
                values.len()
            )));
        }
        Ok(Self {
            values: values.into_boxed_slice(),
            _schema: PhantomData,
        })
    }

    /// Value of the named column (case-insensitive name match).
    pub fn get(&self, name: &str) -> Option<&str> {
        S::field_index(name).map(|i| self.values[i].as_str())
    }

    /// Value at a column index. Indexes come from the schema constants,
    /// whose arity is checked in [`Record::from_fields`].
    pub(crate) fn field(&self, index: usize) -> &str {
        &self.values[index]
    }

    pub fn county(&self) -> &str {
        self.field(S::COUNTY_FIELD)
    }

    /// Normalized key of this record.
    pub fn key(&self) -> Result<S::Key> {
        S::parse_key(self.field(S::KEY_FIELD))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `(column name, value)` pairs in file order.
    pub fn named_fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        S::FIELDS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Record<ByCode> {
    pub fn seat(&self) -> &str {
        self.field(ByCode::SEAT)
    }
}

impl Record<ByCity> {
    pub fn city(&self) -> &str {
        self.field(ByCity::CITY)
    }

    pub fn plate_prefix(&self) -> &str {
        self.field(ByCity::PLATE_PREFIX)
    }
}
