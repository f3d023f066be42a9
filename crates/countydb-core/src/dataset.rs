// crates/countydb-core/src/dataset.rs

//! # Dataset Handle
//!
//! Owns the backing-file path together with the one store and county set
//! derived from it. After a successful add both are swapped for the reloaded
//! versions in a single assignment.

use crate::add::{add_record, AddOutcome};
use crate::error::Result;
use crate::loader::{load_from_path, LoadOptions};
use crate::model::{CountySet, Record, RecordStore};
use crate::traits::{Extendable, Schema};
use std::path::{Path, PathBuf};

/// Result of [`Dataset::add`] once the reloaded state has been taken over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStatus<K> {
    Added(K),
    NotAValidCounty(String),
    AlreadyExists(K),
}

#[derive(Debug, Clone)]
pub struct Dataset<S: Schema> {
    path: PathBuf,
    options: LoadOptions,
    store: RecordStore<S>,
    counties: CountySet,
}

impl<S: Schema> Dataset<S> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_path() -> PathBuf {
        Self::default_data_dir().join(S::default_filename())
    }

    /// Loads the backing file at `path`.
    pub fn open(path: impl Into<PathBuf>, options: LoadOptions) -> Result<Self> {
        let path = path.into();
        let store = load_from_path::<S>(&path, options)?;
        let counties = store.counties();
        log::debug!(
            "opened {} ({} records, {} counties)",
            path.display(),
            store.len(),
            counties.len()
        );
        Ok(Self {
            path,
            options,
            store,
            counties,
        })
    }

    /// Loads the bundled dataset for this schema.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path(), LoadOptions::default())
    }

    /// Re-reads the backing file, replacing the store and county set.
    pub fn reload(&mut self) -> Result<()> {
        let store = load_from_path::<S>(&self.path, self.options)?;
        self.counties = store.counties();
        self.store = store;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn counties(&self) -> &CountySet {
        &self.counties
    }

    pub fn find(&self, raw: &str) -> Result<Option<&Record<S>>> {
        self.store.find(raw)
    }
}

impl<S: Extendable> Dataset<S> {
    /// Runs the add flow against this dataset's file and, on success, takes
    /// over the freshly loaded store and county set.
    pub fn add(&mut self, new_key: &str, county: &str) -> Result<AddStatus<S::Key>> {
        let outcome = add_record(
            &self.store,
            &self.counties,
            &self.path,
            new_key,
            county,
            self.options,
        )?;

        Ok(match outcome {
            AddOutcome::Added {
                key,
                store,
                counties,
            } => {
                self.store = store;
                self.counties = counties;
                AddStatus::Added(key)
            }
            AddOutcome::NotAValidCounty { name } => AddStatus::NotAValidCounty(name),
            AddOutcome::AlreadyExists { key } => AddStatus::AlreadyExists(key),
        })
    }
}
