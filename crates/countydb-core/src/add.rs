// crates/countydb-core/src/add.rs

//! # Add Record Flow
//!
//! Validate → derive → append → reload. The live store is never patched:
//! on success the caller receives a freshly loaded store and county set and
//! replaces its own wholesale, so the file stays the single source of truth.
//!
//! Not safe against a second process writing the same file concurrently.

use crate::error::{CountyDbError, Result};
use crate::loader::{load_from_path, LoadOptions};
use crate::model::{CountySet, RecordStore};
use crate::traits::Extendable;
use crate::writer::append_record;
use std::path::Path;

/// Result of [`add_record`].
#[derive(Debug)]
pub enum AddOutcome<S: Extendable> {
    /// The row was appended; `store` and `counties` reflect the reloaded file.
    Added {
        key: S::Key,
        store: RecordStore<S>,
        counties: CountySet,
    },
    /// The county is not in the county set. Nothing was written.
    NotAValidCounty { name: String },
    /// The key is already present. Nothing was written.
    AlreadyExists { key: S::Key },
}

/// Appends a record for `new_key` in county `county` and reloads the file.
///
/// Companion columns (e.g. the plate prefix) are copied from an existing
/// record of the same county. Blank keys and keys containing commas are
/// `InvalidInput`; failing to find a template record for a county that is in
/// `counties` is `Inconsistency`.
pub fn add_record<S: Extendable>(
    store: &RecordStore<S>,
    counties: &CountySet,
    path: impl AsRef<Path>,
    new_key: &str,
    county: &str,
    options: LoadOptions,
) -> Result<AddOutcome<S>> {
    let path = path.as_ref();
    let key = S::parse_key(new_key)?;

    if store.contains_key(&key) {
        return Ok(AddOutcome::AlreadyExists { key });
    }
    if !counties.contains(county) {
        log::debug!("rejected unknown county {county:?}");
        return Ok(AddOutcome::NotAValidCounty {
            name: county.trim().to_string(),
        });
    }

    let template = store.find_by_county(county).ok_or_else(|| {
        CountyDbError::Inconsistency(format!(
            "county {:?} is in the county set but no record belongs to it",
            county.trim()
        ))
    })?;
    let record = S::derive_record(template, new_key)?;

    append_record(path, &record)?;

    let reloaded: RecordStore<S> = load_from_path(path, options)?;
    if !reloaded.contains_key(&key) {
        return Err(CountyDbError::Inconsistency(format!(
            "appended {key} to {} but it is missing after reload",
            path.display()
        )));
    }
    log::info!("reloaded {} records after adding {key}", reloaded.len());

    let counties = reloaded.counties();
    Ok(AddOutcome::Added {
        key,
        store: reloaded,
        counties,
    })
}
