// crates/countydb-core/src/loader.rs

//! # Dataset Loader
//!
//! Reads a backing file line by line and builds a fresh [`RecordStore`].
//!
//! Rules, in order, for every line:
//! 1. A trailing `\r` is dropped; blank lines are skipped.
//! 2. Any line whose first field is exactly [`HEADER_MARKER`] is skipped.
//!    This is a value match, not a position check, so a data row starting
//!    with `County` anywhere in the file is skipped too.
//! 3. The line must split into exactly `S::arity()` comma-separated fields
//!    and carry a parsable key; otherwise it is a malformed row, handled
//!    according to [`ParsePolicy`].
//! 4. Later rows replace earlier rows with the same key.

use crate::error::{CountyDbError, Result};
use crate::model::{Record, RecordStore};
use crate::traits::Schema;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// First-field value that marks a header row.
pub const HEADER_MARKER: &str = "County";

/// What to do with a row that does not fit the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the load with [`CountyDbError::Parse`].
    #[default]
    Strict,
    /// Log a warning and drop the row.
    SkipMalformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub policy: ParsePolicy,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            policy: ParsePolicy::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            policy: ParsePolicy::SkipMalformed,
        }
    }
}

/// Parses one line. `Ok(None)` means the line carries no record (blank or
/// header); `line_no` is 1-based and only used for error messages.
pub fn parse_line<S: Schema>(line: &str, line_no: usize) -> Result<Option<(S::Key, Record<S>)>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields[0] == HEADER_MARKER {
        return Ok(None);
    }

    if fields.len() != S::arity() {
        return Err(CountyDbError::Parse {
            line: line_no,
            reason: format!("expected {} fields, found {}", S::arity(), fields.len()),
        });
    }

    let record = Record::<S>::from_fields(fields.iter().map(|f| f.trim().to_string()).collect())?;
    let key = record.key().map_err(|e| CountyDbError::Parse {
        line: line_no,
        reason: format!("bad {} column: {e}", S::FIELDS[S::KEY_FIELD]),
    })?;

    Ok(Some((key, record)))
}

/// Builds a store from already-split lines.
pub fn load_from_lines<S, I>(lines: I, options: LoadOptions) -> Result<RecordStore<S>>
where
    S: Schema,
    I: IntoIterator<Item = Result<String>>,
{
    let mut store = RecordStore::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        match parse_line::<S>(&line, line_no) {
            Ok(Some((key, record))) => {
                if store.insert(key.clone(), record).is_some() {
                    log::debug!("line {line_no}: key {key} replaces an earlier row");
                }
            }
            Ok(None) => {}
            Err(e @ CountyDbError::Parse { .. }) if options.policy == ParsePolicy::SkipMalformed => {
                log::warn!("skipping row: {e}");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("loaded {} records ({skipped} malformed rows skipped)", store.len());
    Ok(store)
}

/// Builds a store from in-memory text.
pub fn load_from_str<S: Schema>(contents: &str, options: LoadOptions) -> Result<RecordStore<S>> {
    load_from_lines(contents.lines().map(|l| Ok(l.to_string())), options)
}

/// Reads and parses the backing file at `path`.
///
/// A missing or unreadable file is [`CountyDbError::Io`]; there is no partial
/// recovery.
pub fn load_from_path<S: Schema>(path: impl AsRef<Path>, options: LoadOptions) -> Result<RecordStore<S>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CountyDbError::io(path, e))?;
    let reader = BufReader::new(file);

    log::debug!("loading {}", path.display());
    load_from_lines(
        reader.lines().map(|l| l.map_err(|e| CountyDbError::io(path, e))),
        options,
    )
}
