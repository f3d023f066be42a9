// crates/countydb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the county dataset core.
///
/// Lookup misses and rejected county names are *not* errors: they come back as
/// `Ok(None)` from [`crate::RecordStore::find`] and as
/// [`crate::AddOutcome::NotAValidCounty`] respectively.
#[derive(Error, Debug)]
pub enum CountyDbError {
    /// The backing file could not be opened, read or appended to.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the backing file does not match the schema.
    #[error("Malformed row at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// User-supplied text cannot be used as a key or field value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The in-memory store disagrees with the county set derived from it.
    #[error("Internal inconsistency: {0}")]
    Inconsistency(String),
}

impl CountyDbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CountyDbError::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` when the caller may simply re-prompt the user.
    ///
    /// Everything except [`CountyDbError::InvalidInput`] means the dataset is
    /// unusable for this run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CountyDbError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, CountyDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_input_is_recoverable() {
        assert!(CountyDbError::InvalidInput("blank".into()).is_recoverable());
        assert!(!CountyDbError::Parse {
            line: 3,
            reason: "expected 3 fields, found 2".into()
        }
        .is_recoverable());
        assert!(!CountyDbError::Inconsistency("x".into()).is_recoverable());
        let io = CountyDbError::io(
            "data/missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!io.is_recoverable());
        assert!(io.to_string().contains("data/missing.csv"));
    }
}
