// crates/countydb-core/src/traits.rs
use crate::error::{CountyDbError, Result};
use crate::model::Record;
use crate::text::fold_key;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Layout of one backing-file flavour.
///
/// Both datasets are three comma-separated text columns; they differ only in
/// which column is the key and how that key is normalized. Everything else
/// (loader, writer, store, lookup) is generic over this trait.
pub trait Schema: Clone + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Normalized key type stored in the [`crate::RecordStore`].
    type Key: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync;

    /// Column names, in file order.
    const FIELDS: &'static [&'static str];
    /// Index of the key column.
    const KEY_FIELD: usize;
    /// Index of the county-name column (feeds the [`crate::CountySet`]).
    const COUNTY_FIELD: usize;
    /// Columns written in title case; the rest are written verbatim.
    const TITLE_CASED: &'static [usize];

    /// File name of the bundled dataset for this schema.
    fn default_filename() -> &'static str;

    /// Normalizes raw text (from the file or from the user) into a key.
    ///
    /// Blank or unparsable input is [`CountyDbError::InvalidInput`].
    fn parse_key(raw: &str) -> Result<Self::Key>;

    fn arity() -> usize {
        Self::FIELDS.len()
    }

    fn field_index(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|f| f.eq_ignore_ascii_case(name))
    }
}

/// Schemas that support appending new records derived from existing ones.
pub trait Extendable: Schema {
    /// Builds the record for `new_key` by copying the companion columns of
    /// `template`, a record that belongs to the target county.
    fn derive_record(template: &Record<Self>, new_key: &str) -> Result<Record<Self>>;
}

/// `County,County Seat,County Code` keyed by the numeric county code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByCode;

impl ByCode {
    pub const SEAT: usize = 1;
}

impl Schema for ByCode {
    type Key = u16;

    const FIELDS: &'static [&'static str] = &["County", "County Seat", "County Code"];
    const KEY_FIELD: usize = 2;
    const COUNTY_FIELD: usize = 0;
    const TITLE_CASED: &'static [usize] = &[0, 1];

    fn default_filename() -> &'static str {
        "counties.csv"
    }

    fn parse_key(raw: &str) -> Result<u16> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(CountyDbError::InvalidInput(
                "please enter a county number".into(),
            ));
        }
        code.parse::<u16>().map_err(|_| {
            CountyDbError::InvalidInput(format!("'{code}' is not a county number"))
        })
    }
}

/// `County,City,LP` keyed by the folded city name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByCity;

impl ByCity {
    pub const CITY: usize = 1;
    pub const PLATE_PREFIX: usize = 2;
}

impl Schema for ByCity {
    type Key = String;

    const FIELDS: &'static [&'static str] = &["County", "City", "LP"];
    const KEY_FIELD: usize = ByCity::CITY;
    const COUNTY_FIELD: usize = 0;
    const TITLE_CASED: &'static [usize] = &[0, 1];

    fn default_filename() -> &'static str {
        "cities.csv"
    }

    fn parse_key(raw: &str) -> Result<String> {
        let key = fold_key(raw);
        if key.is_empty() {
            return Err(CountyDbError::InvalidInput("please enter a city name".into()));
        }
        Ok(key)
    }
}

impl Extendable for ByCity {
    fn derive_record(template: &Record<Self>, new_key: &str) -> Result<Record<Self>> {
        Record::from_fields(vec![
            template.county().to_string(),
            new_key.trim().to_string(),
            template.plate_prefix().to_string(),
        ])
    }
}
