// crates/countydb-core/src/model/search.rs
use super::{Record, RecordStore};
use crate::error::Result;
use crate::text::equals_folded;
use crate::traits::Schema;

impl<S: Schema> RecordStore<S> {
    /// Looks up a record by raw user input.
    ///
    /// The input is normalized with [`Schema::parse_key`]; blank or
    /// unparsable input is an `InvalidInput` error, an absent key is
    /// `Ok(None)`. The store is never modified.
    pub fn find(&self, raw: &str) -> Result<Option<&Record<S>>> {
        let key = S::parse_key(raw)?;
        Ok(self.get(&key))
    }

    /// First record (in key order) whose county column matches `county`
    /// case-insensitively.
    pub fn find_by_county(&self, county: &str) -> Option<&Record<S>> {
        self.sorted()
            .into_iter()
            .map(|(_, r)| r)
            .find(|r| equals_folded(r.county(), county))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CountyDbError;
    use crate::model::{Record, RecordStore};
    use crate::traits::{ByCity, ByCode, Schema};

    fn city_store(rows: &[[&str; 3]]) -> RecordStore<ByCity> {
        let mut store = RecordStore::new();
        for row in rows {
            let rec = Record::from_fields(row.iter().map(|s| s.to_string()).collect()).unwrap();
            store.insert(ByCity::parse_key(row[1]).unwrap(), rec);
        }
        store
    }

    #[test]
    fn find_folds_city_input() {
        let store = city_store(&[["Cascade", "Great Falls", "2"]]);
        let rec = store.find("  GREAT falls").unwrap().unwrap();
        assert_eq!(rec.county(), "Cascade");
        assert!(store.find("Helena").unwrap().is_none());
    }

    #[test]
    fn find_rejects_blank_and_non_numeric() {
        let store: RecordStore<ByCode> = RecordStore::new();
        assert!(matches!(store.find(""), Err(CountyDbError::InvalidInput(_))));
        assert!(matches!(store.find("abc"), Err(CountyDbError::InvalidInput(_))));
        assert!(store.find("999").unwrap().is_none());
    }

    #[test]
    fn county_scans_ignore_case() {
        let store = city_store(&[
            ["Silver Bow", "Butte", "1"],
            ["Silver Bow", "Walkerville", "1"],
            ["Cascade", "Great Falls", "2"],
        ]);
        let hit = store.find_by_county("silver BOW").unwrap();
        assert_eq!(hit.city(), "Butte");
        assert!(store.find_by_county("Glacier").is_none());
    }
}
