// crates/countydb-core/src/model/mod.rs
pub mod counties;
pub mod record;
pub mod search;
pub mod store;

pub use counties::CountySet;
pub use record::Record;
pub use store::RecordStore;
