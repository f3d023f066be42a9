// crates/countydb-core/src/lib.rs

//! countydb-core
//! =============
//!
//! Load, query and extend the Montana county reference data.
//!
//! Two flat CSV datasets share one generic core:
//! - [`ByCode`]: `County,County Seat,County Code`, keyed by county code.
//! - [`ByCity`]: `County,City,LP`, keyed by folded city name, with an
//!   append-only add path.
//!
//! ```no_run
//! use countydb_core::{ByCity, Dataset, AddStatus};
//!
//! let mut db = Dataset::<ByCity>::open_default()?;
//! if db.find("anaconda")?.is_none() {
//!     match db.add("Anaconda", "deer lodge")? {
//!         AddStatus::Added(key) => println!("added {key}"),
//!         other => println!("not added: {other:?}"),
//!     }
//! }
//! # Ok::<(), countydb_core::CountyDbError>(())
//! ```

pub mod add;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;
pub mod traits;
pub mod writer;

// Re-exports
pub use crate::add::{add_record, AddOutcome};
pub use crate::dataset::{AddStatus, Dataset};
pub use crate::error::{CountyDbError, Result};
pub use crate::loader::{load_from_path, LoadOptions, ParsePolicy};
pub use crate::model::{CountySet, Record, RecordStore};
pub use crate::text::{fold_key, title_case};
pub use crate::traits::{ByCity, ByCode, Extendable, Schema};
