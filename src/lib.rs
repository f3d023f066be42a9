//! countydb-rs
//!
//! Workspace root. Re-exports [`countydb_core`] so the demos can depend on a
//! single crate.
pub use countydb_core::*;
