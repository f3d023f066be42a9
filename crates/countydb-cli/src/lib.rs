//! countydb-cli
//! ============
//!
//! Command-line interface for the `countydb-core` Montana county dataset.
//!
//! The binary (`countydb`) is the primary deliverable. The library target
//! holds the prompt loops and display helpers so they can be driven from
//! tests with in-memory input and output.
//!
//! Basic usage:
//!
//! ```text
//! countydb code            # interactive lookup by county number
//! countydb code 56 --view both
//! countydb city            # interactive lookup by city, offers to add unknown cities
//! countydb city butte --view plate
//! countydb add Anaconda "deer lodge"
//! countydb counties
//! ```

pub mod display;
pub mod logging;
pub mod prompt;
