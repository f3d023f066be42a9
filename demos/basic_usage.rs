//! Basic usage example for countydb-rs
//!
//! Loads both bundled datasets, runs a few lookups and adds a city to a
//! scratch copy of the city file.

use countydb_rs::{AddStatus, ByCity, ByCode, Dataset, LoadOptions, Result};

fn main() -> Result<()> {
    println!("=== countydb-rs Basic Usage ===\n");

    let counties = Dataset::<ByCode>::open_default()?;
    println!("Loaded {} counties", counties.store().len());

    for code in ["3", "56", "99", "abc"] {
        match counties.find(code) {
            Ok(Some(r)) => println!("  {code}: {} (seat: {})", r.county(), r.seat()),
            Ok(None) => println!("  {code}: not found"),
            Err(e) => println!("  {code}: {e}"),
        }
    }
    println!();

    // Work on a copy so the bundled file stays untouched.
    let scratch = std::env::temp_dir().join("countydb-demo-cities.csv");
    std::fs::copy(Dataset::<ByCity>::default_path(), &scratch)
        .map_err(|e| countydb_rs::CountyDbError::Io {
            path: scratch.clone(),
            source: e,
        })?;

    let mut cities = Dataset::<ByCity>::open(&scratch, LoadOptions::strict())?;
    for (city, county) in [("Ennis", "madison"), ("Boise", "ada"), ("Butte", "silver bow")] {
        match cities.add(city, county)? {
            AddStatus::Added(key) => println!("  added {key}"),
            AddStatus::AlreadyExists(key) => println!("  {key} already present"),
            AddStatus::NotAValidCounty(name) => println!("  {name} is not a Montana county"),
        }
    }

    if let Some(r) = cities.find("ennis")? {
        println!("\nEnnis -> {} (plate prefix {})", r.county(), r.plate_prefix());
    }

    Ok(())
}
