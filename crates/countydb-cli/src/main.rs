//! countydb: command-line interface for countydb-core
//!
//! Usage examples
//! --------------
//!
//! - Interactive lookup by county number
//!   $ countydb code
//!
//! - One-shot lookup
//!   $ countydb code 3 --view seat
//!   $ countydb city "great falls"
//!
//! - Add a city (county must already exist, plate prefix is copied)
//!   $ countydb add Walkerville "silver bow"
//!
//! Data source
//! -----------
//!
//! `code` reads `County,County Seat,County Code` rows, the other commands
//! read `County,City,LP` rows. Both default to the files bundled with
//! `countydb-core`; `--input <path>` points at another file of the matching
//! layout.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countydb_cli::display::{render_city, render_county, CityView, CodeView};
use countydb_cli::logging::init_logging;
use countydb_cli::prompt::Session;
use countydb_core::{AddStatus, ByCity, ByCode, Dataset, LoadOptions, Schema};
use std::io;
use std::path::PathBuf;

fn open<S: Schema>(input: Option<PathBuf>, options: LoadOptions) -> anyhow::Result<Dataset<S>> {
    let path = input.unwrap_or_else(Dataset::<S>::default_path);
    log::debug!("using dataset {} ({:?})", path.display(), options.policy);
    Dataset::open(&path, options)
        .with_context(|| format!("cannot load dataset {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let options = if args.skip_malformed {
        LoadOptions::lenient()
    } else {
        LoadOptions::strict()
    };

    match args.command {
        Commands::Code { code, view } => {
            let db = open::<ByCode>(args.input, options)?;
            match code {
                Some(code) => match db.find(&code)? {
                    Some(record) => {
                        println!("{}", render_county(&code, record, view.unwrap_or(CodeView::Both)))
                    }
                    None => eprintln!("No county found for code: {code}"),
                },
                None => {
                    let mut session = Session::new(io::stdin().lock(), io::stdout());
                    session.run_code_lookup(&db, view)?;
                }
            }
        }

        Commands::City { city, view } => {
            let mut db = open::<ByCity>(args.input, options)?;
            match city {
                Some(city) => match db.find(&city)? {
                    Some(record) => {
                        println!("{}", render_city(&city, record, view.unwrap_or(CityView::Both)))
                    }
                    None => eprintln!("No records for city: {city}"),
                },
                None => {
                    let mut session = Session::new(io::stdin().lock(), io::stdout());
                    session.run_city_lookup(&mut db, view)?;
                }
            }
        }

        Commands::Add { city, county } => {
            let mut db = open::<ByCity>(args.input, options)?;
            match db.add(&city, &county)? {
                AddStatus::Added(key) => println!("Added {key} to {}", db.path().display()),
                AddStatus::AlreadyExists(key) => println!("{key} is already in the database"),
                AddStatus::NotAValidCounty(name) => {
                    bail!("{name} is not a county in Montana")
                }
            }
        }

        Commands::Counties => {
            let db = open::<ByCity>(args.input, options)?;
            for name in db.counties().display_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
