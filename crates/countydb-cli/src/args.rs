use clap::{Parser, Subcommand};
use countydb_cli::display::{CityView, CodeView};
use std::path::PathBuf;

/// CLI arguments for countydb
#[derive(Debug, Parser)]
#[command(
    name = "countydb",
    version,
    about = "Look up Montana counties by code or by city, and record new cities"
)]
pub struct CliArgs {
    /// Path to the backing CSV file (default: the bundled dataset for the command)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Skip malformed rows with a warning instead of refusing to load
    #[arg(long = "skip-malformed", global = true)]
    pub skip_malformed: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a county by its number (interactive when CODE is omitted)
    Code {
        /// County number (e.g. 56)
        code: Option<String>,

        /// Columns to show; asked for interactively when omitted
        #[arg(long, value_enum)]
        view: Option<CodeView>,
    },

    /// Look up the county of a city (interactive when CITY is omitted)
    City {
        /// City name, case-insensitive
        city: Option<String>,

        /// Columns to show; asked for interactively when omitted
        #[arg(long, value_enum)]
        view: Option<CityView>,
    },

    /// Record a new city under an existing county
    Add {
        /// City to add
        city: String,

        /// County the city belongs to, case-insensitive
        county: String,
    },

    /// List all known counties
    Counties,
}
