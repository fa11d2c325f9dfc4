use busstop_core::DistanceMetric;
use clap::{Parser, Subcommand};

/// CLI arguments for busstop-cli
#[derive(Debug, Parser)]
#[command(
    name = "busstop",
    version,
    about = "CLI for querying a static bus stop dataset by code, text or location"
)]
pub struct CliArgs {
    /// Path to the dataset: .json, .json.gz or a .bin cache (default: bundled sample)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// JSON object of word -> abbreviation used by `search` (default: built-in table)
    #[arg(short = 's', long = "synonyms", global = true)]
    pub synonyms: Option<String>,

    /// Always read the source dataset, never the .bin cache next to it
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Match accented and non-Latin text by ASCII transliteration ("bukit" finds "Bukìt")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Log loading details to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Look up a stop by its code
    Get {
        /// Stop code (e.g. 01012)
        code: String,
    },

    /// Ranked search over description, road name and code
    Search {
        /// Free text; leave empty to list every stop
        query: Vec<String>,

        /// Maximum number of results (0 = no limit)
        #[arg(short = 'n', long = "limit", default_value_t = 0)]
        limit: usize,
    },

    /// Stops near a coordinate, nearest first
    Nearby {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Search radius in metres
        #[arg(short = 'r', long = "radius", default_value_t = 500.0)]
        radius: f64,

        /// Maximum number of results (0 = no limit)
        #[arg(short = 'n', long = "limit", default_value_t = 10)]
        limit: usize,

        /// haversine or equatorial
        #[arg(short = 'm', long = "metric", default_value = "haversine")]
        metric: DistanceMetric,
    },
}
