//! busstop: Command-line interface for busstop-core
//!
//! Loads a bus stop dataset once, then answers a single query against it.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ busstop stats
//!
//! - Look up a stop by code
//!   $ busstop get 01012
//!
//! - Ranked text search (synonyms rewrite "bukit" -> "bt", "park" -> "pk", ...)
//!   $ busstop search bukit panjang --limit 5
//!   $ busstop --synonyms my_synonyms.json search opposite library
//!
//! - Accent-insensitive search ("bukit" also finds "Bukìt")
//!   $ busstop --fold-accents search bukit
//!
//! - Stops within 300 m of a coordinate
//!   $ busstop nearby 1.2968 103.8527 --radius 300
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample dataset bundled with `busstop-core`
//! and caches a binary version next to it for fast subsequent runs. Use
//! `--input <path>` for another `.json`, `.json.gz` or `.bin` file.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use busstop_core::{BusStop, BusStopIndex, StopLookup, StopRepository, SynonymTable, TextFolding};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Determine input file (default: sample dataset inside busstop-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = BusStopIndex::default_data_dir();
        dir.join(BusStopIndex::default_dataset_filename())
            .to_string_lossy()
            .to_string()
    });

    let index = if args.no_cache {
        BusStopIndex::load_from_path(&input_path)
    } else {
        BusStopIndex::load_cached(&input_path)
    }
    .with_context(|| format!("loading bus stops from {input_path}"))?;

    let index = if args.fold_accents {
        index.with_folding(TextFolding::Transliterate)
    } else {
        index
    };

    let synonyms = match &args.synonyms {
        Some(path) => SynonymTable::load_from_path(path)
            .with_context(|| format!("loading synonyms from {path}"))?,
        None => SynonymTable::standard().clone(),
    };

    tracing::debug!(
        path = %input_path,
        stops = index.len(),
        synonyms = synonyms.len(),
        folding = ?index.folding(),
        "dataset ready"
    );
    let repo = StopRepository::new(index, synonyms);

    match args.command {
        Commands::Stats => {
            let stats = repo.stats();
            println!("Dataset statistics:");
            println!("  Bus stops: {}", stats.stops);
            println!("  Services: {}", stats.services);
            println!("  Synonyms: {}", repo.synonyms().len());
        }

        Commands::Get { code } => match repo.get(code.trim()) {
            Some(stop) => {
                println!("Code: {}", stop.code());
                println!("Description: {}", stop.description());
                println!("Road: {}", stop.road_name());
                println!("Location: {:.6}, {:.6}", stop.latitude, stop.longitude);
                if !stop.services().is_empty() {
                    println!("Services: {}", stop.services().join(", "));
                }
            }
            None => {
                tracing::debug!("no bus stop with this code");
                eprintln!("No bus stop found for: {code}");
            }
        },

        Commands::Search { query, limit } => {
            let query = query.join(" ");
            let hits = repo.search_scored(&query, limit);
            tracing::debug!(hits = hits.len(), limit, "search finished");
            if hits.is_empty() {
                println!("No bus stops found matching: {query}");
            } else {
                for hit in hits {
                    println!("{} [{}]", line(hit.stop), hit.score);
                }
            }
        }

        Commands::Nearby {
            lat,
            lon,
            radius,
            limit,
            metric,
        } => {
            let nearby = repo.index().nearby_with(metric, lat, lon, radius, limit);
            if nearby.is_empty() {
                println!("No bus stops within {radius} m of {lat}, {lon}");
            } else {
                for n in nearby {
                    println!("{} ({:.0} m)", line(n.stop), n.distance_meters);
                }
            }
        }
    }

    Ok(())
}

fn line(stop: &BusStop) -> String {
    format!("{} {} ({})", stop.code(), stop.description(), stop.road_name())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "busstop_core=debug,busstop=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
