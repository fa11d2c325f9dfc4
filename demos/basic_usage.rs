//! Basic usage example for busstop-rs
//!
//! This example demonstrates how to:
//! - Load the bundled bus stop dataset
//! - Look stops up by code
//! - Handle unknown codes and load errors

use busstop_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== busstop-rs Basic Usage Example ===\n");

    // Load the dataset (goes through the .bin cache after the first run)
    println!("Loading bus stop dataset...");
    let index = match BusStopIndex::load_default() {
        Ok(index) => index,
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    };
    let stats = index.stats();
    println!("✓ Loaded {} stops served by {} services\n", stats.stops, stats.services);

    // Example 1: First few stops in dataset order
    println!("--- Example 1: First stops ---");
    for (i, stop) in index.iter().take(5).enumerate() {
        println!("{}. {} {} ({})", i + 1, stop.code(), stop.description(), stop.road_name());
    }
    println!();

    // Example 2: Lookup by code, including codes that do not exist
    println!("--- Example 2: Lookup by code ---");
    for code in ["01012", "96049", "", "99999"] {
        match index.get(code) {
            Some(stop) => println!("  {code:>5}: {} ({})", stop.description(), stop.services().join(", ")),
            None => println!("  {code:>5}: not found"),
        }
    }

    Ok(())
}
