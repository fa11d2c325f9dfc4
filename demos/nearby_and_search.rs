//! Search and nearby example for busstop-rs
//!
//! Builds a repository from the bundled dataset and synonym file and runs the
//! queries a chat bot's inline-query and location handlers would.

use busstop_rs::prelude::*;

fn main() -> Result<()> {
    let dir = BusStopIndex::default_data_dir();
    let index = BusStopIndex::load_from_path(dir.join("bus_stops.json"))?;
    let synonyms = SynonymTable::load_from_path(dir.join("synonyms.json"))?;
    let repo = StopRepository::new(index, synonyms);

    println!("--- Search: \"victoria school\" ---");
    for hit in repo.search_scored("victoria school", 5) {
        println!("  [{}] {} {}", hit.score, hit.stop.code(), hit.stop.description());
    }
    println!();

    println!("--- Search: \"bukit panjang interchange\" (top 3) ---");
    for stop in repo.search("bukit panjang interchange", 3) {
        println!("  {} {}", stop.code(), stop.description());
    }
    println!();

    println!("--- Nearby: Bras Basah, 300 m ---");
    for n in repo.nearby(1.2968, 103.8527, 300.0, 0) {
        println!("  {:>4.0} m  {} {}", n.distance_meters, n.stop.code(), n.stop.description());
    }
    println!();

    println!("--- Nearby with both metrics ---");
    for metric in [DistanceMetric::Haversine, DistanceMetric::EquatorialPlane] {
        if let Some(n) = repo.index().nearby_with(metric, 1.3837, 103.75, 10_000.0, 1).first() {
            println!("  {metric:?}: {} at {:.3} m", n.stop.code(), n.distance_meters);
        }
    }

    Ok(())
}
