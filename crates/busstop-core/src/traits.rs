// crates/busstop-core/src/traits.rs
use crate::model::{BusStop, NearbyStop};

/// The three queries message handlers run against a bus stop repository.
///
/// Handlers depend on this trait rather than on [`StopRepository`](crate::StopRepository)
/// so they can be exercised against a canned implementation.
///
/// # Example
///
/// ```
/// use busstop_core::{BusStop, BusStopIndex, StopLookup, StopRepository, SynonymTable};
///
/// fn describe(repo: &impl StopLookup, code: &str) -> String {
///     match repo.get(code) {
///         Some(stop) => format!("{} ({})", stop.description(), stop.road_name()),
///         None => format!("No stop {code}"),
///     }
/// }
///
/// let index = BusStopIndex::new(vec![
///     BusStop::new("01012", "Victoria St", "Hotel Grand Pacific", 1.2968, 103.8525),
/// ]);
/// let repo = StopRepository::new(index, SynonymTable::new());
/// assert_eq!(describe(&repo, "01012"), "Hotel Grand Pacific (Victoria St)");
/// assert_eq!(describe(&repo, "99999"), "No stop 99999");
/// ```
pub trait StopLookup {
    /// Exact lookup by stop code.
    fn get(&self, code: &str) -> Option<&BusStop>;

    /// Ranked free-text search; `limit == 0` means no limit.
    fn search(&self, query: &str, limit: usize) -> Vec<&BusStop>;

    /// Stops within `radius_meters`, nearest first; `limit == 0` means no limit.
    fn nearby(&self, lat: f64, lon: f64, radius_meters: f64, limit: usize) -> Vec<NearbyStop<'_>>;
}
