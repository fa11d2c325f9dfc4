// crates/busstop-core/src/repository.rs
use crate::index::BusStopIndex;
use crate::model::{BusStop, DbStats, NearbyStop, SearchHit};
use crate::text::SynonymTable;
use crate::traits::StopLookup;

/// An index together with the synonym table its searches use.
///
/// Built once at startup and then only read; wrap it in an `Arc` to hand
/// it to several request handlers.
#[derive(Debug, Clone, Default)]
pub struct StopRepository {
    index: BusStopIndex,
    synonyms: SynonymTable,
}

impl StopRepository {
    pub fn new(index: BusStopIndex, synonyms: SynonymTable) -> Self {
        StopRepository { index, synonyms }
    }

    pub fn index(&self) -> &BusStopIndex {
        &self.index
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn stats(&self) -> DbStats {
        self.index.stats()
    }

    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        self.index.search_scored(query, &self.synonyms, limit)
    }
}

impl StopLookup for StopRepository {
    fn get(&self, code: &str) -> Option<&BusStop> {
        self.index.get(code)
    }

    fn search(&self, query: &str, limit: usize) -> Vec<&BusStop> {
        self.index.search(query, &self.synonyms, limit)
    }

    fn nearby(&self, lat: f64, lon: f64, radius_meters: f64, limit: usize) -> Vec<NearbyStop<'_>> {
        self.index.nearby(lat, lon, radius_meters, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn repo() -> StopRepository {
        let index = BusStopIndex::new(vec![
            BusStop::new("00481", "Woodlands Rd", "BT PANJANG TEMP BUS PK", 1.383764, 103.7583),
            BusStop::new("01012", "Victoria St", "Hotel Grand Pacific", 1.29684825487647, 103.85253591654006),
        ]);
        let synonyms: SynonymTable = [("park", "pk")].into_iter().collect();
        StopRepository::new(index, synonyms)
    }

    #[test]
    fn uses_its_own_synonyms() {
        let repo = repo();
        let hits = repo.search("park", 0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code(), "00481");
        assert_eq!(repo.search_scored("park", 0)[0].score, 2);
    }

    #[test]
    fn delegates_get_and_nearby() {
        let repo = repo();
        assert_eq!(repo.get("01012").map(BusStop::code), Some("01012"));
        assert!(repo.get("").is_none());
        assert_eq!(repo.nearby(1.3837, 103.75, 10_000.0, 0).len(), 1);
        assert_eq!(repo.stats().stops, 2);
    }

    #[test]
    fn concurrent_readers_see_identical_results() {
        let repo = Arc::new(repo());
        let expected: Vec<String> = repo
            .search("victoria hotel pk", 0)
            .iter()
            .map(|s| s.code.clone())
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    repo.search("victoria hotel pk", 0)
                        .iter()
                        .map(|s| s.code.clone())
                        .collect::<Vec<String>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
