//! Ordering and limit properties of `search` and `nearby` over random data.

use busstop_core::score::score;
use busstop_core::text::{expand_synonyms, tokenize};
use busstop_core::{BusStop, BusStopIndex, SynonymTable};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "bt", "panjang", "victoria", "st", "rd", "opp", "int", "hotel", "sch", "pk", "merah", "ave",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(str::to_string)
}

fn arb_phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..4).prop_map(|w| w.join(" "))
}

fn arb_stops() -> impl Strategy<Value = Vec<BusStop>> {
    prop::collection::vec((arb_phrase(), arb_phrase(), 1.20f64..1.47, 103.6f64..104.0), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (road, desc, lat, lon))| BusStop::new(format!("{:05}", i), road, desc, lat, lon))
            .collect()
    })
}

fn synonyms() -> SynonymTable {
    [("bukit", "bt"), ("park", "pk"), ("street", "st"), ("school", "sch")]
        .into_iter()
        .collect()
}

fn position(index: &BusStopIndex, stop: &BusStop) -> usize {
    index
        .iter()
        .position(|s| std::ptr::eq(s, stop))
        .expect("result must come from the index")
}

proptest! {
    #[test]
    fn search_hits_score_positive_and_are_ordered(stops in arb_stops(), query in arb_phrase(), limit in 0usize..10) {
        let index = BusStopIndex::new(stops);
        let table = synonyms();
        let tokens = expand_synonyms(tokenize(&query), &table);
        let hits = index.search(&query, &table, limit);

        if tokens.is_empty() {
            let expected = if limit == 0 { index.len() } else { limit.min(index.len()) };
            prop_assert_eq!(hits.len(), expected);
            for (i, stop) in hits.iter().enumerate() {
                prop_assert_eq!(position(&index, stop), i);
            }
        } else {
            for stop in &hits {
                prop_assert!(score(stop, &tokens[..]) > 0);
            }
            for pair in hits.windows(2) {
                let (a, b) = (score(pair[0], &tokens[..]), score(pair[1], &tokens[..]));
                prop_assert!(a > b || (a == b && position(&index, pair[0]) < position(&index, pair[1])));
            }
            let unlimited = index.search(&query, &table, 0);
            prop_assert!(unlimited.iter().all(|s| score(s, &tokens[..]) > 0));
            let qualifying = index.iter().filter(|s| score(s, &tokens[..]) > 0).count();
            prop_assert_eq!(unlimited.len(), qualifying);
            if limit > 0 {
                prop_assert!(hits.len() <= limit);
                prop_assert_eq!(&hits[..], &unlimited[..hits.len()]);
            }
        }
    }

    #[test]
    fn nearby_is_sorted_bounded_and_limited(
        stops in arb_stops(),
        lat in 1.20f64..1.47,
        lon in 103.6f64..104.0,
        radius in 0.0f64..30_000.0,
        limit in 0usize..10,
    ) {
        let index = BusStopIndex::new(stops);
        let all = index.nearby(lat, lon, radius, 0);
        let limited = index.nearby(lat, lon, radius, limit);

        prop_assert!(all.iter().all(|n| n.distance_meters <= radius));
        for pair in all.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.distance_meters < b.distance_meters
                    || (a.distance_meters == b.distance_meters
                        && position(&index, a.stop) < position(&index, b.stop))
            );
        }
        if limit > 0 {
            prop_assert!(limited.len() <= limit);
            prop_assert_eq!(&limited[..], &all[..limited.len()]);
        } else {
            prop_assert_eq!(limited.len(), all.len());
        }
    }

    #[test]
    fn queries_are_deterministic(stops in arb_stops(), query in arb_phrase()) {
        let index = BusStopIndex::new(stops);
        let table = synonyms();
        prop_assert_eq!(index.search(&query, &table, 0), index.search(&query, &table, 0));
        prop_assert_eq!(index.nearby(1.3, 103.8, 5_000.0, 0), index.nearby(1.3, 103.8, 5_000.0, 0));
    }
}
