use busstop_core::{BusStop, BusStopIndex, SynonymTable};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const ROADS: &[&str] = &["Victoria St", "Orchard Rd", "Bt Timah Rd", "Woodlands Ave 2", "Tampines Ctrl 1"];
const PLACES: &[&str] = &["Hotel", "Stn", "Int", "Sch", "Blk 123", "Opp Pk", "Condo", "Mkt"];

/// Roughly national scale: 5,000 stops spread over Singapore.
fn synthetic_index() -> BusStopIndex {
    (0..5_000)
        .map(|i| {
            let lat = 1.25 + (i % 100) as f64 * 0.002;
            let lon = 103.65 + (i / 100) as f64 * 0.006;
            BusStop::new(
                format!("{:05}", i),
                ROADS[i % ROADS.len()],
                format!("{} {}", PLACES[i % PLACES.len()], i),
                lat,
                lon,
            )
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let index = synthetic_index();
    let synonyms = SynonymTable::standard();

    c.bench_function("get", |b| b.iter(|| index.get(black_box("04159"))));

    c.bench_function("search/two_tokens", |b| {
        b.iter(|| index.search(black_box("victoria hotel"), synonyms, 10))
    });

    c.bench_function("search/synonyms_unlimited", |b| {
        b.iter(|| index.search(black_box("opposite park station"), synonyms, 0))
    });

    c.bench_function("search/blank", |b| b.iter(|| index.search(black_box(""), synonyms, 20)));

    c.bench_function("nearby/500m", |b| {
        b.iter(|| index.nearby(black_box(1.3), black_box(103.8), 500.0, 10))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
