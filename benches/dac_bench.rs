// this file benchmarks the core operations of committee attestations

#[macro_use]
extern crate criterion;

mod benchmarks;

criterion_main!(
    benchmarks::bench_api::api,
    benchmarks::bench_keyset::keyset,
);
