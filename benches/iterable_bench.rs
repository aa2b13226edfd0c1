//! Benchmark for keyed sequence operators.
//!
//! Compares lazy operator chains against the equivalent hand-written
//! iterator pipelines, and measures `combine` and `resolve`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dryist::algebra::invert;
use dryist::iterable::{OrderedMap, Producer, combine, count, filter, map, map_key, resolve};
use std::hint::black_box;

// =============================================================================
// Chain Benchmarks
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain");

    for size in [100, 1_000, 10_000] {
        let items: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("operators", size), &items, |bencher, items| {
            bencher.iter(|| {
                let chain = map(
                    filter(map_key(items, |key| key * 2), |value| **value % 3 != 0),
                    |value| value * 7,
                );
                black_box(count(chain))
            });
        });

        group.bench_with_input(BenchmarkId::new("baseline", size), &items, |bencher, items| {
            bencher.iter(|| {
                let chain = items
                    .iter()
                    .enumerate()
                    .map(|(key, value)| (key * 2, value))
                    .filter(|(_, value)| **value % 3 != 0)
                    .map(|(key, value)| (key, value * 7));
                black_box(chain.count())
            });
        });
    }

    group.finish();
}

fn benchmark_infinite_prefix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("infinite_prefix");

    let is_even = |value: &u64| value % 2 == 0;

    for prefix in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("take", prefix), &prefix, |bencher, &prefix| {
            bencher.iter(|| {
                let odds = filter(Producer::list(0_u64..), invert(is_even));
                black_box(odds.take(prefix).count())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Materialization Benchmarks
// =============================================================================

fn benchmark_resolve(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resolve");

    for size in [100, 1_000, 10_000] {
        let items: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("unique_keys", size), &items, |bencher, items| {
            bencher.iter(|| black_box(resolve(items).len()));
        });

        group.bench_with_input(
            BenchmarkId::new("colliding_keys", size),
            &items,
            |bencher, items| {
                bencher.iter(|| black_box(resolve(map_key(items, |key| key % 16)).len()));
            },
        );
    }

    group.finish();
}

fn benchmark_combine(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combine");

    for size in [100, 1_000, 10_000] {
        let names: Vec<String> = (0..size).map(|index| format!("key-{index}")).collect();
        let scores: Vec<usize> = (0..size).collect();

        group.bench_function(BenchmarkId::new("resolve", size), |bencher| {
            bencher.iter(|| {
                let combined: OrderedMap<&String, &usize> =
                    resolve(combine(&names, &scores).unwrap_or_else(|error| panic!("{error}")));
                black_box(combined.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_chain,
    benchmark_infinite_prefix,
    benchmark_resolve,
    benchmark_combine
);
criterion_main!(benches);
