//! Benchmark for MapBuilder vs direct container population.
//!
//! Compares building a map through the fluent builder against populating
//! the standard containers directly, to measure the overhead of the shared
//! handle and the freeze check.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fluentmap::MapBuilder;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// build Benchmark
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("MapBuilder::ordered", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut builder = MapBuilder::ordered();
                    for index in 0..size {
                        builder = builder.put(black_box(index), black_box(index * 2)).unwrap();
                    }
                    black_box(builder.read_only().build())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("IndexMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = IndexMap::new();
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("MapBuilder::hashed", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut builder = MapBuilder::hashed();
                    for index in 0..size {
                        builder = builder.put(black_box(index), black_box(index * 2)).unwrap();
                    }
                    black_box(builder.read_only().build())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = HashMap::new();
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1_000, 10_000] {
        let mut builder = MapBuilder::ordered();
        for index in 0..size {
            builder = builder.put(index, index * 2).unwrap();
        }
        let shared = builder.read_only().build();

        let mut plain = IndexMap::new();
        for index in 0..size {
            plain.insert(index, index * 2);
        }

        group.bench_with_input(
            BenchmarkId::new("SharedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(shared.get(&black_box(index)).as_deref());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("IndexMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(plain.get(&black_box(index)));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_get);
criterion_main!(benches);
