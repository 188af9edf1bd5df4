use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;
use ordtree::{OrderedMap, OrderedMultiMap, OrderedMultiSet, OrderedSet};

/// Size of the random-order workloads.
const N: usize = 10_000;

/// Size of the sorted-order workloads. Sorted input degenerates the tree into a
/// list, so these stay small enough for quadratic insertion to finish quickly.
const N_SORTED: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

/// Random keys drawn from a small domain, so most of them repeat.
fn duplicate_heavy_keys(n: usize) -> Vec<i64> {
    random_keys(n).into_iter().map(|k| k % 64).collect()
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert");

    for (label, keys) in [
        ("ordered", ordered_keys(N_SORTED)),
        ("reverse", reverse_ordered_keys(N_SORTED)),
        ("random", random_keys(N)),
    ] {
        group.bench_with_input(BenchmarkId::new("OrderedMap", label), &keys, |b, keys| {
            b.iter(|| {
                let mut map = OrderedMap::with_capacity(keys.len());
                for &k in keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", label), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in keys {
                    map.insert(k, k);
                }
                map
            });
        });
    }

    group.finish();
}

fn bench_map_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_get");

    for (label, keys) in [("ordered", ordered_keys(N_SORTED)), ("random", random_keys(N))] {
        let map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("OrderedMap", label), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    black_box(map.get(k));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", label), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    black_box(bt_map.get(k));
                }
            });
        });
    }

    group.finish();
}

fn bench_map_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_remove");

    for (label, keys) in [("reverse", reverse_ordered_keys(N_SORTED)), ("random", random_keys(N))] {
        let map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("OrderedMap", label), &keys, |b, keys| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for k in keys {
                        map.erase(k);
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", label), &keys, |b, keys| {
            b.iter_batched(
                || bt_map.clone(),
                |mut map| {
                    for k in keys {
                        map.remove(k);
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_map_lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_lower_bound");
    let keys = random_keys(N);
    let probes: Vec<i64> = keys.iter().map(|k| k + 1).collect();
    let map: OrderedMap<i64, ()> = keys.iter().map(|&k| (k, ())).collect();
    let bt_map: BTreeMap<i64, ()> = keys.iter().map(|&k| (k, ())).collect();

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(map.lower_bound(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(bt_map.range(k..).next());
            }
        });
    });

    group.finish();
}

// ─── Set Benchmarks ─────────────────────────────────────────────────────────

fn bench_set_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_insert_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("OrderedSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<OrderedSet<i64>>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

fn bench_set_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_iterate");
    let keys = random_keys(N);
    let set: OrderedSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    group.bench_function(BenchmarkId::new("OrderedSet", N), |b| {
        b.iter(|| set.iter().copied().sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt_set.iter().copied().sum::<i64>());
    });

    group.finish();
}

// ─── Multi Benchmarks ───────────────────────────────────────────────────────

fn bench_multi_insert_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_insert_duplicates");
    let keys = duplicate_heavy_keys(N);

    group.bench_function(BenchmarkId::new("OrderedMultiSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<OrderedMultiSet<i64>>());
    });

    group.bench_function(BenchmarkId::new("OrderedMultiMap", N), |b| {
        b.iter(|| keys.iter().map(|&k| (k, k)).collect::<OrderedMultiMap<i64, i64>>());
    });

    group.finish();
}

fn bench_multi_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_count");
    let keys = duplicate_heavy_keys(N);
    let set: OrderedMultiSet<i64> = keys.iter().copied().collect();

    group.bench_function(BenchmarkId::new("OrderedMultiSet", N), |b| {
        b.iter(|| (0..64).map(|k| set.count(&k)).sum::<usize>());
    });

    group.finish();
}

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove, bench_map_lower_bound,);

criterion_group!(set_benches, bench_set_insert_random, bench_set_iterate,);

criterion_group!(multi_benches, bench_multi_insert_duplicates, bench_multi_count,);

criterion_main!(map_benches, set_benches, multi_benches);
