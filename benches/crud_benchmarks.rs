use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use redblack_map::OrderedMap;
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

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

fn build_ordered_map(keys: &[i64]) -> OrderedMap<i64, i64> {
    let mut map = OrderedMap::natural().unwrap();
    for &k in keys {
        map.put(k, k).unwrap();
    }
    map
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, keys) in [
        ("insert_ordered", ordered_keys(N)),
        ("insert_reverse", reverse_ordered_keys(N)),
        ("insert_random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(name);

        group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
            b.iter(|| build_ordered_map(&keys));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

// ─── Lookup Benchmarks ──────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion) {
    let keys = random_keys(N);
    let rb_map = build_ordered_map(&keys);
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(rb_map.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(bt_map.get(k));
            }
        });
    });

    group.finish();
}

// ─── Removal Benchmarks ─────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || build_ordered_map(&keys),
            |mut map| {
                for k in &keys {
                    black_box(map.remove(k));
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    black_box(map.remove(k));
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Iteration Benchmarks ───────────────────────────────────────────────────

fn bench_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let rb_map = build_ordered_map(&keys);
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("iter");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| rb_map.iter().map(|(k, v)| k ^ v).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().map(|(k, v)| k ^ v).sum::<i64>());
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_remove, bench_iter);
criterion_main!(benches);
