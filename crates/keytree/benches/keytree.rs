use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{Distribution, apply_runtime_for_size, keyed_records, seeded_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keytree::KeyedTree;
use rand::Rng;

const SIZES: [usize; 3] = [1_000, 16_000, 128_000];
const SORTED_INSERT_SIZES: [usize; 2] = [1_000, 4_000];
const LOOKUPS_PER_ITER: usize = 1_000;

fn by_key(record: &(u64, u32)) -> u64 {
    record.0
}

fn build(records: &[(u64, u32)]) -> KeyedTree<(u64, u32), fn(&(u64, u32)) -> u64> {
    let mut tree = KeyedTree::with_key(by_key as fn(&(u64, u32)) -> u64);
    tree.extend(records.iter().copied());
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_tree/insert");

    for &size in &SIZES {
        apply_runtime_for_size(&mut group, size);
        let mut rng = seeded_rng(size as u64);
        let records = keyed_records(&mut rng, Distribution::RandomUniform, size);
        group.bench_function(BenchmarkId::new("random", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let start = Instant::now();
                    let tree = build(&records);
                    total += start.elapsed();
                    black_box(tree.len());
                }
                total
            });
        });
    }

    // Ascending keys degrade the tree to a chain.
    for &size in &SORTED_INSERT_SIZES {
        apply_runtime_for_size(&mut group, size);
        let records: Vec<(u64, u32)> = (0..size as u64).zip(0..).collect();
        group.bench_function(BenchmarkId::new("ascending", size), |bencher| {
            bencher.iter(|| black_box(build(&records).height()));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_tree/search");

    for &size in &SIZES {
        apply_runtime_for_size(&mut group, size);
        let mut rng = seeded_rng(0x5EA2_C400 ^ size as u64);
        let records = keyed_records(&mut rng, Distribution::RandomUniform, size);
        let tree = build(&records);
        let probes: Vec<u64> = (0..LOOKUPS_PER_ITER)
            .map(|_| {
                if rng.random_bool(0.8) {
                    records[rng.random_range(0..size)].0
                } else {
                    rng.random()
                }
            })
            .collect();

        group.bench_function(BenchmarkId::new("search_key_80pct_hit", size), |bencher| {
            bencher.iter(|| {
                for probe in &probes {
                    black_box(tree.search_key(probe));
                }
            });
        });
    }

    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_tree/inorder");

    for &size in &SIZES {
        apply_runtime_for_size(&mut group, size);
        let mut rng = seeded_rng(!(size as u64));
        let records = keyed_records(&mut rng, Distribution::RandomUniform, size);
        let tree = build(&records);
        group.bench_function(BenchmarkId::new("iter_sum", size), |bencher| {
            bencher.iter(|| black_box(tree.iter().fold(0_u64, |acc, r| acc ^ r.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_traverse);
criterion_main!(benches);
