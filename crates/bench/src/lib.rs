use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset from the input size.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Deterministic generator for one benchmark case; distinct salts give independent streams.
pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    FewDistinctKeys,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewDistinctKeys,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinctKeys => "few_distinct_keys",
        }
    }
}

/// `(key, tag)` records tagged with their input position.
pub fn keyed_records<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    size: usize,
) -> Vec<(u64, u32)> {
    let mut keys: Vec<u64> = match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random()).collect(),
        Distribution::NearlySorted1pctSwaps => (0..size as u64).collect(),
        Distribution::FewDistinctKeys => (0..size).map(|_| rng.random_range(0..16)).collect(),
    };

    if dist == Distribution::NearlySorted1pctSwaps && size > 0 {
        let swaps = (size / 100).max(1);
        for _ in 0..swaps {
            let a = rng.random_range(0..size);
            let b = rng.random_range(0..size);
            keys.swap(a, b);
        }
    }

    keys.into_iter().zip(0..).collect()
}

/// `k` ascending lists holding `total` random keys between them.
pub fn sorted_lists<R: Rng + ?Sized>(rng: &mut R, k: usize, total: usize) -> Vec<Vec<u64>> {
    let mut lists = vec![Vec::with_capacity(total / k.max(1) + 1); k];
    if k == 0 {
        return lists;
    }
    for _ in 0..total {
        let list = rng.random_range(0..k);
        lists[list].push(rng.random());
    }
    for list in &mut lists {
        list.sort_unstable();
    }
    lists
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
