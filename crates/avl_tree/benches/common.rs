use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use avl_tree::{AvlTree, OrderedMap};

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
const OPS_PER_ITER: usize = 256;
const GET_HIT_RATE_PERCENT: u32 = 80;

#[derive(Clone, Copy)]
enum Op {
    Get { key: u64 },
    LowerBound { key: u64 },
    Insert { key: u64, value: u64 },
    Remove { key: u64 },
}

fn apply_runtime_config_for_size<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    if size <= 10_000 {
        apply_small_runtime_config(group);
    } else if size <= 100_000 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn populated<M: OrderedMap<Key = u64, Value = u64>>(keys: &[u64]) -> M {
    let mut map = M::new();
    for &k in keys {
        map.insert(k, !k);
    }
    map
}

fn random_keys(size: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..size).map(|_| rng.random()).collect()
}

/// Read-only lookups, mostly hits.
fn generate_read_ops(keys: &[u64], rng: &mut StdRng) -> Vec<Op> {
    (0..OPS_PER_ITER)
        .map(|_| {
            if rng.random_bool(0.5) {
                let hit = rng.random_range(0..100) < GET_HIT_RATE_PERCENT;
                let key = if hit {
                    keys[rng.random_range(0..keys.len())]
                } else {
                    rng.random()
                };
                Op::Get { key }
            } else {
                Op::LowerBound { key: rng.random() }
            }
        })
        .collect()
}

/// Inserts fresh keys and removes them again in random order, so the map size is unchanged
/// after every batch while both fix-up paths run.
fn generate_churn_ops(rng: &mut StdRng) -> Vec<Op> {
    let mut fresh: Vec<u64> = (0..OPS_PER_ITER / 2).map(|_| rng.random()).collect();
    let mut ops: Vec<Op> = fresh
        .iter()
        .map(|&key| Op::Insert { key, value: key })
        .collect();
    fresh.shuffle(rng);
    ops.extend(fresh.into_iter().map(|key| Op::Remove { key }));
    ops
}

fn run_ops<M: OrderedMap<Key = u64, Value = u64>>(map: &mut M, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Get { key } => {
                black_box(map.get(&key).copied());
            }
            Op::LowerBound { key } => {
                black_box(map.lower_bound(&key).map(|(k, v)| (*k, *v)));
            }
            Op::Insert { key, value } => {
                black_box(map.insert(key, value));
            }
            Op::Remove { key } => {
                black_box(map.remove(&key));
            }
        }
    }
}

fn bench_ops<M, T, F>(group: &mut BenchmarkGroup<'_, T>, label: &str, seed: u64, generate: F)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
    F: Fn(&[u64], &mut StdRng) -> Vec<Op>,
{
    for &size in &SIZES {
        apply_runtime_config_for_size(size, group);
        let mut rng = StdRng::seed_from_u64(seed ^ size as u64);
        let keys = random_keys(size, &mut rng);
        let mut map: M = populated(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let ops = generate(&keys, &mut rng);
                    let start = Instant::now();
                    run_ops(&mut map, &ops);
                    total += start.elapsed();
                    black_box(map.len());
                }
                total
            })
        });
    }
}

/// Builds a map from scratch; ascending input forces a rotation on most inserts.
fn bench_build<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, sorted: bool)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES[..3] {
        apply_runtime_config_for_size(size, group);
        let mut keys = random_keys(size, &mut bench::default_rng());
        if sorted {
            keys.sort_unstable();
        }
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| black_box(populated::<M>(&keys).len()))
        });
    }
}

pub fn bench_all_read<T: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, T>) {
    bench_ops::<BTreeMap<u64, u64>, _, _>(group, "std_btree", 1, generate_read_ops);
    bench_ops::<AvlTree<u64, u64>, _, _>(group, "avl", 1, generate_read_ops);
}

pub fn bench_all_churn<T: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, T>) {
    let churn = |_: &[u64], rng: &mut StdRng| generate_churn_ops(rng);
    bench_ops::<BTreeMap<u64, u64>, _, _>(group, "std_btree", 2, churn);
    bench_ops::<AvlTree<u64, u64>, _, _>(group, "avl", 2, churn);
}

pub fn bench_all_build<T: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, T>) {
    bench_build::<BTreeMap<u64, u64>, _>(group, "std_btree/random", false);
    bench_build::<AvlTree<u64, u64>, _>(group, "avl/random", false);
    bench_build::<BTreeMap<u64, u64>, _>(group, "std_btree/sorted", true);
    bench_build::<AvlTree<u64, u64>, _>(group, "avl/sorted", true);
}
