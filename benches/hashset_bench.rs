//! HashSet benchmark.
//!
//! Measures insertion (including rehashes), lookups and removal for several
//! load factors. A small load factor rehashes often and keeps buckets short;
//! a large one does the opposite.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slotset::HashSet;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1000, 10000];
const LOAD_FACTORS: [usize; 3] = [1, 4, 20];

fn populated(size: u64, load_factor: usize) -> HashSet<u64> {
    let mut set = HashSet::with_load_factor(1, load_factor).unwrap();
    set.extend(0..size);
    set
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("hashset_insert");

    for size in SIZES {
        for load_factor in LOAD_FACTORS {
            group.bench_with_input(
                BenchmarkId::new(format!("load_factor_{load_factor}"), size),
                &size,
                |bencher, &size| {
                    bencher.iter(|| {
                        let mut set = HashSet::with_load_factor(1, load_factor).unwrap();
                        for value in 0..size {
                            set.insert(black_box(value));
                        }
                        black_box(set)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("hashset_contains");

    for size in SIZES {
        for load_factor in LOAD_FACTORS {
            let set = populated(size, load_factor);
            group.bench_with_input(
                BenchmarkId::new(format!("load_factor_{load_factor}"), size),
                &size,
                |bencher, &size| {
                    bencher.iter(|| {
                        let mut hits = 0;
                        for value in 0..size * 2 {
                            if set.contains(black_box(&value)) {
                                hits += 1;
                            }
                        }
                        black_box(hits)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("hashset_remove");

    for size in SIZES {
        let base = populated(size, 4);
        group.bench_with_input(BenchmarkId::new("remove_all", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut set| {
                    for value in 0..size {
                        black_box(set.remove(&value));
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("hashset_iterate");

    for size in SIZES {
        let set = populated(size, 4);
        group.bench_with_input(BenchmarkId::new("sum", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.iter().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_remove,
    benchmark_iterate
);

criterion_main!(benches);
