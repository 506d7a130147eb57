//! Iterator combinator benchmark.
//!
//! `chunk` (eager, cloning) against `chunk_iter` (lazy, moving), and the
//! duplicate scans over inputs with a bounded number of distinct values.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use utilkit::iter::{chunk, chunk_iter, frequency_table, unique};

const SIZES: [usize; 3] = [100, 1000, 10000];

fn generate_values(size: usize) -> Vec<u64> {
    (0..size as u64).map(|value| value % 97).collect()
}

fn benchmark_chunk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter_chunk");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("chunk", size), &size, |bencher, _| {
            bencher.iter(|| black_box(chunk(black_box(&values), 16)));
        });
        group.bench_with_input(BenchmarkId::new("chunk_iter", size), &size, |bencher, _| {
            bencher.iter_batched(
                || values.clone(),
                |owned| {
                    chunk_iter(owned, 16)
                        .map(|chunks| chunks.count())
                        .unwrap_or_default()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_duplicate_scans(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter_duplicates");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("unique", size), &size, |bencher, _| {
            bencher.iter(|| black_box(unique(black_box(&values).iter().copied())));
        });
        group.bench_with_input(
            BenchmarkId::new("frequency_table", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(frequency_table(black_box(&values).iter().copied())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_chunk, benchmark_duplicate_scans);

criterion_main!(benches);
