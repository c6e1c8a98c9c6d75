//! Criterion micro-benchmarks for view operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexSet;
use weft_commute::{CommutedSet, FnCommuter};
use weft_core::{Collection, Map, MapEntry};
use weft_grid::{BiList, DenseMatrix, MatrixExt};
use weft_map::IterativeMap;

/// Benchmark: walk every cell of a 100x100 dense matrix through cells().
fn bench_dense_cells_10k(c: &mut Criterion) {
    let mut m = DenseMatrix::new(100, 100, 0usize).unwrap();
    for i in 0..100 * 100 {
        m.set(i / 100, i % 100, i).unwrap();
    }

    c.bench_function("dense_cells_10k", |b| {
        b.iter(|| {
            for cell in m.cells() {
                black_box(&cell);
            }
        });
    });
}

/// Benchmark: read a 100x100 matrix through its horizontal mirror.
fn bench_mirrored_reads_10k(c: &mut Criterion) {
    let mirror = DenseMatrix::new(100, 100, 7usize).unwrap().mirrored();

    c.bench_function("mirrored_reads_10k", |b| {
        b.iter(|| {
            for row in 0..100 {
                for column in 0..100 {
                    black_box(mirror.get(row, column));
                }
            }
        });
    });
}

/// Benchmark: 10K write-through inserts into a commuted set.
fn bench_commuted_insert_10k(c: &mut Criterion) {
    c.bench_function("commuted_insert_10k", |b| {
        b.iter(|| {
            let shift = FnCommuter::new(|n: &i64| n + 1, |n: &i64| Ok(n - 1));
            let mut view = CommutedSet::new(IndexSet::<i64>::new(), shift);
            for n in 0..10_000i64 {
                view.insert(black_box(n)).unwrap();
            }
            black_box(view.len());
        });
    });
}

/// Benchmark: scanning lookup over a 1K-entry iterative map.
fn bench_iterative_map_get_1k(c: &mut Criterion) {
    let backing: Vec<MapEntry<u32, u32>> = (0..1000).map(|n| MapEntry::new(n, n * 2)).collect();
    let map = IterativeMap::new(backing);

    c.bench_function("iterative_map_get_1k", |b| {
        b.iter(|| {
            black_box(map.get(&black_box(999)));
        });
    });
}

criterion_group!(
    benches,
    bench_dense_cells_10k,
    bench_mirrored_reads_10k,
    bench_commuted_insert_10k,
    bench_iterative_map_get_1k
);
criterion_main!(benches);
