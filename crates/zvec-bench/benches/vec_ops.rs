//! Criterion micro-benchmarks for push growth, sorting, and removal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zvec::ZVec;

/// Build a vector of `n` pseudo-random u64 values (xorshift, fixed seed).
fn make_scrambled(n: usize) -> ZVec<u64> {
    let mut v = ZVec::with_capacity(n).unwrap();
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        v.push(state).unwrap();
    }
    v
}

/// Benchmark: 10K pushes from empty, paying the doubling growth path.
fn bench_push_grow_10k(c: &mut Criterion) {
    c.bench_function("push_grow_10k", |b| {
        b.iter(|| {
            let mut v = ZVec::new();
            for i in 0..10_000u64 {
                v.push(black_box(i)).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: 10K pushes into a pre-reserved buffer — no reallocation.
fn bench_push_reserved_10k(c: &mut Criterion) {
    c.bench_function("push_reserved_10k", |b| {
        b.iter(|| {
            let mut v = ZVec::with_capacity(10_000).unwrap();
            for i in 0..10_000u64 {
                v.push(black_box(i)).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: unstable sort of 10K scrambled values.
fn bench_sort_10k(c: &mut Criterion) {
    c.bench_function("sort_10k", |b| {
        b.iter(|| {
            let mut v = make_scrambled(10_000);
            v.sort_by(|a, b| a.cmp(b));
            black_box(*v.at(0).unwrap());
        });
    });
}

/// Benchmark: drain 1K elements by swap_remove(0) — O(1) per removal.
fn bench_swap_remove_drain_1k(c: &mut Criterion) {
    c.bench_function("swap_remove_drain_1k", |b| {
        b.iter(|| {
            let mut v = make_scrambled(1_000);
            while let Some(x) = v.swap_remove(0) {
                black_box(x);
            }
            black_box(v.is_empty());
        });
    });
}

criterion_group!(
    benches,
    bench_push_grow_10k,
    bench_push_reserved_10k,
    bench_sort_10k,
    bench_swap_remove_drain_1k
);
criterion_main!(benches);
