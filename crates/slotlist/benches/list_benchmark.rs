//! # List Benchmark
//!
//! Measures the O(1) head operations, the recycling path, and the O(len)
//! walks on a full list.
//!
//! Run with: `cargo bench --package slotlist`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slotlist::ArrayLinkedList;

/// Capacity of the lists used for head and recycling benchmarks.
const CAPACITY: usize = 100_000;

fn full_list(len: usize) -> ArrayLinkedList<u64> {
    let mut list = ArrayLinkedList::new(len).unwrap();
    list.try_extend(0..len as u64).unwrap();
    list
}

/// Benchmark: fill an empty list from the head.
fn bench_add_first(c: &mut Criterion) {
    c.bench_function("add_first_100K", |b| {
        b.iter(|| {
            let mut list = ArrayLinkedList::new(CAPACITY).unwrap();
            for value in 0..CAPACITY as u64 {
                list.add_first(black_box(value)).unwrap();
            }
            list.len()
        });
    });
}

/// Benchmark: remove and re-insert at the head, always hitting the free list.
fn bench_recycle(c: &mut Criterion) {
    let mut list = full_list(CAPACITY);

    c.bench_function("recycle_head_100K", |b| {
        b.iter(|| {
            for _ in 0..1_000 {
                let value = list.remove_first().unwrap();
                list.add_first(black_box(value)).unwrap();
            }
        });
    });
}

/// Benchmark: chain walks that scale with length.
fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("walks");

    for len in [1_000usize, 10_000, CAPACITY] {
        let mut list = full_list(len);
        let last = len as u64 - 1;

        group.bench_with_input(BenchmarkId::new("search_last", len), &last, |b, last| {
            b.iter(|| list.search(black_box(last)).unwrap());
        });

        let list = full_list(len);
        group.bench_with_input(BenchmarkId::new("iterate_sum", len), &list, |b, list| {
            b.iter(|| list.iter().sum::<u64>());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_first, bench_recycle, bench_walks);
criterion_main!(benches);
