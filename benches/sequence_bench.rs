//! Criterion benchmarks for the sequence containers and adapters

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::{LinkedList, VecDeque};

use stdcoll::config::{Config, VectorConfig};
use stdcoll::{List, Queue, Stack, Vector};

// =============================================================================
// BENCHMARK CONFIGURATION
// =============================================================================

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

// =============================================================================
// VECTOR BENCHMARKS
// =============================================================================

fn bench_vector_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_push");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.push(black_box(i as u64)).unwrap();
                }
                black_box(vec)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Vector/performance_preset", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = Vector::with_config(VectorConfig::performance_preset()).unwrap();
                    for i in 0..size {
                        vec.push(black_box(i as u64)).unwrap();
                    }
                    black_box(vec)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("std::Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

// =============================================================================
// LIST BENCHMARKS
// =============================================================================

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_push_pop");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("List", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = List::new();
                for i in 0..size {
                    list.push_back(black_box(i)).unwrap();
                }
                while let Ok(v) = list.pop_front() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std::LinkedList", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                while let Some(v) = list.pop_front() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_list_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_sort");

    for &size in &SIZES[..2] {
        let values: Vec<u32> = (0..size as u32).map(|i| i.wrapping_mul(2_654_435_761)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("List::sort", size), &values, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<List<u32>>(),
                |mut list| {
                    list.sort();
                    list
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// ADAPTER BENCHMARKS
// =============================================================================

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    let size = 10_000;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("Stack push/pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..size {
                stack.push(black_box(i)).unwrap();
            }
            while let Ok(v) = stack.pop() {
                black_box(v);
            }
        });
    });

    // Queue::pop shifts the whole buffer, so keep the working set small
    group.bench_function("Queue rolling window", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..size {
                queue.push(black_box(i)).unwrap();
                if queue.len() > 32 {
                    black_box(queue.pop().unwrap());
                }
            }
        });
    });

    group.bench_function("std::VecDeque rolling window", |b| {
        b.iter(|| {
            let mut queue = VecDeque::new();
            for i in 0..size {
                queue.push_back(black_box(i));
                if queue.len() > 32 {
                    black_box(queue.pop_front());
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_vector_push, bench_list, bench_list_sort, bench_adapters);
criterion_main!(benches);
