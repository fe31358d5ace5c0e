//! Basic benchmarks for the `bounded_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use alloc_tracker::Allocator;
use bounded_pool::BoundedPool;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

const BUFFER_LEN: usize = 64 * 1024;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("bp_cycle");

    let allocs_op = allocs.operation("pooled");
    group.bench_function("pooled", |b| {
        b.iter_custom(|iters| {
            let mut pool = BoundedPool::new(|| vec![0_u8; BUFFER_LEN], 1);
            pool.prefill(1);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let buffer = black_box(pool.acquire());
                pool.release(buffer);
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("unpooled");
    group.bench_function("unpooled", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(vec![0_u8; BUFFER_LEN]));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("bp_release");

    let allocs_op = allocs.operation("retained");
    group.bench_function("retained", |b| {
        b.iter_custom(|iters| {
            let mut pools = (0..iters)
                .map(|_| BoundedPool::new(|| 0_usize, 1))
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for pool in &mut pools {
                pool.release(black_box(1));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("discarded");
    group.bench_function("discarded", |b| {
        b.iter_custom(|iters| {
            let mut pool = BoundedPool::new(|| 0_usize, 0);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                pool.release(black_box(1));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("bp_observe");

    let allocs_op = allocs.operation("len");
    group.bench_function("len", |b| {
        b.iter_custom(|iters| {
            let mut pool = BoundedPool::new(|| 0_usize, 16);
            pool.prefill(16);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(pool.len());
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
