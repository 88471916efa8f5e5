//! Benchmark for the function wrappers: Memoize hit/miss paths and Once.

use criterion::{Criterion, criterion_group, criterion_main};
use lowbar::wrapper::{Memoize, Once};
use std::hint::black_box;

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    // Cold path: every call computes and stores
    group.bench_function("miss", |bencher| {
        let mut argument = 0u64;
        let wrapper = Memoize::new(|n: u64| {
            let mut sum = 0;
            for index in 0..n % 64 {
                sum += index;
            }
            sum
        });
        bencher.iter(|| {
            argument += 1;
            black_box(wrapper.call(argument))
        });
    });

    // Hot path: the result is served from the cache
    group.bench_function("hit", |bencher| {
        let wrapper = Memoize::new(|n: u64| n * 2);
        let _ = wrapper.call(42);
        bencher.iter(|| black_box(wrapper.call(42)));
    });

    group.finish();
}

// =============================================================================
// Once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapper = Once::new(|n: u64| n * 2);
            black_box(*wrapper.call(21))
        });
    });

    group.bench_function("cached_call", |bencher| {
        let wrapper = Once::new(|n: u64| n * 2);
        let _ = wrapper.call(21);
        bencher.iter(|| black_box(*wrapper.call(999)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_memoize, benchmark_once);
criterion_main!(benches);
