//! Criterion benchmarks for full generation advance.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lifegrid_bench::{reference_profile, stress_profile};
use lifegrid_engine::LockstepWorld;

/// Benchmark: one generation of the 128x128 reference soup.
fn bench_step_reference(c: &mut Criterion) {
    c.bench_function("step_reference_128x128", |b| {
        b.iter_batched(
            || LockstepWorld::new(reference_profile(42, 1)).unwrap(),
            |mut world| {
                let result = world.step().unwrap();
                black_box(result.metrics.live_cells);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: ten generations of the 128x128 reference soup.
fn bench_ten_steps_reference(c: &mut Criterion) {
    c.bench_function("ten_steps_reference_128x128", |b| {
        b.iter_batched(
            || LockstepWorld::new(reference_profile(42, 10)).unwrap(),
            |mut world| {
                while !world.is_terminated() {
                    world.step().unwrap();
                }
                black_box(world.live_cells());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: one generation of the 512x512 stress soup.
fn bench_step_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(20);
    group.bench_function("step_stress_512x512", |b| {
        b.iter_batched(
            || LockstepWorld::new(stress_profile(7, 1)).unwrap(),
            |mut world| {
                let result = world.step().unwrap();
                black_box(result.metrics.live_cells);
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_ten_steps_reference,
    bench_step_stress
);
criterion_main!(benches);
