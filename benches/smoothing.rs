//! Benchmarks for the smoothing functions and metrics.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exp_smoothing::prelude::*;

fn generate_seasonal(n: usize, period: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            50.0 + 0.1 * t + 10.0 * (2.0 * std::f64::consts::PI * t / period as f64).sin()
        })
        .collect()
}

fn bench_smoothers(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothers");

    for size in [128, 1024, 8192, 65536].iter() {
        let data = generate_seasonal(*size, 12);

        group.bench_with_input(BenchmarkId::new("single", size), size, |b, _| {
            b.iter(|| exp_smooth(black_box(&data), 0.3))
        });

        group.bench_with_input(BenchmarkId::new("double", size), size, |b, _| {
            b.iter(|| double_exp_smooth(black_box(&data), 0.3, 0.1))
        });

        group.bench_with_input(BenchmarkId::new("holt_winters", size), size, |b, _| {
            b.iter(|| holt_winters(black_box(&data), 0.3, 0.1, 0.1, 12, 24))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    for size in [128, 1024, 8192].iter() {
        let data = generate_seasonal(*size, 12);

        // One evaluation of an optimizer objective: smooth, then score.
        group.bench_with_input(BenchmarkId::new("hw_mse", size), size, |b, _| {
            b.iter(|| {
                holt_winters_partitioned(black_box(&data), 0.3, 0.1, 0.1, 12, 0)
                    .and_then(|forecast| mse(forecast.smoothed(), &data))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_smoothers, bench_scoring);
criterion_main!(benches);
