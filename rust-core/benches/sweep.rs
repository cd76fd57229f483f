//! Sweep benchmarks
//!
//! Run with: cargo bench -p winding-analyzer-core --bench sweep
//! (add `--features parallel` for the rayon path)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use winding_analyzer::{Signal, SweepConfig, WindingSweep};

fn multi_tone(n: usize) -> Signal {
    let x: Vec<f64> = (0..n).map(|i| 50.0 * i as f64 / (n - 1) as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&t| (5.0 * t).sin() + (6.8 * t).sin() + (9.0 * t).sin() + (10.0 * t).sin() + 4.0)
        .collect();
    Signal::new(x, y).unwrap()
}

/// Full sweep construction, the dominant cost
fn bench_sweep_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_construction");
    group.sample_size(10);

    for &n in [1_000usize, 10_000].iter() {
        let signal = multi_tone(n);
        let config = SweepConfig::new(4.0, 11.0, 5000).unwrap();

        group.throughput(Throughput::Elements((n * config.sample_count) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| WindingSweep::new(black_box(signal.clone()), config.clone()).unwrap())
        });
    }

    group.finish();
}

/// Single-winding recompute, run once per slider change
fn bench_wind_at(c: &mut Criterion) {
    let sweep = WindingSweep::new(multi_tone(10_000), SweepConfig::new(4.0, 11.0, 2).unwrap()).unwrap();

    c.bench_function("wind_at_10k", |b| b.iter(|| sweep.wind_at(black_box(6.8))));
}

criterion_group!(benches, bench_sweep_construction, bench_wind_at);
criterion_main!(benches);
