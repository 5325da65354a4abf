use criterion::{criterion_group, criterion_main, Criterion};

use mcpi::callbacks::{SinkCallback, SinkProgress};
use mcpi::geometry::{Circle, Point};
use mcpi::harness::run_series_set;
use mcpi::integrators::hit_or_miss::PiEstimator;
use mcpi::StreamMode;

use rand_pcg::Pcg64;

fn estimator() -> PiEstimator<f64, SinkProgress> {
    let circle = Circle::new(Point::new(0.0, 2.0), 5.0).unwrap();
    PiEstimator::new(circle, SinkProgress {})
}

fn benchmark_calc_pi() {
    // initialize the random number generator
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let _ = estimator().calc_pi(&mut rng, 100_000);
}

fn benchmark_series_set() {
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let _ = run_series_set(
        &estimator(),
        &mut rng,
        &[1_000, 10_000, 100_000],
        5,
        StreamMode::Sequential,
        &SinkCallback {},
    );
}

fn criterion_estimator_benchmark(c: &mut Criterion) {
    c.bench_function("calc_pi 100k", |b| b.iter(|| benchmark_calc_pi()));
    c.bench_function("series set 5x3", |b| b.iter(|| benchmark_series_set()));
}

criterion_group!(benches, criterion_estimator_benchmark);
criterion_main!(benches);
