use mcpi::analysis::{average_error_curve, calc_eps, calc_series_eps};
use mcpi::callbacks::{SinkCallback, SinkProgress};
use mcpi::geometry::{Circle, Point};
use mcpi::harness::{replay_series, run_series_set, Tester};
use mcpi::integrators::hit_or_miss::PiEstimator;
use mcpi::{Error, StreamMode};

use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::Serialize;
use std::f64::consts::PI;

fn assert_eq_rng<R>(lhs: &R, rhs: &R)
where
    R: Rng + Serialize,
{
    assert_eq!(
        serde_json::to_string(lhs).unwrap(),
        serde_json::to_string(rhs).unwrap()
    );
}

fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

fn estimator() -> PiEstimator<f64, SinkProgress> {
    let circle = Circle::new(Point::new(0.0, 2.0), 5.0).unwrap();
    PiEstimator::new(circle, SinkProgress {})
}

#[test]
fn error_decreases_with_sample_size() {
    // The number of independent series to average over
    const SERIES: usize = 20;
    let sizes = [1_000, 10_000, 100_000, 1_000_000];

    let set = run_series_set(
        &estimator(),
        &mut rng(),
        &sizes,
        SERIES,
        StreamMode::Independent,
        &SinkCallback {},
    )
    .unwrap();

    // mean absolute error per sample size
    let errors: Vec<f64> = (0..sizes.len())
        .map(|position| {
            set.estimates()
                .iter()
                .map(|series| (series[position] - PI).abs())
                .sum::<f64>()
                / SERIES as f64
        })
        .collect();

    // every step shrinks the expected error by sqrt(10); allow for noise
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "errors do not decrease: {:?}", errors);
    }
    assert!(errors[3] < 0.01);

    let curve = average_error_curve(&set.estimates(), PI).unwrap();
    assert_eq!(curve.len(), sizes.len());
    assert!(curve[3] < curve[0].max(1e-3));
}

#[test]
fn full_pipeline() {
    let sizes = [1_000, 5_000, 25_000];
    let mut rng = rng();

    let set = run_series_set(
        &estimator(),
        &mut rng,
        &sizes,
        4,
        StreamMode::Sequential,
        &SinkCallback {},
    )
    .unwrap();

    let eps = calc_series_eps(&set.estimates(), PI).unwrap();
    assert_eq!(eps.len(), 4);

    for (series, eps) in set.series().iter().zip(&eps) {
        assert_eq!(*eps, calc_eps(series.estimates(), PI).unwrap());

        let replayed = replay_series(&estimator(), series).unwrap();
        assert_eq!(replayed.estimates(), series.estimates());
    }

    assert_eq_rng(set.series()[3].rng_after(), &rng);
}

#[test]
fn tester_wraps_the_estimator() {
    let estimator = estimator();
    let mut rng = rng();
    let mut target = rng.clone();

    let estimates = Tester::new(|calls| estimator.calc_pi(&mut rng, calls))
        .make_tests(&[1_000, 1_000, 2_000])
        .unwrap();

    assert_eq!(estimates.len(), 3);
    assert_eq!(estimates[0], estimator.calc_pi(&mut target, 1_000).unwrap());
    assert_eq!(estimates[1], estimator.calc_pi(&mut target, 1_000).unwrap());
    assert_eq!(estimates[2], estimator.calc_pi(&mut target, 2_000).unwrap());
}

#[test]
fn small_sample_counts_are_rejected() {
    for calls in &[0, 1, 500, 999] {
        let result = estimator().calc_pi(&mut rng(), *calls);

        match result {
            Err(Error::InvalidSampleCount { calls: c, minimum }) => {
                assert_eq!(c, *calls);
                assert_eq!(minimum, 1000);
            }
            other => panic!("{} accepted: {:?}", calls, other),
        }
    }
}

#[test]
fn literal_series_error() {
    assert_approx_eq!(calc_eps(&[3.0, 3.5], PI).unwrap(), 0.159, 1e-3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn estimate_is_within_area_bound(seed in any::<u64>(), calls in 1_000u64..5_000) {
        use rand::SeedableRng;

        let mut rng = Pcg64::seed_from_u64(seed);
        let pi = estimator().calc_pi(&mut rng, calls).unwrap();

        prop_assert!(pi >= 0.0 && pi <= 4.0);
    }
}
