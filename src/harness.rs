//! Experiment harness: runs an estimator over a list of sample sizes (a series) and repeats that
//! for a number of series.
use crate::callbacks::{Callback, Progress};
use crate::core::{progress_interval, Series, SeriesSet, StreamMode};
use crate::error::{Error, Result};
use crate::integrators::hit_or_miss::PiEstimator;

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};

/// Wraps a model, a function from a sample size to an estimate, and applies it to sample sizes.
pub struct Tester<F> {
    model: F,
}

impl<F> Tester<F>
where
    F: FnMut(u64) -> Result<f64>,
{
    /// Constructor.
    pub fn new(model: F) -> Self {
        Self { model }
    }

    /// Returns the estimate of the wrapped model for `calls` samples.
    pub fn make_test(&mut self, calls: u64) -> Result<f64> {
        (self.model)(calls)
    }

    /// Returns one estimate per entry of `sizes`, in the same order. Every call draws fresh
    /// samples, duplicated sizes included. The first error is returned and no partial results.
    pub fn make_tests(&mut self, sizes: &[u64]) -> Result<Vec<f64>> {
        let mut estimates = Vec::with_capacity(sizes.len());

        for &calls in sizes {
            estimates.push(self.make_test(calls)?);
        }

        Ok(estimates)
    }
}

fn validate_sizes(sizes: &[u64]) -> Result<()> {
    sizes
        .iter()
        .try_for_each(|&calls| progress_interval(calls).map(|_| ()))
}

/// Run a single series: one estimate per entry of `sizes`, drawn sequentially from `rng`.
///
/// All sample sizes are validated before any number is drawn.
pub fn run_series<T, P, R>(
    estimator: &PiEstimator<T, P>,
    rng: &mut R,
    sizes: &[u64],
) -> Result<Series<R>>
where
    T: Float,
    P: Progress,
    R: Clone + Rng,
    Standard: Distribution<T>,
{
    validate_sizes(sizes)?;

    let rng_before = rng.clone();
    let estimates = Tester::new(|calls| estimator.calc_pi(&mut *rng, calls)).make_tests(sizes)?;

    Ok(Series::new(rng_before, rng.clone(), sizes.to_vec(), estimates))
}

/// Run `count` series over the same `sizes` and call `callback` after each one.
///
/// With [`StreamMode::Sequential`] all series consume `rng` one after another. With
/// [`StreamMode::Independent`] every series gets its own generator seeded from one number drawn
/// from `rng`.
pub fn run_series_set<T, P, R>(
    estimator: &PiEstimator<T, P>,
    rng: &mut R,
    sizes: &[u64],
    count: usize,
    streams: StreamMode,
    callback: &impl Callback<R>,
) -> Result<SeriesSet<R>>
where
    T: Float,
    P: Progress,
    R: Clone + Rng + SeedableRng,
    Standard: Distribution<T>,
{
    if count == 0 {
        return Err(Error::InvalidSeriesCount(count));
    }
    validate_sizes(sizes)?;

    let mut series = Vec::with_capacity(count);

    for index in 0..count {
        log::debug!("starting series {} of {}", index + 1, count);

        let result = match streams {
            StreamMode::Sequential => run_series(estimator, rng, sizes)?,
            StreamMode::Independent => {
                let mut stream = R::seed_from_u64(rng.gen::<u64>());
                run_series(estimator, &mut stream, sizes)?
            }
        };

        series.push(result);
        callback.print(&series);
    }

    Ok(SeriesSet::new(sizes.to_vec(), series))
}

/// Re-run `series` from the generator state it started with.
pub fn replay_series<T, P, R>(
    estimator: &PiEstimator<T, P>,
    series: &Series<R>,
) -> Result<Series<R>>
where
    T: Float,
    P: Progress,
    R: Clone + Rng,
    Standard: Distribution<T>,
{
    let mut rng = series.rng_before().clone();
    run_series(estimator, &mut rng, series.sizes())
}
