//! The core module
pub mod estimators;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of progress reports per estimation. A sample count must be at least this large so that
/// the reporting interval `calls / PROGRESS_STEPS` is non-zero.
pub const PROGRESS_STEPS: u64 = 1000;

/// How the random number stream is shared between the series of a set.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamMode {
    /// All series consume one generator one after another.
    Sequential,
    /// Every series gets its own generator, seeded from the shared one.
    Independent,
}

impl Default for StreamMode {
    fn default() -> Self {
        Self::Sequential
    }
}

/// A series saves the estimates for every sample size together with the state of the generator
/// before and after producing them. A series can be replayed from `rng_before`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Series<R> {
    rng_before: R,
    rng_after: R,
    sizes: Vec<u64>,
    estimates: Vec<f64>,
}

impl<R> Series<R> {
    /// Constructor
    pub(crate) fn new(rng_before: R, rng_after: R, sizes: Vec<u64>, estimates: Vec<f64>) -> Self {
        debug_assert_eq!(sizes.len(), estimates.len());
        Self {
            rng_before,
            rng_after,
            sizes,
            estimates,
        }
    }

    /// Returns the random number generator before generation of this series.
    pub fn rng_before(&self) -> &R {
        &self.rng_before
    }

    /// Returns the random number generator after generation of this series.
    pub fn rng_after(&self) -> &R {
        &self.rng_after
    }

    /// Returns the sample sizes, in the order they were estimated.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns one estimate of $\pi$ per sample size.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Destructure the series and return its components.
    pub fn destructure(self) -> (R, R, Vec<u64>, Vec<f64>) {
        (self.rng_before, self.rng_after, self.sizes, self.estimates)
    }
}

/// Independent series that all use the same list of sample sizes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeriesSet<R> {
    sizes: Vec<u64>,
    series: Vec<Series<R>>,
}

impl<R> SeriesSet<R> {
    pub(crate) fn new(sizes: Vec<u64>, series: Vec<Series<R>>) -> Self {
        Self { sizes, series }
    }

    /// Returns the sample sizes shared by all series.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns all series in the order they were run.
    pub fn series(&self) -> &[Series<R>] {
        &self.series
    }

    /// Returns the estimates of every series.
    pub fn estimates(&self) -> Vec<&[f64]> {
        self.series.iter().map(Series::estimates).collect()
    }

    /// Returns the number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the set holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Checks that `calls` is a valid sample count and returns the number of iterations between two
/// progress reports.
pub fn progress_interval(calls: u64) -> Result<u64> {
    match calls / PROGRESS_STEPS {
        0 => Err(Error::InvalidSampleCount {
            calls,
            minimum: PROGRESS_STEPS,
        }),
        interval => Ok(interval),
    }
}
