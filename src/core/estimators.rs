//! This module contains everything related to estimators.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators {
    /// Returns the mean value.
    fn mean(&self) -> f64;

    /// Returns the variance, $V$.
    fn var(&self) -> f64;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// Estimators of a hit-or-miss run.
pub trait Estimators: BasicEstimators {
    /// Returns the number of points $N$ that have been sampled.
    fn calls(&self) -> u64;

    /// Returns the number of sampled points, $N_\mathrm{in}$, that fell inside the circle.
    fn hits(&self) -> u64;

    /// Returns the number of sampled points that fell outside the circle.
    fn misses(&self) -> u64 {
        self.calls() - self.hits()
    }
}

/// Hit counts of one estimation of $\pi$.
///
/// With $p = N_\mathrm{in} / N$ the estimate is $4p$ and its variance is
/// $16 p (1 - p) / (N - 1)$.
///
/// Values are only built by counting points with [`PiEstimators::update`] and by adding counts,
/// so `hits <= calls` always holds. Without any calls the estimate is zero, and with fewer than
/// two calls the variance is infinite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PiEstimators {
    calls: u64,
    hits: u64,
}

impl PiEstimators {
    #[cfg(test)]
    pub(crate) fn new(calls: u64, hits: u64) -> Self {
        assert!(hits <= calls);
        Self { calls, hits }
    }

    /// Count one sampled point.
    pub fn update(&mut self, inside: bool) {
        self.calls += 1;

        if inside {
            self.hits += 1;
        }
    }

    fn ratio(&self) -> f64 {
        if self.calls == 0 {
            return 0.0;
        }

        self.hits as f64 / self.calls as f64
    }
}

impl Add for PiEstimators {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calls: self.calls + other.calls,
            hits: self.hits + other.hits,
        }
    }
}

impl AddAssign for PiEstimators {
    fn add_assign(&mut self, other: Self) {
        self.calls += other.calls;
        self.hits += other.hits;
    }
}

impl BasicEstimators for PiEstimators {
    fn mean(&self) -> f64 {
        4.0 * self.ratio()
    }

    fn var(&self) -> f64 {
        if self.calls < 2 {
            return f64::INFINITY;
        }

        let p = self.ratio();
        16.0 * p * (1.0 - p) / (self.calls as f64 - 1.0)
    }
}

impl Estimators for PiEstimators {
    fn calls(&self) -> u64 {
        self.calls
    }

    fn hits(&self) -> u64 {
        self.hits
    }
}

/// A struct implementing the `BasicEstimators` trait.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MeanVar {
    mean: f64,
    var: f64,
}

impl MeanVar {
    /// Constructor.
    pub const fn new(mean: f64, var: f64) -> Self {
        Self { mean, var }
    }

    /// Computes the mean and the sample variance of `values`. The variance of a single value is
    /// zero. Fails with [`Error::InvalidSeriesCount`] if `values` is empty.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidSeriesCount(0));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = if values.len() > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };

        Ok(Self { mean, var })
    }
}

impl BasicEstimators for MeanVar {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn var(&self) -> f64 {
        self.var
    }
}
