//! Hit-or-miss estimation of $\pi$: sample points uniformly in the bounding box of a circle and
//! count how many of them fall inside.
use crate::callbacks::Progress;
use crate::core::estimators::{BasicEstimators, Estimators, PiEstimators};
use crate::core::progress_interval;
use crate::error::Result;
use crate::geometry::{Circle, PointSampler};

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Estimates $\pi$ from the fraction of sampled points that land inside `circle`.
pub struct PiEstimator<T, P> {
    circle: Circle<T>,
    sampler: PointSampler<T>,
    progress: P,
}

impl<T, P> PiEstimator<T, P>
where
    T: Float,
    P: Progress,
    Standard: Distribution<T>,
{
    /// Create an estimator for `circle` that reports its progress to `progress`.
    pub fn new(circle: Circle<T>, progress: P) -> Self {
        Self {
            sampler: circle.bounding_box().sampler(),
            circle,
            progress,
        }
    }

    /// Returns the circle this estimator samples against.
    pub fn circle(&self) -> &Circle<T> {
        &self.circle
    }

    /// Sample exactly `calls` points using `rng` and count the hits.
    ///
    /// Each point consumes two numbers from `rng`, the first for the x-coordinate. Progress is
    /// reported every `calls / 1000` points. Sample counts below 1000 are rejected with
    /// [`Error::InvalidSampleCount`](crate::Error::InvalidSampleCount) before any number is drawn.
    pub fn integrate<R: Rng>(&self, rng: &mut R, calls: u64) -> Result<PiEstimators> {
        let interval = progress_interval(calls)?;
        let mut estimators = PiEstimators::default();

        for i in 0..calls {
            let u = rng.gen::<T>();
            let v = rng.gen::<T>();
            estimators.update(self.circle.contains(self.sampler.point(u, v)));

            if i % interval == 0 {
                self.progress.report((i + 1) as f64 / calls as f64);
            }
        }

        self.progress.finish();

        log::debug!(
            "N={} hits={} pi={} \u{b1} {}",
            estimators.calls(),
            estimators.hits(),
            estimators.mean(),
            estimators.std()
        );

        Ok(estimators)
    }

    /// Returns the estimate $4 N_\mathrm{in} / N$ for `calls` sampled points.
    pub fn calc_pi<R: Rng>(&self, rng: &mut R, calls: u64) -> Result<f64> {
        self.integrate(rng, calls).map(|estimators| estimators.mean())
    }
}
