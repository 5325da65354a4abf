//! Wiring of a complete run: generator, estimator, series and analysis.
use crate::callbacks::{ConsoleProgress, LogProgress, Progress, SimpleCallback, SinkProgress};
use crate::config::{ExperimentConfig, ProgressMode};
use crate::error::Result;
use crate::geometry::Circle;
use crate::harness::run_series_set;
use crate::integrators::hit_or_miss::PiEstimator;
use crate::report::ExperimentReport;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::f64::consts::PI;
use std::time::{SystemTime, UNIX_EPOCH};

/// A validated experiment, ready to run.
pub struct Experiment {
    config: ExperimentConfig,
    circle: Circle<f64>,
}

impl Experiment {
    /// Validates `config`.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let circle = config.circle()?;

        Ok(Self { config, circle })
    }

    /// Returns the configuration of this experiment.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Returns the configured seed, or one derived from the system clock.
    pub fn seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
        })
    }

    /// Run all series with a `Pcg64` generator seeded by [`Experiment::seed`] and analyse them
    /// against $\pi$.
    pub fn run(&self) -> Result<ExperimentReport<Pcg64>> {
        let seed = self.seed();
        log::info!("seed: {}", seed);

        self.run_with(&mut Pcg64::seed_from_u64(seed))
    }

    /// Run all series with the given generator and analyse them against $\pi$.
    pub fn run_with<R>(&self, rng: &mut R) -> Result<ExperimentReport<R>>
    where
        R: Clone + Rng + SeedableRng,
    {
        let progress: Box<dyn Progress> = match self.config.progress {
            ProgressMode::Console => Box::new(ConsoleProgress {}),
            ProgressMode::Log => Box::new(LogProgress::new()),
            ProgressMode::Silent => Box::new(SinkProgress {}),
        };
        let estimator = PiEstimator::new(self.circle, progress);

        log::info!(
            "running {} series over sample sizes {:?}",
            self.config.series,
            self.config.sample_sizes
        );

        let series_set = run_series_set(
            &estimator,
            rng,
            &self.config.sample_sizes,
            self.config.series,
            self.config.streams,
            &SimpleCallback {},
        )?;

        ExperimentReport::analyse(series_set, PI)
    }
}
