//! Configuration of an experiment.
use crate::core::{progress_interval, StreamMode};
use crate::error::{Error, Result};
use crate::geometry::{Circle, Point};
use serde::{Deserialize, Serialize};

/// Where the progress of single estimations goes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Overwrite a progress line on the terminal.
    Console,
    /// Emit `trace` log records.
    Log,
    /// Report nothing.
    Silent,
}

impl Default for ProgressMode {
    fn default() -> Self {
        Self::Console
    }
}

/// Center and radius of the target circle.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CircleConfig {
    /// Horizontal coordinate of the center.
    pub x: f64,
    /// Vertical coordinate of the center.
    pub y: f64,
    /// Radius, must be positive.
    pub radius: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 2.0,
            radius: 5.0,
        }
    }
}

/// Everything that is fixed for the duration of a run. Missing fields take their default values,
/// which describe the default scenario: five series over sample sizes from $10^4$ to $10^8$.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// The target circle.
    pub circle: CircleConfig,
    /// Sample sizes of every series, in order.
    pub sample_sizes: Vec<u64>,
    /// Number of series.
    pub series: usize,
    /// Seed of the generator. Without a seed the system clock is used.
    pub seed: Option<u64>,
    /// How series share the random number stream.
    pub streams: StreamMode,
    /// Where progress is reported.
    pub progress: ProgressMode,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            circle: CircleConfig::default(),
            sample_sizes: vec![10_000, 100_000, 1_000_000, 10_000_000, 100_000_000],
            series: 5,
            seed: None,
            streams: StreamMode::default(),
            progress: ProgressMode::default(),
        }
    }
}

impl ExperimentConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the validated target circle.
    pub fn circle(&self) -> Result<Circle<f64>> {
        Circle::new(
            Point::new(self.circle.x, self.circle.y),
            self.circle.radius,
        )
    }

    /// Checks the circle, every sample size and the number of series.
    pub fn validate(&self) -> Result<()> {
        self.circle()?;

        for &calls in &self.sample_sizes {
            progress_interval(calls)?;
        }

        if self.series == 0 {
            return Err(Error::InvalidSeriesCount(self.series));
        }

        Ok(())
    }
}
