//! Error type shared by all modules of this crate.
use thiserror::Error;

/// Every way an estimation or its analysis can be rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// The number of samples is too small for the progress interval `calls / 1000` to be non-zero.
    #[error("invalid sample count {calls}: at least {minimum} samples are required")]
    InvalidSampleCount {
        /// The rejected number of samples.
        calls: u64,
        /// The smallest accepted number of samples.
        minimum: u64,
    },

    /// The reference value of a relative error is zero or not finite.
    #[error("invalid reference value {0}: relative errors need a finite, non-zero reference")]
    InvalidReference(f64),

    /// The circle has a non-positive or non-finite radius, or a non-finite center.
    #[error("invalid circle with radius {radius}")]
    InvalidCircle {
        /// The rejected radius.
        radius: f64,
    },

    /// A series set must contain at least one series.
    #[error("invalid series count {0}: at least one series is required")]
    InvalidSeriesCount(usize),

    /// The series of a set do not all have the same number of estimates.
    #[error("series {series} has {found} estimates, expected {expected}")]
    SeriesLengthMismatch {
        /// Length of the first series.
        expected: usize,
        /// Length of the offending series.
        found: usize,
        /// Index of the offending series.
        series: usize,
    },

    #[error(transparent)]
    /// The configuration could not be parsed or written.
    Config(#[from] serde_json::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
