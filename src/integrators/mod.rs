//! Monte Carlo estimators.
pub mod hit_or_miss;
