//! The result of an experiment and its textual form.
use crate::analysis::{average_error_curve, calc_series_eps, position_statistics};
use crate::core::estimators::MeanVar;
use crate::core::SeriesSet;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

const SEPARATOR: &str = "---------------------------";

/// All series of an experiment together with their error analysis.
///
/// A report is only produced by [`ExperimentReport::analyse`], so the errors always belong to the
/// series it holds. Its JSON form can be read back as a [`SeriesSet`] through the `series_set`
/// entry.
#[derive(Clone, Debug, Serialize)]
pub struct ExperimentReport<R> {
    reference: f64,
    series_set: SeriesSet<R>,
    eps: Vec<f64>,
    average_eps: Vec<f64>,
    statistics: Vec<MeanVar>,
}

impl<R> ExperimentReport<R> {
    /// Analyse `series_set` against `reference`.
    pub fn analyse(series_set: SeriesSet<R>, reference: f64) -> Result<Self> {
        let estimates = series_set.estimates();
        let eps = calc_series_eps(&estimates, reference)?;
        let average_eps = average_error_curve(&estimates, reference)?;
        let statistics = position_statistics(&estimates)?;

        Ok(Self {
            reference,
            series_set,
            eps,
            average_eps,
            statistics,
        })
    }

    /// Returns the value the estimates were compared against.
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Returns the analysed series.
    pub fn series_set(&self) -> &SeriesSet<R> {
        &self.series_set
    }

    /// Returns the accumulated relative error of each series.
    pub fn eps(&self) -> &[f64] {
        &self.eps
    }

    /// Returns the relative error of the averaged estimates, one per sample size.
    pub fn average_eps(&self) -> &[f64] {
        &self.average_eps
    }

    /// Returns mean and variance of the estimates across series, one per sample size.
    pub fn statistics(&self) -> &[MeanVar] {
        &self.statistics
    }
}

impl<R: Serialize> ExperimentReport<R> {
    /// Serialize the report, generator states included, to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<R> fmt::Display for ExperimentReport<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        for (index, series) in self.series_set.series().iter().enumerate() {
            writeln!(f, "Seria{}:", index)?;
            for estimate in series.estimates() {
                writeln!(f, "{:.10}", estimate)?;
            }
            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f, "Eps:")?;
        for eps in &self.eps {
            writeln!(f, "{:.10}", eps)?;
        }
        writeln!(f, "{}", SEPARATOR)?;

        writeln!(f, "Average eps:")?;
        for eps in &self.average_eps {
            writeln!(f, "{:.10}", eps)?;
        }
        write!(f, "{}", SEPARATOR)
    }
}
