//! Relative errors of estimates against a reference value.
//!
//! Every function accepts any slice of series, `&[Vec<f64>]` as well as the `Vec<&[f64]>`
//! returned by [`SeriesSet::estimates`](crate::SeriesSet::estimates).
use crate::core::estimators::MeanVar;
use crate::error::{Error, Result};

fn check_reference(reference: f64) -> Result<()> {
    if reference == 0.0 || !reference.is_finite() {
        return Err(Error::InvalidReference(reference));
    }

    Ok(())
}

/// Checks that there is at least one series and that all series have the same length, which is
/// returned.
fn positions<S: AsRef<[f64]>>(series_set: &[S]) -> Result<usize> {
    let first = series_set
        .first()
        .ok_or(Error::InvalidSeriesCount(0))?
        .as_ref()
        .len();

    for (index, series) in series_set.iter().enumerate() {
        let found = series.as_ref().len();

        if found != first {
            return Err(Error::SeriesLengthMismatch {
                expected: first,
                found,
                series: index,
            });
        }
    }

    Ok(first)
}

fn mean_at<S: AsRef<[f64]>>(series_set: &[S], position: usize) -> f64 {
    let sum: f64 = series_set.iter().map(|s| s.as_ref()[position]).sum();
    sum / series_set.len() as f64
}

/// Returns $|e - r| / |r|$ for the `estimate` $e$ and the `reference` $r$.
pub fn relative_error(estimate: f64, reference: f64) -> Result<f64> {
    check_reference(reference)?;

    Ok(((estimate - reference) / reference).abs())
}

/// Returns the accumulated error of `series`: the sum (not the mean) of the relative errors of
/// all its estimates.
pub fn calc_eps(series: &[f64], reference: f64) -> Result<f64> {
    check_reference(reference)?;

    Ok(series
        .iter()
        .map(|estimate| ((estimate - reference) / reference).abs())
        .sum())
}

/// Returns the accumulated error of every series, in order.
pub fn calc_series_eps<S: AsRef<[f64]>>(series_set: &[S], reference: f64) -> Result<Vec<f64>> {
    check_reference(reference)?;

    series_set
        .iter()
        .map(|series| calc_eps(series.as_ref(), reference))
        .collect()
}

/// For every sample-size position, average the estimates of all series and return the relative
/// error of that average. The result has one entry per position, independent of the number of
/// series.
pub fn average_error_curve<S: AsRef<[f64]>>(series_set: &[S], reference: f64) -> Result<Vec<f64>> {
    check_reference(reference)?;
    let positions = positions(series_set)?;

    (0..positions)
        .map(|position| relative_error(mean_at(series_set, position), reference))
        .collect()
}

/// For every sample-size position, return the mean and the sample variance of the estimates of
/// all series.
pub fn position_statistics<S: AsRef<[f64]>>(series_set: &[S]) -> Result<Vec<MeanVar>> {
    let positions = positions(series_set)?;

    (0..positions)
        .map(|position| {
            let values: Vec<f64> = series_set.iter().map(|s| s.as_ref()[position]).collect();
            MeanVar::from_values(&values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimators::BasicEstimators;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_calc_eps_is_a_sum() {
        let eps = calc_eps(&[3.0, 3.5], PI).unwrap();

        assert_approx_eq!(eps, 0.159, 1e-3);
        assert_approx_eq!(eps, (PI - 3.0) / PI + (3.5 - PI) / PI, 1e-15);

        // adding points accumulates instead of averaging
        let longer = calc_eps(&[3.0, 3.5, 3.0, 3.5], PI).unwrap();
        assert_approx_eq!(longer, 2.0 * eps, 1e-15);
    }

    #[test]
    fn test_calc_eps_of_empty_series() {
        assert_eq!(calc_eps(&[], PI).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_reference() {
        assert!(matches!(
            calc_eps(&[3.0], 0.0),
            Err(Error::InvalidReference(r)) if r == 0.0
        ));
        assert!(relative_error(3.0, f64::NAN).is_err());
        assert!(calc_series_eps(&[vec![3.0]], 0.0).is_err());
        assert!(average_error_curve(&[vec![3.0]], 0.0).is_err());
    }

    #[test]
    fn test_calc_series_eps() {
        let set = vec![vec![3.0, 3.5], vec![PI, PI]];
        let eps = calc_series_eps(&set, PI).unwrap();

        assert_eq!(eps.len(), 2);
        assert_approx_eq!(eps[0], 0.159, 1e-3);
        assert_eq!(eps[1], 0.0);
    }

    #[test]
    fn test_average_error_curve() {
        let set = vec![vec![3.0, 3.1, 3.14], vec![3.5, 3.2, 3.14]];
        let curve = average_error_curve(&set, PI).unwrap();

        assert_eq!(curve.len(), 3);
        assert_approx_eq!(curve[0], (3.25 - PI) / PI, 1e-15);
        assert_approx_eq!(curve[1], (3.15 - PI) / PI, 1e-15);
        assert_approx_eq!(curve[2], (PI - 3.14) / PI, 1e-15);
    }

    #[test]
    fn test_curve_length_matches_positions() {
        let sizes = 5;
        for series in 1..8 {
            let set = vec![vec![3.0; sizes]; series];
            assert_eq!(average_error_curve(&set, PI).unwrap().len(), sizes);
        }

        // more series than positions
        let set = vec![vec![3.0, 3.2]; 6];
        assert_eq!(average_error_curve(&set, PI).unwrap().len(), 2);
    }

    #[test]
    fn test_curve_rejects_empty_and_ragged_sets() {
        let empty: Vec<Vec<f64>> = vec![];
        assert!(matches!(
            average_error_curve(&empty, PI),
            Err(Error::InvalidSeriesCount(0))
        ));

        let ragged = vec![vec![3.0, 3.1], vec![3.0]];
        match average_error_curve(&ragged, PI) {
            Err(Error::SeriesLengthMismatch {
                expected,
                found,
                series,
            }) => {
                assert_eq!((expected, found, series), (2, 1, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_position_statistics() {
        let set = vec![vec![3.0, 3.1], vec![3.5, 3.1], vec![2.5, 3.1]];
        let stats = position_statistics(&set).unwrap();

        assert_eq!(stats.len(), 2);
        assert_approx_eq!(stats[0].mean(), 3.0);
        assert_approx_eq!(stats[0].var(), 0.25);
        assert_approx_eq!(stats[1].mean(), 3.1);
        assert_approx_eq!(stats[1].var(), 0.0);
    }

    #[test]
    fn test_accepts_borrowed_series() {
        let a = [3.0, 3.5];
        let b = [3.5, 3.0];
        let set: Vec<&[f64]> = vec![&a[..], &b[..]];

        let curve = average_error_curve(&set, PI).unwrap();
        assert_approx_eq!(curve[0], (3.25 - PI) / PI, 1e-15);
        assert_eq!(calc_series_eps(&set, PI).unwrap().len(), 2);
    }
}
