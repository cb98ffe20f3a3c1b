//! Scalar statistics used to build and evaluate Gaussian summaries.
//!
//! These are the primitives everything else is assembled from: the arithmetic
//! mean, the sample standard deviation, and the Gaussian probability density.
//! All three surface their degenerate inputs as [`StatsError`] instead of
//! returning NaN or infinity.

use ndarray::ArrayView1;

/// Errors from the statistics primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("cannot compute statistics over an empty sequence")]
    EmptyInput,

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}

/// Arithmetic mean of a sequence.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `values` is empty.
pub fn mean(values: ArrayView1<'_, f64>) -> Result<f64, StatsError> {
    let n = values.len();
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / n as f64)
}

/// Sample standard deviation with Bessel's correction (divide by `n - 1`).
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `values` is empty, and
/// [`StatsError::DivisionByZero`] when it holds a single value (the `n - 1`
/// denominator is zero; callers that want a fallback apply a variance floor
/// instead of calling this).
pub fn stdev(values: ArrayView1<'_, f64>) -> Result<f64, StatsError> {
    let n = values.len();
    let avg = mean(values.view())?;
    if n < 2 {
        return Err(StatsError::DivisionByZero(
            "sample standard deviation of fewer than two values",
        ));
    }
    let sum_sq: f64 = values.iter().map(|&v| (v - avg).powi(2)).sum();
    Ok((sum_sq / (n as f64 - 1.0)).sqrt())
}

/// Gaussian probability density of `x` under `N(mean, stdev^2)`.
///
/// Computes `exp(-(x - mean)^2 / (2 * stdev^2)) / (sqrt(2 * pi) * stdev)`.
///
/// # Errors
///
/// Returns [`StatsError::DivisionByZero`] when `stdev` is zero. A
/// zero-variance summary is a data-contract problem and is surfaced, not
/// masked.
pub fn gaussian_pdf(x: f64, mean: f64, stdev: f64) -> Result<f64, StatsError> {
    if stdev == 0.0 {
        return Err(StatsError::DivisionByZero(
            "gaussian density with zero standard deviation",
        ));
    }
    let exponent = (-(x - mean).powi(2) / (2.0 * stdev.powi(2))).exp();
    Ok(exponent / ((2.0 * std::f64::consts::PI).sqrt() * stdev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::aview1;

    use crate::testing::DEFAULT_TOLERANCE;

    #[test]
    fn mean_basic() {
        let m = mean(aview1(&[20.0, 21.0, 22.0])).unwrap();
        assert_abs_diff_eq!(m, 21.0, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn mean_empty_input() {
        assert_eq!(mean(aview1(&[])), Err(StatsError::EmptyInput));
    }

    #[test]
    fn stdev_basic() {
        let s = stdev(aview1(&[20.0, 21.0, 22.0])).unwrap();
        assert_abs_diff_eq!(s, 1.0, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn stdev_two_values() {
        // sample stdev of [2, 4] is sqrt(2)
        let s = stdev(aview1(&[2.0, 4.0])).unwrap();
        assert_abs_diff_eq!(s, std::f64::consts::SQRT_2, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn stdev_empty_input() {
        assert_eq!(stdev(aview1(&[])), Err(StatsError::EmptyInput));
    }

    #[test]
    fn stdev_single_value_is_division_by_zero() {
        assert!(matches!(
            stdev(aview1(&[42.0])),
            Err(StatsError::DivisionByZero(_))
        ));
    }

    #[test]
    fn gaussian_pdf_known_value() {
        let p = gaussian_pdf(71.5, 73.0, 6.2).unwrap();
        assert_abs_diff_eq!(p, 0.0624896575937, epsilon = 1e-10);
    }

    #[test]
    fn gaussian_pdf_peaks_at_mean() {
        let at_mean = gaussian_pdf(5.0, 5.0, 1.0).unwrap();
        let off_mean = gaussian_pdf(6.0, 5.0, 1.0).unwrap();
        assert!(at_mean > off_mean);
        assert_abs_diff_eq!(
            at_mean,
            1.0 / (2.0 * std::f64::consts::PI).sqrt(),
            epsilon = DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn gaussian_pdf_zero_stdev_is_division_by_zero() {
        assert!(matches!(
            gaussian_pdf(1.0, 1.0, 0.0),
            Err(StatsError::DivisionByZero(_))
        ));
    }
}
