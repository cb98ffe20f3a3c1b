//! Classification metrics.
//!
//! Metrics for evaluating predicted labels against known labels.

use crate::data::Symbol;

/// A metric over predicted and actual label sequences.
pub trait MetricFn {
    /// Compute the metric. Sequences are expected to have equal length.
    fn compute(&self, predictions: &[Symbol], targets: &[Symbol]) -> f64;

    /// Whether larger values indicate a better model.
    fn higher_is_better(&self) -> bool;

    fn name(&self) -> &'static str;
}

// =============================================================================
// Accuracy
// =============================================================================

/// Classification accuracy: proportion of correct predictions.
///
/// Higher is better. Returns 0 for empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl MetricFn for Accuracy {
    fn compute(&self, predictions: &[Symbol], targets: &[Symbol]) -> f64 {
        debug_assert_eq!(
            predictions.len(),
            targets.len(),
            "predictions and targets must have the same length"
        );
        if predictions.is_empty() {
            return 0.0;
        }
        let correct = predictions
            .iter()
            .zip(targets)
            .filter(|(p, t)| p == t)
            .count();
        correct as f64 / predictions.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

// =============================================================================
// Error Rate
// =============================================================================

/// Misclassification rate: proportion of wrong predictions.
///
/// Lower is better. Returns 0 for empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorRate;

impl MetricFn for ErrorRate {
    fn compute(&self, predictions: &[Symbol], targets: &[Symbol]) -> f64 {
        if predictions.is_empty() {
            return 0.0;
        }
        1.0 - Accuracy.compute(predictions, targets)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "error_rate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use crate::testing::DEFAULT_TOLERANCE;

    fn labels(values: &[i64]) -> Vec<Symbol> {
        values.iter().map(|&v| Symbol::int(v)).collect()
    }

    #[test]
    fn accuracy_perfect() {
        let y = labels(&[1, 0, 1, 0]);
        assert_abs_diff_eq!(
            Accuracy.compute(&y, &y),
            1.0,
            epsilon = DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn accuracy_half() {
        let predictions = labels(&[1, 1, 0, 0]);
        let targets = labels(&[1, 0, 1, 0]);
        assert_abs_diff_eq!(
            Accuracy.compute(&predictions, &targets),
            0.5,
            epsilon = DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn accuracy_empty() {
        assert_eq!(Accuracy.compute(&[], &[]), 0.0);
    }

    #[test]
    fn error_rate_complements_accuracy() {
        let predictions = labels(&[1, 1, 0, 0]);
        let targets = labels(&[1, 0, 1, 0]);
        assert_abs_diff_eq!(
            ErrorRate.compute(&predictions, &targets),
            0.5,
            epsilon = DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn metric_properties() {
        assert!(Accuracy.higher_is_better());
        assert!(!ErrorRate.higher_is_better());
        assert_eq!(Accuracy.name(), "accuracy");
        assert_eq!(ErrorRate.name(), "error_rate");
    }
}
