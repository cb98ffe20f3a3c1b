//! Scoring over bare Gaussian summaries.
//!
//! These functions score input vectors against a plain map from class label
//! to `(mean, stdev)` pairs, with no discrete part and no priors. They are
//! the continuous-only core of the classifier; the model-level entry points
//! in [`crate::model`] layer column kinds and configuration on top.

use std::collections::BTreeMap;

use crate::data::{Record, Symbol, Value};
use crate::model::GaussianParams;
use crate::stats::StatsError;
use crate::utils::run_with_threads;

use super::predictor::argmax;

/// Errors from scoring and prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("no class summaries available for prediction")]
    NoClasses,

    #[error("input vector has {got} values but {expected} are required")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("position {column}: expected a numeric value for a continuous feature")]
    NonNumericValue { column: usize },

    #[error("position {column}: expected a discrete value for a discrete feature")]
    NonDiscreteValue { column: usize },

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Score every class against an input vector.
///
/// Each class score starts at 1 and multiplies in the Gaussian density for
/// every `(mean, stdev)` pair the class carries, reading the input by
/// position. A position equal to the `unknown` sentinel contributes a neutral
/// factor 1. The input may be longer than a class's pair list; the extra
/// positions are not consulted.
///
/// # Errors
///
/// [`PredictError::ShapeMismatch`] when the input is shorter than a class's
/// pair list, [`PredictError::NonNumericValue`] for a non-sentinel symbol at
/// a scored position, and a propagated [`StatsError::DivisionByZero`] for a
/// zero-variance pair.
pub fn class_scores(
    summaries: &BTreeMap<Symbol, Vec<GaussianParams>>,
    input: &[Value],
    unknown: &Symbol,
) -> Result<BTreeMap<Symbol, f64>, PredictError> {
    let mut scores = BTreeMap::new();
    for (label, pairs) in summaries {
        let mut score = 1.0;
        for (i, pair) in pairs.iter().enumerate() {
            let value = input.get(i).ok_or(PredictError::ShapeMismatch {
                expected: pairs.len(),
                got: input.len(),
            })?;
            match value {
                Value::Sym(s) if s == unknown => {}
                Value::Num(x) => score *= pair.density(*x)?,
                Value::Sym(_) => return Err(PredictError::NonNumericValue { column: i }),
            }
        }
        scores.insert(label.clone(), score);
    }
    Ok(scores)
}

/// Predict the class with the maximum score.
///
/// Deterministic: classes are walked in label order and ties break to the
/// lowest label.
///
/// # Errors
///
/// [`PredictError::NoClasses`] when `summaries` is empty, plus the errors of
/// [`class_scores`].
pub fn predict(
    summaries: &BTreeMap<Symbol, Vec<GaussianParams>>,
    input: &[Value],
    unknown: &Symbol,
) -> Result<Symbol, PredictError> {
    let scores = class_scores(summaries, input, unknown)?;
    argmax(&scores)
}

/// Predict independently for each row of a test set.
///
/// Pure: rows share no state, and the result equals mapping [`predict`] over
/// the rows one by one.
///
/// # Arguments
///
/// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
pub fn predict_batch(
    summaries: &BTreeMap<Symbol, Vec<GaussianParams>>,
    test_set: &[Record],
    unknown: &Symbol,
    n_threads: usize,
) -> Result<Vec<Symbol>, PredictError> {
    run_with_threads(n_threads, |parallelism| {
        parallelism
            .maybe_par_map(test_set, |row| predict(summaries, row, unknown))
            .into_iter()
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unknown() -> Symbol {
        Symbol::text("?")
    }

    fn int_summaries() -> BTreeMap<Symbol, Vec<GaussianParams>> {
        let mut summaries = BTreeMap::new();
        summaries.insert(Symbol::int(0), vec![GaussianParams::new(1.0, 0.5)]);
        summaries.insert(Symbol::int(1), vec![GaussianParams::new(20.0, 5.0)]);
        summaries
    }

    fn text_summaries() -> BTreeMap<Symbol, Vec<GaussianParams>> {
        let mut summaries = BTreeMap::new();
        summaries.insert(Symbol::text("A"), vec![GaussianParams::new(1.0, 0.5)]);
        summaries.insert(Symbol::text("B"), vec![GaussianParams::new(20.0, 5.0)]);
        summaries
    }

    #[test]
    fn class_scores_known_values() {
        let input = vec![Value::num(1.1), Value::sym("?")];
        let scores = class_scores(&int_summaries(), &input, &unknown()).unwrap();

        assert_abs_diff_eq!(
            scores[&Symbol::int(0)],
            0.7820853879509118,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            scores[&Symbol::int(1)],
            6.298736258150442e-05,
            epsilon = 1e-16
        );
    }

    #[test]
    fn unknown_positions_are_neutral() {
        // Both positions unknown: every class keeps the base score 1.
        let mut summaries = BTreeMap::new();
        summaries.insert(
            Symbol::int(0),
            vec![GaussianParams::new(1.0, 0.5), GaussianParams::new(2.0, 0.5)],
        );
        let input = vec![Value::sym("?"), Value::sym("?")];
        let scores = class_scores(&summaries, &input, &unknown()).unwrap();
        assert_abs_diff_eq!(scores[&Symbol::int(0)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn predict_picks_nearest_class() {
        let summaries = text_summaries();

        let near_a = vec![Value::num(1.1), Value::sym("?")];
        assert_eq!(
            predict(&summaries, &near_a, &unknown()).unwrap(),
            Symbol::text("A")
        );

        let near_b = vec![Value::num(19.1), Value::sym("?")];
        assert_eq!(
            predict(&summaries, &near_b, &unknown()).unwrap(),
            Symbol::text("B")
        );
    }

    #[test]
    fn predict_empty_summaries() {
        let summaries = BTreeMap::new();
        assert!(matches!(
            predict(&summaries, &[Value::num(1.0)], &unknown()),
            Err(PredictError::NoClasses)
        ));
    }

    #[test]
    fn short_input_is_shape_mismatch() {
        let result = class_scores(&int_summaries(), &[], &unknown());
        assert!(matches!(
            result,
            Err(PredictError::ShapeMismatch {
                expected: 1,
                got: 0
            })
        ));
    }

    #[test]
    fn non_numeric_position_is_rejected() {
        let input = vec![Value::sym("oops")];
        assert!(matches!(
            class_scores(&int_summaries(), &input, &unknown()),
            Err(PredictError::NonNumericValue { column: 0 })
        ));
    }

    #[test]
    fn zero_variance_surfaces_division_by_zero() {
        let mut summaries = BTreeMap::new();
        summaries.insert(Symbol::int(0), vec![GaussianParams::new(1.0, 0.0)]);
        assert!(matches!(
            class_scores(&summaries, &[Value::num(1.0)], &unknown()),
            Err(PredictError::Stats(StatsError::DivisionByZero(_)))
        ));
    }

    #[test]
    fn predict_batch_maps_rows() {
        let summaries = text_summaries();
        let test_set = vec![
            vec![Value::num(1.1), Value::sym("?")],
            vec![Value::num(19.1), Value::sym("?")],
        ];

        let predictions = predict_batch(&summaries, &test_set, &unknown(), 1).unwrap();
        assert_eq!(predictions, vec![Symbol::text("A"), Symbol::text("B")]);
    }

    #[test]
    fn predict_batch_parallel_matches_sequential() {
        let summaries = int_summaries();
        let test_set: Vec<Record> = (0..64)
            .map(|i| vec![Value::num(i as f64 * 0.4)])
            .collect();

        let sequential = predict_batch(&summaries, &test_set, &unknown(), 1).unwrap();
        let parallel = predict_batch(&summaries, &test_set, &unknown(), 0).unwrap();
        assert_eq!(sequential, parallel);
    }
}
