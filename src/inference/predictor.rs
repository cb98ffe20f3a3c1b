//! Mixed-kind scoring against fitted class summaries.
//!
//! These functions consume the model representation ([`ClassSummary`] maps)
//! and implement the MAP decision rule. The continuous and discrete parts of
//! each class are walked in original column order, steered by the
//! [`FeatureKind`] layout.

use std::collections::BTreeMap;

use crate::data::{FeatureKind, Symbol, Value};
use crate::model::{ClassSummary, NaiveBayesConfig};

use super::scores::PredictError;

/// Score every class of a fitted model against a mixed input vector.
///
/// The input width must equal the feature count. Scores start at 1 (or at
/// the class prior when `use_priors` is set); continuous positions multiply
/// in the Gaussian density, discrete positions the value's conditional
/// probability under the configured smoothing. The unknown sentinel is
/// neutral at any position.
pub fn class_scores_mixed(
    classes: &BTreeMap<Symbol, ClassSummary>,
    kinds: &[FeatureKind],
    config: &NaiveBayesConfig,
    input: &[Value],
) -> Result<BTreeMap<Symbol, f64>, PredictError> {
    if input.len() != kinds.len() {
        return Err(PredictError::ShapeMismatch {
            expected: kinds.len(),
            got: input.len(),
        });
    }

    let mut scores = BTreeMap::new();
    for (label, summary) in classes {
        let mut score = if config.use_priors {
            summary.prior()
        } else {
            1.0
        };
        let mut ci = 0;
        let mut di = 0;
        for (column, kind) in kinds.iter().enumerate() {
            match kind {
                FeatureKind::Continuous => {
                    let pair = &summary.gaussians()[ci];
                    ci += 1;
                    match &input[column] {
                        Value::Sym(s) if s == &config.unknown => {}
                        Value::Num(x) => score *= pair.density(*x)?,
                        Value::Sym(_) => {
                            return Err(PredictError::NonNumericValue { column })
                        }
                    }
                }
                FeatureKind::Discrete => {
                    let table = &summary.frequencies()[di];
                    di += 1;
                    match &input[column] {
                        Value::Sym(s) if s == &config.unknown => {}
                        Value::Sym(s) => score *= table.probability(s, config.smoothing),
                        Value::Num(_) => {
                            return Err(PredictError::NonDiscreteValue { column })
                        }
                    }
                }
            }
        }
        scores.insert(label.clone(), score);
    }
    Ok(scores)
}

/// MAP prediction for a mixed input vector.
pub fn predict_mixed(
    classes: &BTreeMap<Symbol, ClassSummary>,
    kinds: &[FeatureKind],
    config: &NaiveBayesConfig,
    input: &[Value],
) -> Result<Symbol, PredictError> {
    let scores = class_scores_mixed(classes, kinds, config, input)?;
    argmax(&scores)
}

/// MAP prediction for an all-discrete record: frequency lookups only.
///
/// The record length must equal each class's discrete column count.
pub fn predict_discrete(
    classes: &BTreeMap<Symbol, ClassSummary>,
    config: &NaiveBayesConfig,
    record: &[Symbol],
) -> Result<Symbol, PredictError> {
    let mut scores = BTreeMap::new();
    for (label, summary) in classes {
        let tables = summary.frequencies();
        if record.len() != tables.len() {
            return Err(PredictError::ShapeMismatch {
                expected: tables.len(),
                got: record.len(),
            });
        }
        let mut score = if config.use_priors {
            summary.prior()
        } else {
            1.0
        };
        for (table, value) in tables.iter().zip(record) {
            if value == &config.unknown {
                continue;
            }
            score *= table.probability(value, config.smoothing);
        }
        scores.insert(label.clone(), score);
    }
    argmax(&scores)
}

/// The class with the strictly greatest score; ties keep the lowest label.
///
/// Scores arrive in a `BTreeMap`, so the walk is ascending in the label total
/// order and only a strictly greater score displaces the current best.
pub fn argmax(scores: &BTreeMap<Symbol, f64>) -> Result<Symbol, PredictError> {
    let mut best: Option<(&Symbol, f64)> = None;
    for (label, &score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((label, score)),
        }
    }
    best.map(|(label, _)| label.clone())
        .ok_or(PredictError::NoClasses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fit, NaiveBayesModel, Smoothing};

    fn mixed_model(config: NaiveBayesConfig) -> NaiveBayesModel {
        let x = vec![
            vec![Value::num(1.0), Value::sym("a")],
            vec![Value::num(1.5), Value::sym("a")],
            vec![Value::num(8.0), Value::sym("b")],
            vec![Value::num(8.5), Value::sym("b")],
        ];
        let y = vec![
            Symbol::int(0),
            Symbol::int(0),
            Symbol::int(1),
            Symbol::int(1),
        ];
        fit(
            &x,
            &y,
            &[FeatureKind::Continuous, FeatureKind::Discrete],
            config,
        )
        .unwrap()
    }

    #[test]
    fn mixed_scores_combine_both_parts() {
        let model = mixed_model(NaiveBayesConfig::default());
        let scores = model
            .class_scores(&[Value::num(1.2), Value::sym("a")])
            .unwrap();

        // Class 0 is near the input and owns every "a"; class 1 never saw
        // "a", so the zero fallback wipes its score out entirely.
        assert!(scores[&Symbol::int(0)] > 0.0);
        assert_eq!(scores[&Symbol::int(1)], 0.0);
    }

    #[test]
    fn unknown_sentinel_skips_any_position() {
        let model = mixed_model(NaiveBayesConfig::default());
        // Unknown discrete position: decided by the continuous part alone.
        let label = model
            .predict(&[Value::num(8.2), Value::sym("?")])
            .unwrap();
        assert_eq!(label, Symbol::int(1));

        // Unknown continuous position: decided by the discrete part alone.
        let label = model
            .predict(&[Value::sym("?"), Value::sym("a")])
            .unwrap();
        assert_eq!(label, Symbol::int(0));
    }

    #[test]
    fn laplace_smoothing_keeps_unseen_values_alive() {
        let strict = mixed_model(NaiveBayesConfig::default());
        let smoothed = mixed_model(
            NaiveBayesConfig::builder()
                .smoothing(Smoothing::Laplace { alpha: 1.0 })
                .build()
                .unwrap(),
        );
        let input = [Value::num(8.2), Value::sym("a")];

        // "a" was never observed for class 1.
        assert_eq!(strict.class_scores(&input).unwrap()[&Symbol::int(1)], 0.0);
        assert!(smoothed.class_scores(&input).unwrap()[&Symbol::int(1)] > 0.0);
    }

    #[test]
    fn priors_scale_scores_when_enabled() {
        let model = mixed_model(
            NaiveBayesConfig::builder().use_priors(true).build().unwrap(),
        );
        let plain = mixed_model(NaiveBayesConfig::default());

        let with_priors = model
            .class_scores(&[Value::num(1.2), Value::sym("?")])
            .unwrap();
        let without = plain
            .class_scores(&[Value::num(1.2), Value::sym("?")])
            .unwrap();

        // Both classes hold half the rows, so scores shrink by that prior.
        let l0 = Symbol::int(0);
        assert!((with_priors[&l0] - 0.5 * without[&l0]).abs() < 1e-12);
    }

    #[test]
    fn wrong_width_is_shape_mismatch() {
        let model = mixed_model(NaiveBayesConfig::default());
        assert!(matches!(
            model.predict(&[Value::num(1.0)]),
            Err(PredictError::ShapeMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn numeric_value_in_discrete_position_is_rejected() {
        let model = mixed_model(NaiveBayesConfig::default());
        assert!(matches!(
            model.predict(&[Value::num(1.0), Value::num(2.0)]),
            Err(PredictError::NonDiscreteValue { column: 1 })
        ));
    }

    #[test]
    fn argmax_ties_pick_lowest_label() {
        let mut scores = BTreeMap::new();
        scores.insert(Symbol::int(3), 0.5);
        scores.insert(Symbol::int(1), 0.5);
        scores.insert(Symbol::int(2), 0.5);
        assert_eq!(argmax(&scores).unwrap(), Symbol::int(1));

        scores.insert(Symbol::int(2), 0.75);
        assert_eq!(argmax(&scores).unwrap(), Symbol::int(2));
    }

    #[test]
    fn argmax_empty_is_no_classes() {
        assert!(matches!(
            argmax(&BTreeMap::new()),
            Err(PredictError::NoClasses)
        ));
    }
}
