//! High-level model and classifier wrapper.
//!
//! [`NaiveBayesModel`] is the read-only result of a fit: per-class summaries
//! keyed by label, the column layout, and the configuration that produced it.
//! [`NaiveBayesClassifier`] is a thin wrapper bundling configuration and
//! column kinds with a cached model for callers that prefer an object API.

use std::collections::BTreeMap;
use std::fmt;

use crate::data::{Dataset, FeatureKind, Record, Symbol, Value};
use crate::inference::{class_scores_mixed, predict_discrete, predict_mixed, PredictError};
use crate::utils::run_with_threads;

use super::builder::{self, FitError};
use super::config::NaiveBayesConfig;
use super::summary::ClassSummary;

/// A fitted naive Bayes model.
///
/// Immutable after [`fit`](Self::fit) and safe to share across threads; any
/// number of predictions can run against one model concurrently.
///
/// # Example
///
/// ```
/// use nbayes::{FeatureKind, NaiveBayesConfig, NaiveBayesModel, Symbol, Value};
///
/// let x = vec![
///     vec![Value::num(1.0), Value::sym("red")],
///     vec![Value::num(1.4), Value::sym("red")],
///     vec![Value::num(8.0), Value::sym("blue")],
///     vec![Value::num(8.7), Value::sym("blue")],
/// ];
/// let y = vec![
///     Symbol::int(0),
///     Symbol::int(0),
///     Symbol::int(1),
///     Symbol::int(1),
/// ];
/// let kinds = [FeatureKind::Continuous, FeatureKind::Discrete];
///
/// let model = NaiveBayesModel::fit(&x, &y, &kinds, NaiveBayesConfig::default()).unwrap();
/// let label = model.predict(&[Value::num(1.2), Value::sym("red")]).unwrap();
/// assert_eq!(label, Symbol::int(0));
/// ```
#[derive(Clone)]
pub struct NaiveBayesModel {
    /// Per-class summaries, keyed by label.
    classes: BTreeMap<Symbol, ClassSummary>,
    /// Per-column feature kinds, in original column order.
    kinds: Vec<FeatureKind>,
    /// The configuration the model was fitted with.
    config: NaiveBayesConfig,
    /// Total training rows.
    n_rows: usize,
}

impl NaiveBayesModel {
    /// Fit a model from a feature matrix, a label sequence, and column kinds.
    ///
    /// See [`builder::fit`](crate::model::fit) for the full contract.
    pub fn fit(
        x: &[Record],
        y: &[Symbol],
        kinds: &[FeatureKind],
        config: NaiveBayesConfig,
    ) -> Result<Self, FitError> {
        builder::fit(x, y, kinds, config)
    }

    /// Fit a model from a validated [`Dataset`].
    pub fn fit_dataset(dataset: &Dataset, config: NaiveBayesConfig) -> Result<Self, FitError> {
        builder::fit(dataset.records(), dataset.labels(), dataset.kinds(), config)
    }

    pub(crate) fn from_parts(
        classes: BTreeMap<Symbol, ClassSummary>,
        kinds: Vec<FeatureKind>,
        config: NaiveBayesConfig,
        n_rows: usize,
    ) -> Self {
        Self {
            classes,
            kinds,
            config,
            n_rows,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Per-class summaries, keyed by label.
    pub fn classes(&self) -> &BTreeMap<Symbol, ClassSummary> {
        &self.classes
    }

    /// The summary for one class, if the label was seen during fit.
    pub fn class_summary(&self, label: &Symbol) -> Option<&ClassSummary> {
        self.classes.get(label)
    }

    /// Class labels in their total order.
    pub fn labels(&self) -> impl Iterator<Item = &Symbol> {
        self.classes.keys()
    }

    /// Per-column feature kinds.
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    /// The configuration the model was fitted with.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.kinds.len()
    }

    /// Number of training rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Score every class against an input vector.
    ///
    /// Scores start at 1 (or at the class prior when `use_priors` is set) and
    /// multiply in the Gaussian density at continuous positions and the
    /// within-class value frequency at discrete positions. Positions equal to
    /// the unknown sentinel contribute a neutral factor.
    ///
    /// # Errors
    ///
    /// [`PredictError::NoClasses`] for an unfitted/empty class map,
    /// [`PredictError::ShapeMismatch`] when the input width differs from the
    /// feature count, cell-kind errors, and propagated zero-variance density
    /// failures.
    pub fn class_scores(&self, input: &[Value]) -> Result<BTreeMap<Symbol, f64>, PredictError> {
        class_scores_mixed(&self.classes, &self.kinds, &self.config, input)
    }

    /// Predict the maximum-a-posteriori class for an input vector.
    ///
    /// Ties break to the lowest label in the [`Symbol`] total order.
    pub fn predict(&self, input: &[Value]) -> Result<Symbol, PredictError> {
        predict_mixed(&self.classes, &self.kinds, &self.config, input)
    }

    /// Predict independently for each row of a test set.
    ///
    /// Rows share no state; results are identical to calling
    /// [`predict`](Self::predict) row by row.
    ///
    /// # Arguments
    ///
    /// * `test_set` - Input vectors, one per row
    /// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
    pub fn predict_batch(
        &self,
        test_set: &[Record],
        n_threads: usize,
    ) -> Result<Vec<Symbol>, PredictError> {
        run_with_threads(n_threads, |parallelism| {
            parallelism
                .maybe_par_map(test_set, |row| self.predict(row))
                .into_iter()
                .collect()
        })
    }

    /// Predict for an all-discrete record using frequency lookups only.
    ///
    /// The record length must equal the model's discrete column count.
    pub fn predict_discrete(&self, record: &[Symbol]) -> Result<Symbol, PredictError> {
        predict_discrete(&self.classes, &self.config, record)
    }
}

impl fmt::Debug for NaiveBayesModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesModel")
            .field("n_classes", &self.n_classes())
            .field("n_features", &self.n_features())
            .field("n_rows", &self.n_rows)
            .finish()
    }
}

/// Configuration-holding wrapper around a fitted model.
///
/// Bundles the column kinds and config so callers can fit and predict through
/// one object. Holds no mutable state beyond the cached model.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    kinds: Vec<FeatureKind>,
    config: NaiveBayesConfig,
    model: Option<NaiveBayesModel>,
}

impl NaiveBayesClassifier {
    /// Create an unfitted classifier for the given column layout.
    pub fn new(kinds: Vec<FeatureKind>, config: NaiveBayesConfig) -> Self {
        Self {
            kinds,
            config,
            model: None,
        }
    }

    /// Fit on a feature matrix and label sequence, caching the model.
    pub fn fit(&mut self, x: &[Record], y: &[Symbol]) -> Result<&NaiveBayesModel, FitError> {
        let model = builder::fit(x, y, &self.kinds, self.config.clone())?;
        Ok(self.model.insert(model))
    }

    /// The fitted model, if any.
    pub fn model(&self) -> Option<&NaiveBayesModel> {
        self.model.as_ref()
    }

    /// Predict with the cached model.
    ///
    /// # Errors
    ///
    /// [`PredictError::NoClasses`] when the classifier has not been fitted.
    pub fn predict(&self, input: &[Value]) -> Result<Symbol, PredictError> {
        match &self.model {
            Some(model) => model.predict(input),
            None => Err(PredictError::NoClasses),
        }
    }

    /// Batch-predict with the cached model.
    pub fn predict_batch(
        &self,
        test_set: &[Record],
        n_threads: usize,
    ) -> Result<Vec<Symbol>, PredictError> {
        match &self.model {
            Some(model) => model.predict_batch(test_set, n_threads),
            None => Err(PredictError::NoClasses),
        }
    }
}
