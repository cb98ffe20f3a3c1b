//! Model fitting.
//!
//! [`fit`] is the top-level build entry point: it validates the dataset
//! contract, computes per-class Gaussian summaries for continuous columns and
//! frequency tables for discrete columns, and wraps everything in a read-only
//! [`NaiveBayesModel`]. The free functions [`summarize`] and
//! [`summarize_by_class`] expose the continuous-only summarization steps on
//! their own.

use std::collections::{BTreeMap, BTreeSet};

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::data::{
    check_widths, remove_last_column, separate_by_class, DatasetError, FeatureKind, Record,
    Symbol, Value,
};
use crate::stats::{self, StatsError};

use super::config::{NaiveBayesConfig, VariancePolicy};
use super::logger::{FitLogger, Verbosity};
use super::naive_bayes::NaiveBayesModel;
use super::summary::{ClassSummary, FrequencyTable, GaussianParams};

/// Errors from model fitting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("class {label}: {source}")]
    ClassStats {
        label: Symbol,
        #[source]
        source: StatsError,
    },
}

/// Summarize a numeric feature matrix: one `(mean, stdev)` pair per column.
///
/// `features` is sample-major, `[n_rows, n_columns]`; each column is
/// summarized independently across all rows.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for a matrix with no rows and
/// [`StatsError::DivisionByZero`] for a single-row matrix (sample stdev).
pub fn summarize(features: ArrayView2<'_, f64>) -> Result<Vec<GaussianParams>, StatsError> {
    let mut summaries = Vec::with_capacity(features.ncols());
    for column in features.axis_iter(Axis(1)) {
        summaries.push(GaussianParams {
            mean: stats::mean(column.view())?,
            stdev: stats::stdev(column.view())?,
        });
    }
    Ok(summaries)
}

/// Summarize a labeled all-continuous dataset per class.
///
/// Applies [`separate_by_class`], strips the label column, and runs
/// [`summarize`] over each class's rows.
///
/// # Errors
///
/// Returns [`DatasetError`] for ragged rows, non-numeric feature cells, or
/// missing/numeric labels, and [`FitError::ClassStats`] when a class is too
/// small to summarize.
pub fn summarize_by_class(
    dataset: &[Record],
) -> Result<BTreeMap<Symbol, Vec<GaussianParams>>, FitError> {
    if let Some(first) = dataset.first() {
        let expected = first.len();
        for (r, row) in dataset.iter().enumerate() {
            if row.len() != expected {
                return Err(DatasetError::RaggedRow {
                    row: r,
                    expected,
                    got: row.len(),
                }
                .into());
            }
            for (c, cell) in row[..row.len().saturating_sub(1)].iter().enumerate() {
                if cell.as_num().is_none() {
                    return Err(DatasetError::NonNumericValue { row: r, column: c }.into());
                }
            }
        }
    }

    let mut out = BTreeMap::new();
    for (label, rows) in separate_by_class(dataset)? {
        let features = remove_last_column(&rows);
        let n_columns = features.first().map_or(0, Vec::len);
        let mut flat = Vec::with_capacity(features.len() * n_columns);
        for row in &features {
            // Cell kinds were checked above.
            flat.extend(row.iter().filter_map(Value::as_num));
        }
        let matrix = Array2::from_shape_vec((features.len(), n_columns), flat)
            .expect("matrix dimensions match extraction");
        let summaries = summarize(matrix.view()).map_err(|source| FitError::ClassStats {
            label: label.clone(),
            source,
        })?;
        out.insert(label, summaries);
    }
    Ok(out)
}

/// Fit a naive Bayes model from a feature matrix and a label sequence.
///
/// Per class, continuous columns get `(mean, stdev)` pairs and discrete
/// columns get value frequency tables; the class prior is its row share.
/// Everything is keyed by class label and the result is read-only.
///
/// # Errors
///
/// Returns [`DatasetError::LabelCountMismatch`] when `x` and `y` disagree in
/// length, the shape/content errors of the dataset contract, and
/// [`FitError::ClassStats`] when a class cannot be summarized under
/// [`VariancePolicy::Strict`].
pub fn fit(
    x: &[Record],
    y: &[Symbol],
    kinds: &[FeatureKind],
    config: NaiveBayesConfig,
) -> Result<NaiveBayesModel, FitError> {
    if x.len() != y.len() {
        return Err(DatasetError::LabelCountMismatch {
            rows: x.len(),
            labels: y.len(),
        }
        .into());
    }
    check_widths(x, kinds.len())?;

    let logger = FitLogger::new(config.verbosity);
    let n_rows = x.len();

    let continuous_columns: Vec<usize> = kinds
        .iter()
        .enumerate()
        .filter(|(_, kind)| kind.is_continuous())
        .map(|(i, _)| i)
        .collect();
    let discrete_columns: Vec<usize> = kinds
        .iter()
        .enumerate()
        .filter(|(_, kind)| kind.is_discrete())
        .map(|(i, _)| i)
        .collect();

    // Distinct values per discrete column, over the whole training set. This
    // also validates that discrete cells are symbols.
    let mut distinct: Vec<BTreeSet<Symbol>> = vec![BTreeSet::new(); discrete_columns.len()];
    for (r, row) in x.iter().enumerate() {
        for (d, &c) in discrete_columns.iter().enumerate() {
            match &row[c] {
                Value::Sym(s) => {
                    distinct[d].insert(s.clone());
                }
                Value::Num(_) => {
                    return Err(DatasetError::NonDiscreteValue { row: r, column: c }.into())
                }
            }
        }
    }

    let mut by_class: BTreeMap<Symbol, Vec<usize>> = BTreeMap::new();
    for (r, label) in y.iter().enumerate() {
        by_class.entry(label.clone()).or_default().push(r);
    }

    if logger.verbosity() >= Verbosity::Info {
        logger.info(&format!(
            "{} rows, {} features ({} continuous, {} discrete), {} classes",
            n_rows,
            kinds.len(),
            continuous_columns.len(),
            discrete_columns.len(),
            by_class.len()
        ));
    }

    let mut classes = BTreeMap::new();
    for (label, rows) in by_class {
        let class_rows = rows.len();

        let mut gaussians = Vec::with_capacity(continuous_columns.len());
        if !continuous_columns.is_empty() {
            let mut flat = Vec::with_capacity(class_rows * continuous_columns.len());
            for &r in &rows {
                for &c in &continuous_columns {
                    match &x[r][c] {
                        Value::Num(v) => flat.push(*v),
                        Value::Sym(_) => {
                            return Err(DatasetError::NonNumericValue { row: r, column: c }.into())
                        }
                    }
                }
            }
            let matrix = Array2::from_shape_vec((class_rows, continuous_columns.len()), flat)
                .expect("matrix dimensions match extraction");
            for column in matrix.axis_iter(Axis(1)) {
                gaussians.push(column_params(column, config.variance_policy, &label)?);
            }
        }

        let mut frequencies = Vec::with_capacity(discrete_columns.len());
        for (d, &c) in discrete_columns.iter().enumerate() {
            let mut counts: BTreeMap<Symbol, usize> = BTreeMap::new();
            for &r in &rows {
                // Cell kinds were checked in the distinct-value pass.
                if let Value::Sym(s) = &x[r][c] {
                    *counts.entry(s.clone()).or_insert(0) += 1;
                }
            }
            frequencies.push(FrequencyTable::new(counts, class_rows, distinct[d].len()));
        }

        let prior = class_rows as f64 / n_rows as f64;
        if logger.verbosity() >= Verbosity::Debug {
            logger.debug(&format!(
                "class {label}: {class_rows} rows, prior {prior:.4}"
            ));
        }
        classes.insert(label, ClassSummary::new(prior, class_rows, gaussians, frequencies));
    }

    Ok(NaiveBayesModel::from_parts(
        classes,
        kinds.to_vec(),
        config,
        n_rows,
    ))
}

/// Gaussian parameters for one class column, under the variance policy.
fn column_params(
    column: ArrayView1<'_, f64>,
    policy: VariancePolicy,
    label: &Symbol,
) -> Result<GaussianParams, FitError> {
    let mean = stats::mean(column.view()).map_err(|source| FitError::ClassStats {
        label: label.clone(),
        source,
    })?;
    let stdev = match (stats::stdev(column.view()), policy) {
        (Ok(s), VariancePolicy::Floor { min_stdev }) => s.max(min_stdev),
        (Ok(s), VariancePolicy::Strict) => s,
        (Err(StatsError::DivisionByZero(_)), VariancePolicy::Floor { min_stdev }) => min_stdev,
        (Err(source), _) => {
            return Err(FitError::ClassStats {
                label: label.clone(),
                source,
            })
        }
    };
    Ok(GaussianParams { mean, stdev })
}
