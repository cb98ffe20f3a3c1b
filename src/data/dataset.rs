//! Validated dataset container.
//!
//! [`Dataset`] bundles feature records, class labels, and the per-column
//! [`FeatureKind`] layout, and is the canonical entry point for the training
//! APIs. Construction validates the shape invariants up front so the model
//! builder can rely on them.

use super::values::{Record, Symbol, Value};

/// Per-column feature kind, fixed at model-construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Modeled by a per-class Gaussian over numeric values.
    Continuous,
    /// Modeled by per-class, per-value frequency counts.
    Discrete,
}

impl FeatureKind {
    pub fn is_continuous(self) -> bool {
        matches!(self, FeatureKind::Continuous)
    }

    pub fn is_discrete(self) -> bool {
        matches!(self, FeatureKind::Discrete)
    }
}

/// Dataset shape and content errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("row {row} has {got} feature columns but {expected} feature kinds were given")]
    KindCountMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("number of labels ({labels}) does not match number of rows ({rows})")]
    LabelCountMismatch { rows: usize, labels: usize },

    #[error("row {row} is empty; expected at least a class label")]
    EmptyRow { row: usize },

    #[error("row {row} has a numeric class label; labels must be discrete symbols")]
    NumericLabel { row: usize },

    #[error("row {row}, column {column}: expected a numeric value for a continuous feature")]
    NonNumericValue { row: usize, column: usize },

    #[error("row {row}, column {column}: expected a discrete value for a discrete feature")]
    NonDiscreteValue { row: usize, column: usize },
}

/// A validated training dataset: feature records, labels, and column kinds.
///
/// Rows are immutable once loaded. The feature-kind count must equal the
/// feature-column count, continuous cells must be numeric, and discrete cells
/// must be symbols; violations are reported as [`DatasetError`]s at
/// construction.
///
/// # Example
///
/// ```
/// use nbayes::{Dataset, FeatureKind, Symbol, Value};
///
/// let records = vec![
///     vec![Value::num(1.0), Value::sym("red")],
///     vec![Value::num(8.0), Value::sym("blue")],
/// ];
/// let labels = vec![Symbol::int(0), Symbol::int(1)];
/// let kinds = vec![FeatureKind::Continuous, FeatureKind::Discrete];
///
/// let ds = Dataset::new(records, labels, kinds).unwrap();
/// assert_eq!(ds.n_rows(), 2);
/// assert_eq!(ds.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    labels: Vec<Symbol>,
    kinds: Vec<FeatureKind>,
}

impl Dataset {
    /// Create a dataset from feature records, labels, and column kinds.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the label count does not match the row
    /// count, a row's width does not match the kind count, or a cell does not
    /// match its column's kind.
    pub fn new(
        records: Vec<Record>,
        labels: Vec<Symbol>,
        kinds: Vec<FeatureKind>,
    ) -> Result<Self, DatasetError> {
        if labels.len() != records.len() {
            return Err(DatasetError::LabelCountMismatch {
                rows: records.len(),
                labels: labels.len(),
            });
        }
        check_widths(&records, kinds.len())?;
        check_cell_kinds(&records, &kinds)?;

        Ok(Self {
            records,
            labels,
            kinds,
        })
    }

    /// Create a dataset from rows whose final cell is the class label.
    ///
    /// This is the bridge from the partitioner-level representation (rows
    /// ending with a label) to the model-level one (features and labels held
    /// separately).
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::EmptyRow`] for a row with no cells,
    /// [`DatasetError::NumericLabel`] when a trailing cell is not a symbol,
    /// plus the validation errors of [`Dataset::new`].
    pub fn from_labeled_rows(
        rows: &[Record],
        kinds: &[FeatureKind],
    ) -> Result<Self, DatasetError> {
        let mut records = Vec::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let label = match row.last() {
                None => return Err(DatasetError::EmptyRow { row: r }),
                Some(Value::Num(_)) => return Err(DatasetError::NumericLabel { row: r }),
                Some(Value::Sym(s)) => s.clone(),
            };
            records.push(row[..row.len() - 1].to_vec());
            labels.push(label);
        }
        Self::new(records, labels, kinds.to_vec())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.records.len()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.kinds.len()
    }

    /// Feature records, without labels.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Class labels, one per row.
    pub fn labels(&self) -> &[Symbol] {
        &self.labels
    }

    /// Per-column feature kinds.
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }
}

/// Check that every record has exactly `expected` feature columns.
pub(crate) fn check_widths(records: &[Record], expected: usize) -> Result<(), DatasetError> {
    for (r, row) in records.iter().enumerate() {
        if row.len() != expected {
            return Err(DatasetError::KindCountMismatch {
                row: r,
                expected,
                got: row.len(),
            });
        }
    }
    Ok(())
}

/// Check that every cell matches its column's kind.
pub(crate) fn check_cell_kinds(
    records: &[Record],
    kinds: &[FeatureKind],
) -> Result<(), DatasetError> {
    for (r, row) in records.iter().enumerate() {
        for (c, (cell, kind)) in row.iter().zip(kinds).enumerate() {
            match (kind, cell) {
                (FeatureKind::Continuous, Value::Num(_)) => {}
                (FeatureKind::Discrete, Value::Sym(_)) => {}
                (FeatureKind::Continuous, Value::Sym(_)) => {
                    return Err(DatasetError::NonNumericValue { row: r, column: c })
                }
                (FeatureKind::Discrete, Value::Num(_)) => {
                    return Err(DatasetError::NonDiscreteValue { row: r, column: c })
                }
            }
        }
    }
    Ok(())
}
