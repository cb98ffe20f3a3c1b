//! Row-level dataset partitioning.
//!
//! These operations work on the raw representation a loader produces: rows of
//! [`Value`]s whose final cell is the class label. They never mutate their
//! input; every projection is a fresh allocation.

use std::collections::BTreeMap;

use super::dataset::{DatasetError, FeatureKind};
use super::values::{Record, Symbol, Value};

/// Split a labeled dataset into its continuous and discrete column subsets.
///
/// Each returned projection is row-aligned with the input and keeps the class
/// label as its final cell; column order within each projection follows the
/// original column order.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyRow`] for a row with no cells and
/// [`DatasetError::KindCountMismatch`] when a row's feature-column count does
/// not equal `kinds.len()`.
pub fn split_mixed_dataset(
    dataset: &[Record],
    kinds: &[FeatureKind],
) -> Result<(Vec<Record>, Vec<Record>), DatasetError> {
    let mut continuous = Vec::with_capacity(dataset.len());
    let mut discrete = Vec::with_capacity(dataset.len());

    for (r, row) in dataset.iter().enumerate() {
        if row.is_empty() {
            return Err(DatasetError::EmptyRow { row: r });
        }
        let n_columns = row.len() - 1;
        if n_columns != kinds.len() {
            return Err(DatasetError::KindCountMismatch {
                row: r,
                expected: kinds.len(),
                got: n_columns,
            });
        }

        let mut cont_row = Vec::new();
        let mut disc_row = Vec::new();
        for (cell, kind) in row[..n_columns].iter().zip(kinds) {
            match kind {
                FeatureKind::Continuous => cont_row.push(cell.clone()),
                FeatureKind::Discrete => disc_row.push(cell.clone()),
            }
        }
        let label = row[n_columns].clone();
        cont_row.push(label.clone());
        disc_row.push(label);

        continuous.push(cont_row);
        discrete.push(disc_row);
    }

    Ok((continuous, discrete))
}

/// Drop the trailing label cell from every row.
///
/// Rows that are already empty stay empty.
pub fn remove_last_column(dataset: &[Record]) -> Vec<Record> {
    dataset
        .iter()
        .map(|row| row[..row.len().saturating_sub(1)].to_vec())
        .collect()
}

/// Group rows by their trailing class label.
///
/// Within-class row order follows the input order. The returned map iterates
/// classes in the [`Symbol`] total order, which keeps every downstream walk
/// deterministic.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyRow`] for a row with no cells and
/// [`DatasetError::NumericLabel`] when a trailing cell is not a symbol.
pub fn separate_by_class(
    dataset: &[Record],
) -> Result<BTreeMap<Symbol, Vec<Record>>, DatasetError> {
    let mut by_class: BTreeMap<Symbol, Vec<Record>> = BTreeMap::new();
    for (r, row) in dataset.iter().enumerate() {
        let label = match row.last() {
            None => return Err(DatasetError::EmptyRow { row: r }),
            Some(Value::Num(_)) => return Err(DatasetError::NumericLabel { row: r }),
            Some(Value::Sym(s)) => s.clone(),
        };
        by_class.entry(label).or_default().push(row.clone());
    }
    Ok(by_class)
}
