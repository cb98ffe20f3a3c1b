use rand::prelude::*;

use crate::data::{FeatureKind, Record, Symbol, Value};

/// Generate a separable two-class mixed dataset.
///
/// Two continuous columns drawn uniformly around class-specific centers and
/// one discrete column that usually agrees with the class. Labels are
/// `Symbol::int(0)` and `Symbol::int(1)`.
///
/// Returns `(records, labels, kinds)`.
pub fn synthetic_mixed_two_class(
    rows_per_class: usize,
    seed: u64,
) -> (Vec<Record>, Vec<Symbol>, Vec<FeatureKind>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(rows_per_class * 2);
    let mut labels = Vec::with_capacity(rows_per_class * 2);

    let classes = [
        // (x0 center, x1 center, dominant symbol)
        (2.0, 10.0, "a"),
        (8.0, 20.0, "b"),
    ];
    for (class, &(x0, x1, dominant)) in classes.iter().enumerate() {
        for _ in 0..rows_per_class {
            let symbol = if rng.gen_bool(0.8) {
                dominant
            } else if dominant == "a" {
                "b"
            } else {
                "a"
            };
            records.push(vec![
                Value::num(x0 + (rng.gen::<f64>() - 0.5) * 2.0),
                Value::num(x1 + (rng.gen::<f64>() - 0.5) * 4.0),
                Value::sym(symbol),
            ]);
            labels.push(Symbol::int(class as i64));
        }
    }

    let kinds = vec![
        FeatureKind::Continuous,
        FeatureKind::Continuous,
        FeatureKind::Discrete,
    ];
    (records, labels, kinds)
}

/// The ten-row binary toy dataset with three discrete columns.
///
/// Rows end with the class label. Class 1 rows lean towards `[0, 1, 0]`,
/// class 0 rows towards `[1, 0, 1]`.
pub fn toy_discrete_rows() -> Vec<Record> {
    let rows: [[i64; 4]; 10] = [
        [0, 1, 0, 1],
        [0, 1, 1, 1],
        [1, 1, 0, 1],
        [0, 0, 0, 1],
        [0, 1, 0, 1],
        [1, 0, 1, 0],
        [1, 0, 0, 0],
        [0, 0, 1, 0],
        [1, 1, 1, 0],
        [1, 0, 1, 0],
    ];
    rows.iter()
        .map(|row| row.iter().map(|&v| Value::sym(Symbol::int(v))).collect())
        .collect()
}

/// Column kinds for [`toy_discrete_rows`].
pub fn toy_discrete_kinds() -> Vec<FeatureKind> {
    vec![FeatureKind::Discrete; 3]
}

/// A small loan-style mixed dataset: two discrete columns, one continuous
/// income column, trailing label (1 = default).
pub fn toy_mixed_rows() -> Vec<Record> {
    let rows: [(i64, i64, f64, i64); 6] = [
        (1, 0, 125_000.0, 0),
        (0, 1, 100_000.0, 0),
        (1, 1, 70_000.0, 0),
        (0, 0, 20_000.0, 1),
        (1, 0, 12_000.0, 1),
        (0, 1, 30_000.0, 1),
    ];
    rows.iter()
        .map(|&(a, b, income, label)| {
            vec![
                Value::sym(Symbol::int(a)),
                Value::sym(Symbol::int(b)),
                Value::num(income),
                Value::sym(Symbol::int(label)),
            ]
        })
        .collect()
}

/// Column kinds for [`toy_mixed_rows`].
pub fn toy_mixed_kinds() -> Vec<FeatureKind> {
    vec![
        FeatureKind::Discrete,
        FeatureKind::Discrete,
        FeatureKind::Continuous,
    ]
}
