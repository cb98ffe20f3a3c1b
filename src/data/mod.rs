//! Dataset representation and partitioning.
//!
//! # Overview
//!
//! Records are rows of [`Value`]s: numeric cells for continuous columns,
//! [`Symbol`] cells for discrete columns and class labels. The partitioning
//! functions ([`split_mixed_dataset`], [`remove_last_column`],
//! [`separate_by_class`]) work on raw label-trailing rows the way a loader
//! hands them over; [`Dataset`] is the validated container the training APIs
//! consume.
//!
//! # Unknown Values
//!
//! There is no missing-value machinery. A single configurable sentinel symbol
//! (default `"?"`) marks an unknown value; prediction treats it as a neutral
//! factor and fitting counts it as an ordinary discrete outcome.

mod dataset;
mod partition;
mod values;

pub use dataset::{Dataset, DatasetError, FeatureKind};
pub use partition::{remove_last_column, separate_by_class, split_mixed_dataset};
pub use values::{Record, Symbol, Value};

pub(crate) use dataset::check_widths;
