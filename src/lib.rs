//! nbayes: Naive Bayes classification over mixed feature types.
//!
//! Continuous columns are modeled by per-class Gaussian distributions,
//! discrete columns by per-class, per-value frequency counts; prediction
//! picks the maximum-a-posteriori class.
//!
//! # Key Types
//!
//! - [`NaiveBayesModel`] - Fitted, read-only model with predict entry points
//! - [`NaiveBayesConfig`] - Configuration builder (sentinel, smoothing, variance policy)
//! - [`Dataset`] / [`FeatureKind`] - Validated data handling
//! - [`Symbol`] / [`Value`] - Labels, discrete outcomes, and record cells
//!
//! # Fitting
//!
//! Use [`fit`] (or [`NaiveBayesModel::fit`]) with a feature matrix, a label
//! sequence, and one [`FeatureKind`] per column. See the [`model`] module for
//! details.
//!
//! # Prediction
//!
//! [`NaiveBayesModel::predict`] scores a single mixed input vector;
//! [`NaiveBayesModel::predict_batch`] maps over a test set, optionally in
//! parallel. The lower-level [`inference`] module scores bare `(mean, stdev)`
//! summaries directly.

// Re-export approx traits for users who want to compare scores
pub use approx;

pub mod data;
pub mod inference;
pub mod metrics;
pub mod model;
pub mod stats;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{NaiveBayesClassifier, NaiveBayesModel};

// Build entry points and configuration
pub use model::{
    fit, summarize, summarize_by_class, ConfigError, FitError, NaiveBayesConfig, Smoothing,
    VariancePolicy, Verbosity,
};

// Model representation
pub use model::{ClassSummary, FrequencyTable, GaussianParams};

// Data types (for preparing training data)
pub use data::{
    remove_last_column, separate_by_class, split_mixed_dataset, Dataset, DatasetError,
    FeatureKind, Record, Symbol, Value,
};

// Scoring over bare summaries
pub use inference::{class_scores, predict, predict_batch, PredictError};

// Statistics primitives
pub use stats::{gaussian_pdf, mean, stdev, StatsError};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
