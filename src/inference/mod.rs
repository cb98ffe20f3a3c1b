//! Scoring and prediction over fitted summaries.
//!
//! # Module Structure
//!
//! - [`class_scores`], [`predict`], [`predict_batch`]: scoring over bare
//!   per-class `(mean, stdev)` summaries, continuous features only
//! - mixed-kind scoring and the all-discrete path, reached through
//!   [`NaiveBayesModel`](crate::model::NaiveBayesModel)
//!
//! All entry points are pure: the same summaries and input always produce the
//! same label, and concurrent calls against one model need no coordination.

mod predictor;
mod scores;

pub use scores::{class_scores, predict, predict_batch, PredictError};

pub(crate) use predictor::{class_scores_mixed, predict_discrete, predict_mixed};
