//! Model configuration with builder pattern.
//!
//! [`NaiveBayesConfig`] bundles the knobs that change scoring semantics. It
//! uses the `bon` crate for builder generation with validation at build time.
//!
//! # Example
//!
//! ```
//! use nbayes::{NaiveBayesConfig, Smoothing};
//!
//! // All defaults: "?" sentinel, no smoothing, strict variance, no priors.
//! let config = NaiveBayesConfig::builder().build().unwrap();
//!
//! // Laplace smoothing and prior-weighted scores.
//! let config = NaiveBayesConfig::builder()
//!     .smoothing(Smoothing::Laplace { alpha: 1.0 })
//!     .use_priors(true)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::data::Symbol;

use super::logger::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Laplace alpha must be positive and finite.
    InvalidAlpha(f64),
    /// Variance floor must be positive and finite.
    InvalidStdevFloor(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAlpha(v) => {
                write!(f, "laplace alpha must be positive and finite, got {}", v)
            }
            Self::InvalidStdevFloor(v) => {
                write!(f, "variance floor must be positive and finite, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Policies
// =============================================================================

/// Fallback for discrete values never observed for a class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothing {
    /// Unseen values get probability 0, zeroing the class score. This is the
    /// plain frequency estimate and the default.
    #[default]
    None,
    /// Additive smoothing: `(count + alpha) / (class_rows + alpha * distinct_values)`.
    Laplace { alpha: f64 },
}

/// Handling of degenerate sample standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VariancePolicy {
    /// Propagate the error: a single-row class fails the fit, and a constant
    /// column keeps its zero stdev so evaluation fails at prediction time.
    #[default]
    Strict,
    /// Substitute `min_stdev` for a single-row class and clamp every fitted
    /// stdev to at least `min_stdev`.
    Floor { min_stdev: f64 },
}

// =============================================================================
// NaiveBayesConfig
// =============================================================================

/// Configuration for fitting and scoring a naive Bayes model.
///
/// # Structure
///
/// - **Unknown sentinel**: the symbol that marks an unknown value in an input
///   vector; such positions contribute a neutral factor to every class score.
/// - **Smoothing**: fallback for discrete values unseen during fit.
/// - **Variance policy**: handling of single-row classes and constant columns.
/// - **Priors**: class scores start at 1 by default; enable `use_priors` to
///   start them at the class prior instead. Priors are computed and stored by
///   `fit` either way.
/// - **Verbosity**: fit-time progress reporting.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct NaiveBayesConfig {
    /// Unknown-value sentinel. Default: `"?"`.
    #[builder(default = Symbol::text("?"))]
    pub unknown: Symbol,

    /// Fallback for unseen discrete values. Default: `Smoothing::None`.
    #[builder(default)]
    pub smoothing: Smoothing,

    /// Degenerate-variance handling. Default: `VariancePolicy::Strict`.
    #[builder(default)]
    pub variance_policy: VariancePolicy,

    /// Start class scores at the class prior instead of 1. Default: `false`.
    #[builder(default)]
    pub use_priors: bool,

    /// Fit-time logging. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: naive_bayes_config_builder::IsComplete> NaiveBayesConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the Laplace alpha or the variance floor is
    /// non-positive or non-finite.
    pub fn build(self) -> Result<NaiveBayesConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl NaiveBayesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Smoothing::Laplace { alpha } = self.smoothing {
            if !(alpha > 0.0 && alpha.is_finite()) {
                return Err(ConfigError::InvalidAlpha(alpha));
            }
        }
        if let VariancePolicy::Floor { min_stdev } = self.variance_policy {
            if !(min_stdev > 0.0 && min_stdev.is_finite()) {
                return Err(ConfigError::InvalidStdevFloor(min_stdev));
            }
        }
        Ok(())
    }
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NaiveBayesConfig::builder().build();
        assert!(config.is_ok());

        let config = config.unwrap();
        assert_eq!(config.unknown, Symbol::text("?"));
        assert_eq!(config.smoothing, Smoothing::None);
        assert_eq!(config.variance_policy, VariancePolicy::Strict);
        assert!(!config.use_priors);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn invalid_alpha_zero() {
        let result = NaiveBayesConfig::builder()
            .smoothing(Smoothing::Laplace { alpha: 0.0 })
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidAlpha(_))));
    }

    #[test]
    fn invalid_alpha_negative() {
        let result = NaiveBayesConfig::builder()
            .smoothing(Smoothing::Laplace { alpha: -1.0 })
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidAlpha(_))));
    }

    #[test]
    fn invalid_alpha_nan() {
        let result = NaiveBayesConfig::builder()
            .smoothing(Smoothing::Laplace { alpha: f64::NAN })
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidAlpha(_))));
    }

    #[test]
    fn valid_laplace_alpha() {
        let result = NaiveBayesConfig::builder()
            .smoothing(Smoothing::Laplace { alpha: 0.5 })
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn invalid_stdev_floor() {
        let result = NaiveBayesConfig::builder()
            .variance_policy(VariancePolicy::Floor { min_stdev: 0.0 })
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidStdevFloor(_))));
    }

    #[test]
    fn valid_stdev_floor() {
        let result = NaiveBayesConfig::builder()
            .variance_policy(VariancePolicy::Floor { min_stdev: 1e-9 })
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn custom_unknown_sentinel() {
        let config = NaiveBayesConfig::builder()
            .unknown(Symbol::text("N/A"))
            .build()
            .unwrap();
        assert_eq!(config.unknown, Symbol::text("N/A"));
    }

    #[test]
    fn config_default_trait() {
        let config = NaiveBayesConfig::default();
        assert_eq!(config.smoothing, Smoothing::None);
    }
}
