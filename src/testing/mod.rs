//! Testing utilities.
//!
//! Seeded dataset generators and shared tolerances used by unit and
//! integration tests.

pub mod data;

pub use data::{
    synthetic_mixed_two_class, toy_discrete_kinds, toy_discrete_rows, toy_mixed_kinds,
    toy_mixed_rows,
};

/// Default absolute tolerance for floating-point assertions.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
