//! Shared building blocks for the petrophysical formula crates.
//!
//! Every formula in the workspace is a pure function over scalar inputs.
//! This crate holds the pieces those functions have in common: the
//! [`FormulaError`] taxonomy, the [`Limits`] clamp stage, checked arithmetic
//! that turns undefined results into domain errors, and numeric constraint
//! markers for validating arguments.

pub mod checked;
pub mod constraint;
mod error;
mod limit;

pub use error::{FormulaError, FormulaResult};
pub use limit::{LimitExt, Limits, limit_value};
