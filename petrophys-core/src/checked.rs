//! Arithmetic that reports undefined results as domain errors.
//!
//! Plain `f64` arithmetic silently yields `inf` or `NaN` for a zero divisor
//! or a fractional power of a negative base. The helpers here return a
//! [`FormulaError::Domain`] naming the formula instead, so a bad depth sample
//! surfaces as an error rather than a `NaN` buried in a log curve.

use crate::{FormulaError, FormulaResult};

/// Divides `numerator` by `denominator`.
///
/// # Errors
///
/// Returns a domain error if the denominator is zero or the quotient is not
/// finite. `what` names the denominator in the error message.
pub fn div(formula: &'static str, numerator: f64, denominator: f64, what: &str) -> FormulaResult {
    if denominator == 0.0 {
        return Err(FormulaError::domain(
            formula,
            format!("{what} must not be zero"),
        ));
    }
    finite(formula, numerator / denominator)
}

/// Raises `base` to a real `exponent`.
///
/// # Errors
///
/// Returns a domain error if the power has no real value: a negative base
/// with a fractional exponent, or zero raised to a negative exponent. A
/// non-finite result (overflow, `NaN` inputs) is also rejected.
pub fn powf(formula: &'static str, base: f64, exponent: f64) -> FormulaResult {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(FormulaError::domain(
            formula,
            format!("fractional power {exponent} of negative base {base} is not real"),
        ));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(FormulaError::domain(
            formula,
            format!("zero raised to negative power {exponent}"),
        ));
    }
    finite(formula, base.powf(exponent))
}

/// Takes the square root of `radicand`.
///
/// # Errors
///
/// Returns a domain error if the radicand is negative or not finite.
pub fn sqrt(formula: &'static str, radicand: f64) -> FormulaResult {
    if radicand < 0.0 {
        return Err(FormulaError::domain(
            formula,
            format!("square root of negative value {radicand}"),
        ));
    }
    finite(formula, radicand.sqrt())
}

/// Passes through a finite value.
///
/// # Errors
///
/// Returns a domain error if the value is `NaN` or infinite.
pub fn finite(formula: &'static str, value: f64) -> FormulaResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::domain(
            formula,
            format!("result is not finite ({value})"),
        ))
    }
}
