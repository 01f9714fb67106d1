//! Numeric constraints checked at the boundary of a formula.
//!
//! Resistivities must be strictly positive, porosities feeding a divisor
//! must not be zero, and so on. A [`Constraint`] captures one such invariant
//! as a zero-sized marker type, and [`Constrained`] carries a value that is
//! known to satisfy it.
//!
//! Formula code usually goes through [`require`], which checks a raw `f64`
//! and converts a violation into a [`FormulaError::Domain`] that names the
//! offending argument.
//!
//! # Provided Constraints
//!
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero

mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

use crate::{FormulaError, FormulaResult};

pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// ```
/// use petrophys_core::constraint::{Constrained, StrictlyPositive};
///
/// let rw = Constrained::<f64, StrictlyPositive>::new(0.05).unwrap();
/// assert_eq!(rw.into_inner(), 0.05);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks `value` against constraint `C` on behalf of `formula`.
///
/// # Errors
///
/// Returns a [`FormulaError::Domain`] naming `argument` if the constraint is
/// violated.
///
/// ```
/// use petrophys_core::constraint::{StrictlyPositive, require};
///
/// assert_eq!(require::<StrictlyPositive>("sw_archie", "rt", 40.0), Ok(40.0));
///
/// let err = require::<StrictlyPositive>("sw_archie", "rt", 0.0).unwrap_err();
/// assert_eq!(err.to_string(), "sw_archie: rt must not be zero");
/// ```
pub fn require<C: Constraint<f64>>(
    formula: &'static str,
    argument: &'static str,
    value: f64,
) -> FormulaResult {
    Constrained::<f64, C>::new(value)
        .map(Constrained::into_inner)
        .map_err(|violation| {
            let reason = violation.to_string();
            let reason = reason.strip_prefix("value ").unwrap_or(&reason);
            FormulaError::domain(formula, format!("{argument} {reason}"))
        })
}
