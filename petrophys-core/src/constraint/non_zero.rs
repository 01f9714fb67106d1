use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not zero.
///
/// Used for divisors that may legitimately be negative, such as the span
/// between clean and shale log readings.
///
/// ```
/// use petrophys_core::constraint::NonZero;
///
/// assert!(NonZero::new(-110.0).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonZero;

impl NonZero {
    /// Constructs `Constrained<f64, NonZero>` if the value is not zero.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero or `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, NonZero>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Constraint<f64> for NonZero {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value == 0.0 {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}
