use thiserror::Error;

/// A result type alias for formula evaluation.
pub type FormulaResult<T = f64, E = FormulaError> = Result<T, E>;

/// Errors that may occur when evaluating a petrophysical formula.
///
/// Formulas either return a fully computed value or one of these errors.
/// Clamping a result with [`Limits`](crate::Limits) is never a substitute for
/// a domain check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormulaError {
    /// A method or unit tag is not recognized.
    ///
    /// The message lists every accepted tag so callers can correct the input.
    #[error("invalid {argument} `{value}`, expected one of: {}", accepted.join(", "))]
    InvalidArgument {
        argument: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },

    /// The inputs fall outside the domain where the formula has a real result.
    ///
    /// For example, division by zero, a fractional power of a negative base,
    /// or a zero porosity feeding a Qv computation.
    #[error("{formula}: {reason}")]
    Domain {
        formula: &'static str,
        reason: String,
    },
}

impl FormulaError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(
        argument: &'static str,
        value: impl Into<String>,
        accepted: &'static [&'static str],
    ) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.into(),
            accepted,
        }
    }

    /// Creates a [`Domain`](Self::Domain) error.
    pub fn domain(formula: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            formula,
            reason: reason.into(),
        }
    }

    /// Returns the formula name if this is a domain error.
    #[must_use]
    pub fn formula(&self) -> Option<&'static str> {
        match self {
            Self::Domain { formula, .. } => Some(formula),
            Self::InvalidArgument { .. } => None,
        }
    }
}
