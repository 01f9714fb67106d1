/// Restricts a value to the range `[low, high]`.
///
/// Values below `low` become `low`, values above `high` become `high`, and
/// everything else passes through unchanged. Unlike [`f64::clamp`] this never
/// panics; if `low > high` the lower bound is checked first.
#[inline]
#[must_use]
pub fn limit_value<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Optional range restriction applied to a formula result.
///
/// Formulas always return their raw value. Clamping is a separate,
/// explicitly requested post-processing stage configured by this struct, so
/// the same options apply uniformly to every formula family.
///
/// ```
/// use petrophys_core::Limits;
///
/// let limits = Limits::new(0.0, 0.5);
/// assert_eq!(limits.apply(0.73), 0.5);
///
/// // Disabled limits pass values through.
/// assert_eq!(Limits::off().apply(1.3), 1.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Whether the limits are applied at all.
    pub apply: bool,
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self::off()
    }
}

impl Limits {
    /// Enabled limits with custom bounds.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self {
            apply: true,
            low,
            high,
        }
    }

    /// Disabled limits, keeping the fraction bounds `[0, 1]` for later use.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            apply: false,
            low: 0.0,
            high: 1.0,
        }
    }

    /// Enabled `[0, 1]` limits for saturations and volume fractions.
    #[must_use]
    pub const fn fraction() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Enabled `[0, 0.6]` limits for porosities.
    #[must_use]
    pub const fn porosity() -> Self {
        Self::new(0.0, 0.6)
    }

    /// Returns a copy with `apply` set as given.
    #[must_use]
    pub const fn enabled(self, apply: bool) -> Self {
        Self { apply, ..self }
    }

    /// Applies the limits to a value, or returns it unchanged when disabled.
    #[inline]
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        if self.apply {
            limit_value(value, self.low, self.high)
        } else {
            value
        }
    }
}

/// Applies [`Limits`] to the successful value of a formula result.
///
/// ```
/// use petrophys_core::{FormulaResult, LimitExt, Limits};
///
/// let porosity: FormulaResult = Ok(0.72);
/// assert_eq!(porosity.limit(&Limits::porosity()), Ok(0.6));
/// ```
pub trait LimitExt {
    /// Returns the result with the limits applied to its `Ok` value.
    #[must_use]
    fn limit(self, limits: &Limits) -> Self;
}

impl<E> LimitExt for Result<f64, E> {
    fn limit(self, limits: &Limits) -> Self {
        self.map(|value| limits.apply(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn limits_high_values() {
        assert_eq!(limit_value(50.0, 20.0, 40.0), 40.0);
    }

    #[test]
    fn limits_low_values() {
        assert_eq!(limit_value(50.0, 60.0, 100.0), 60.0);
    }

    #[test]
    fn passes_values_inside_range() {
        assert_eq!(limit_value(50.0, 20.0, 100.0), 50.0);
    }

    #[test]
    fn disabled_limits_pass_through() {
        let limits = Limits::fraction().enabled(false);
        assert_eq!(limits.apply(-0.2), -0.2);
        assert_eq!(limits.apply(1.7), 1.7);
    }

    #[test]
    fn default_bounds_per_quantity() {
        assert_eq!(Limits::fraction().apply(1.4), 1.0);
        assert_eq!(Limits::porosity().apply(0.75), 0.6);
        assert_eq!(Limits::porosity().apply(-0.01), 0.0);
        assert!(!Limits::default().apply);
    }

    #[test]
    fn limit_ext_leaves_errors_alone() {
        let result: Result<f64, &str> = Err("boom");
        assert_eq!(result.limit(&Limits::fraction()), Err("boom"));
    }

    fn bounds() -> impl Strategy<Value = (f64, f64)> {
        (-1.0e6..1.0e6_f64, 0.0..1.0e6_f64).prop_map(|(low, width)| (low, low + width))
    }

    proptest! {
        #[test]
        fn limiting_is_idempotent(x in -1.0e7..1.0e7_f64, (low, high) in bounds()) {
            let once = limit_value(x, low, high);
            prop_assert_eq!(limit_value(once, low, high), once);
        }

        #[test]
        fn bounds_map_to_themselves((low, high) in bounds()) {
            prop_assert_eq!(limit_value(low, low, high), low);
            prop_assert_eq!(limit_value(high, low, high), high);
        }

        #[test]
        fn result_stays_within_bounds(x in -1.0e7..1.0e7_f64, (low, high) in bounds()) {
            let limited = limit_value(x, low, high);
            prop_assert!(limited >= low && limited <= high);
            if x > low && x < high {
                prop_assert_eq!(limited, x);
            }
        }
    }
}
