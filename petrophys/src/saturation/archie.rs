use petrophys_core::{
    FormulaResult, checked,
    constraint::{NonZero, StrictlyPositive, require},
};

/// Archie formation factor.
///
/// `F = a / φ^m`
///
/// # Errors
///
/// Returns a domain error if the porosity is zero or `φ^m` has no real value.
pub fn formation_factor(a: f64, phi: f64, m: f64) -> FormulaResult {
    const FORMULA: &str = "formation_factor";
    let phi = require::<NonZero>(FORMULA, "phi", phi)?;
    checked::div(FORMULA, a, checked::powf(FORMULA, phi, m)?, "phi^m")
}

/// Resistivity of the formation when fully water saturated.
///
/// `Ro = F · Rw`
#[must_use]
pub fn ro(formation_factor: f64, rw: f64) -> f64 {
    formation_factor * rw
}

/// Archie resistivity index.
///
/// `I = Rt / Ro`
///
/// # Errors
///
/// Returns a domain error if `ro` is zero.
pub fn resistivity_index(rt: f64, ro: f64) -> FormulaResult {
    checked::div("resistivity_index", rt, ro, "ro")
}

/// Archie water saturation.
///
/// `Sw = ((a / φ^m) · (Rw / Rt))^(1/n)`
///
/// The result is not limited; values above one flag a parameter or
/// environmental issue rather than an error. Restrict it with
/// [`Limits`](crate::Limits) if needed.
///
/// ```
/// use petrophys::saturation::sw_archie;
///
/// let sw = sw_archie(0.23, 0.9, 40.0, 0.62, 2.15, 2.0)?;
/// assert!((sw - 0.573).abs() < 1e-3);
/// # Ok::<(), petrophys::FormulaError>(())
/// ```
///
/// # Errors
///
/// Returns a domain error unless `phi`, `rw` and `rt` are strictly positive
/// and `n` is non-zero.
pub fn sw_archie(phi: f64, rw: f64, rt: f64, a: f64, m: f64, n: f64) -> FormulaResult {
    const FORMULA: &str = "sw_archie";
    let phi = require::<StrictlyPositive>(FORMULA, "phi", phi)?;
    let rw = require::<StrictlyPositive>(FORMULA, "rw", rw)?;
    let rt = require::<StrictlyPositive>(FORMULA, "rt", rt)?;
    let n = require::<NonZero>(FORMULA, "n", n)?;

    let f = formation_factor(a, phi, m)?;
    checked::powf(FORMULA, f * (rw / rt), 1.0 / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use petrophys_core::{FormulaError, LimitExt, Limits};
    use proptest::prelude::*;

    #[test]
    fn archie_saturation() {
        let sw = sw_archie(0.23, 0.9, 40.0, 0.62, 2.15, 2.0).unwrap();
        assert_abs_diff_eq!(sw, 0.573, epsilon = 1e-3);
    }

    #[test]
    fn archie_saturation_limits() {
        let high = sw_archie(0.23, 0.9, 40.0, 0.62, 2.15, 2.0).limit(&Limits::new(0.0, 0.5));
        assert_eq!(high, Ok(0.5));

        let low = sw_archie(0.23, 0.9, 40.0, 0.62, 2.15, 2.0).limit(&Limits::new(0.6, 1.0));
        assert_eq!(low, Ok(0.6));
    }

    #[test]
    fn formation_factor_and_ro() {
        let f = formation_factor(1.0, 0.12, 2.0).unwrap();
        assert_abs_diff_eq!(f, 69.444, epsilon = 1e-2);
        assert_abs_diff_eq!(ro(f, 0.02), 1.3888, epsilon = 1e-2);
    }

    #[test]
    fn resistivity_index_is_ratio() {
        assert_relative_eq!(resistivity_index(100.0, 10.0).unwrap(), 10.0);
        assert!(resistivity_index(100.0, 0.0).is_err());
    }

    #[test]
    fn saturation_is_inverse_resistivity_index() {
        let (phi, rw, rt, a, m, n) = (0.18, 0.04, 25.0, 1.0, 2.0, 2.0);
        let ro = ro(formation_factor(a, phi, m).unwrap(), rw);
        let index = resistivity_index(rt, ro).unwrap();
        let sw = sw_archie(phi, rw, rt, a, m, n).unwrap();
        assert_relative_eq!(sw, index.powf(-1.0 / n), max_relative = 1e-12);
    }

    #[test]
    fn rejects_zero_porosity() {
        let err = sw_archie(0.0, 0.9, 40.0, 1.0, 2.0, 2.0).unwrap_err();
        assert_eq!(err, FormulaError::domain("sw_archie", "phi must not be zero"));
        assert!(formation_factor(1.0, 0.0, 2.0).is_err());
    }

    #[test]
    fn rejects_non_positive_resistivity() {
        assert!(sw_archie(0.2, 0.9, 0.0, 1.0, 2.0, 2.0).is_err());
        assert!(sw_archie(0.2, -0.9, 40.0, 1.0, 2.0, 2.0).is_err());
        assert!(sw_archie(0.2, 0.9, -40.0, 1.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn rejects_negative_porosity_with_fractional_exponent() {
        assert!(formation_factor(1.0, -0.2, 2.15).is_err());
        assert!(sw_archie(-0.2, 0.9, 40.0, 1.0, 2.15, 2.0).is_err());
    }

    #[test]
    fn rejects_negative_base_for_fractional_root() {
        // A negative tortuosity makes the Archie base negative.
        assert!(sw_archie(0.2, 0.9, 40.0, -1.0, 2.0, 2.0).is_err());
    }

    proptest! {
        #[test]
        fn satisfies_defining_equation(
            phi in 0.01..0.5_f64,
            rw in 0.01..2.0_f64,
            rt in 0.5..2000.0_f64,
            a in 0.5..1.5_f64,
            m in 1.5..3.0_f64,
            n in 1.5..3.0_f64,
        ) {
            let sw = sw_archie(phi, rw, rt, a, m, n).unwrap();
            let lhs = sw.powf(n) * phi.powf(m) / a;
            prop_assert!((lhs - rw / rt).abs() <= 1e-10 * (rw / rt));
        }
    }
}
