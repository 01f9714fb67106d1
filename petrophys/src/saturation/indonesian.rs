use petrophys_core::{
    FormulaError, FormulaResult, checked,
    constraint::{NonZero, StrictlyPositive, require},
};

/// Indonesian (Poupon-Leveaux) water saturation for shaly sands.
///
/// ```text
/// Sw = [ (√(Vcl^(2 − Vcl) / Rsh) + √(φ^m / Rw))² · Rt ]^(−1/n)
/// ```
///
/// The tortuosity factor is taken as one. With no clay the equation reduces
/// to Archie with `a = 1`.
///
/// The result is not limited. Unlike the sibling saturation formulas it is
/// commonly reported raw; apply [`Limits`](crate::Limits) explicitly when a
/// bounded value is wanted.
///
/// # Errors
///
/// Returns a domain error if `phi`, `rw`, `rt` or `rshale` is not strictly
/// positive, `vclay` is negative, `n` is zero, or a power has no real value.
///
/// # References
///
/// Poupon A, Leveaux J (1971) Evaluation of water saturation in shaly
/// formations. The Log Analyst 12(4):3–8.
pub fn sw_indonesian(
    rw: f64,
    rt: f64,
    rshale: f64,
    vclay: f64,
    phi: f64,
    m: f64,
    n: f64,
) -> FormulaResult {
    const FORMULA: &str = "sw_indonesian";
    let phi = require::<StrictlyPositive>(FORMULA, "phi", phi)?;
    let rw = require::<StrictlyPositive>(FORMULA, "rw", rw)?;
    let rt = require::<StrictlyPositive>(FORMULA, "rt", rt)?;
    let rshale = require::<StrictlyPositive>(FORMULA, "rshale", rshale)?;
    let n = require::<NonZero>(FORMULA, "n", n)?;
    if vclay < 0.0 {
        return Err(FormulaError::domain(
            FORMULA,
            format!("vclay must not be negative, got {vclay}"),
        ));
    }

    let clay_term =
        checked::sqrt(FORMULA, checked::powf(FORMULA, vclay, 2.0 - vclay)? / rshale)?;
    let pore_term = checked::sqrt(FORMULA, checked::powf(FORMULA, phi, m)? / rw)?;
    let conductance = (clay_term + pore_term).powi(2) * rt;

    checked::powf(FORMULA, conductance, -1.0 / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::saturation::sw_archie;

    #[test]
    fn indonesian_saturation() {
        let sw = sw_indonesian(0.05, 10.0, 4.0, 0.2, 0.2, 2.0, 2.0).unwrap();
        assert_abs_diff_eq!(sw, 0.3125, epsilon = 1e-4);

        let sw = sw_indonesian(0.04, 20.0, 3.0, 0.35, 0.18, 2.0, 2.0).unwrap();
        assert_abs_diff_eq!(sw, 0.1957, epsilon = 1e-4);
    }

    #[test]
    fn clean_sand_matches_archie() {
        let indonesian = sw_indonesian(0.05, 10.0, 4.0, 0.0, 0.2, 2.0, 2.0).unwrap();
        let archie = sw_archie(0.2, 0.05, 10.0, 1.0, 2.0, 2.0).unwrap();
        assert_relative_eq!(indonesian, archie, max_relative = 1e-12);
    }

    #[test]
    fn clay_lowers_saturation() {
        let clean = sw_indonesian(0.05, 10.0, 4.0, 0.0, 0.2, 2.0, 2.0).unwrap();
        let shaly = sw_indonesian(0.05, 10.0, 4.0, 0.2, 0.2, 2.0, 2.0).unwrap();
        assert!(shaly < clean);
    }

    #[test]
    fn result_is_not_limited() {
        let sw = sw_indonesian(0.5, 0.8, 2.0, 0.1, 0.1, 2.0, 2.0).unwrap();
        assert!(sw > 1.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(sw_indonesian(0.05, 10.0, 0.0, 0.2, 0.2, 2.0, 2.0).is_err());
        assert!(sw_indonesian(0.0, 10.0, 4.0, 0.2, 0.2, 2.0, 2.0).is_err());
        assert!(sw_indonesian(0.05, 10.0, 4.0, -0.1, 0.2, 2.0, 2.0).is_err());
    }

    #[test]
    fn porosity_must_be_positive_like_archie() {
        for phi in [0.0, -0.2] {
            let err = sw_indonesian(0.05, 10.0, 4.0, 0.2, phi, 2.0, 2.0).unwrap_err();
            assert_eq!(err.formula(), Some("sw_indonesian"));
            assert!(sw_archie(phi, 0.05, 10.0, 1.0, 2.0, 2.0).is_err());
        }
        assert_eq!(
            sw_indonesian(0.05, 10.0, 4.0, 0.2, -0.2, 2.0, 2.0).unwrap_err(),
            FormulaError::domain("sw_indonesian", "phi must not be negative")
        );
    }
}
