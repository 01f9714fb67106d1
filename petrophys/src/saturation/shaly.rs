use petrophys_core::{
    FormulaResult, checked,
    constraint::{StrictlyPositive, require},
};

/// Cation exchange capacity per unit total pore volume from a lab CEC.
///
/// `Qv = CEC · ρdry,clay · (1 − φt) / (100 · φt)`
///
/// `cec` is in meq/100 g and `rho_dry_clay` in g/cc; Qv comes out in meq/cc.
///
/// # Errors
///
/// Returns a domain error unless `phit` is strictly positive.
pub fn qv_cec(rho_dry_clay: f64, phit: f64, cec: f64) -> FormulaResult {
    let phit = require::<StrictlyPositive>("qv_cec", "phit", phit)?;
    Ok(cec * rho_dry_clay * (1.0 - phit) / (100.0 * phit))
}

/// Qv from dry clay volume (Juhasz normalised Qv).
///
/// `Qv = Vclay,dry · ρdry,clay · CECdry,clay / φt`
///
/// `cec_dry_clay` is in meq/g.
///
/// # Errors
///
/// Returns a domain error unless `phit` is strictly positive.
///
/// # References
///
/// Juhasz I (1981) Normalised Qv: the key to shaly sand evaluation using the
/// Waxman-Smits equation in the absence of core data. SPWLA 22nd Annual
/// Logging Symposium.
pub fn qv_juhasz(vclay_dry: f64, rho_dry_clay: f64, cec_dry_clay: f64, phit: f64) -> FormulaResult {
    let phit = require::<StrictlyPositive>("qv_juhasz", "phit", phit)?;
    Ok(vclay_dry * rho_dry_clay * cec_dry_clay / phit)
}

/// Dry clay volume from neutron and density porosity.
///
/// `Vclay,dry = φN − φD / HIdry,clay`
///
/// # Errors
///
/// Returns a domain error if the dry clay hydrogen index is zero.
pub fn vol_dry_clay(phi_neutron: f64, phi_density: f64, hi_dry_clay: f64) -> FormulaResult {
    Ok(phi_neutron - checked::div("vol_dry_clay", phi_density, hi_dry_clay, "hi_dry_clay")?)
}

/// Equivalent conductance of the clay exchange cations, B, in
/// (S/m)/(meq/cc).
///
/// ```text
/// B = (−1.28 + 0.225 T − 0.0004059 T²) / (1 + Rw^1.23 (0.045 T − 0.27))
/// ```
///
/// with `T` in °C and `Rw` in ohm·m at `T`.
///
/// # Errors
///
/// Returns a domain error if the denominator vanishes or `rw` is negative.
///
/// # References
///
/// Juhasz I (1981), after Waxman MH, Thomas EC (1974).
pub fn equiv_cond_exchange_cations_b(temperature_c: f64, rw: f64) -> FormulaResult {
    const FORMULA: &str = "equiv_cond_exchange_cations_b";
    let t = temperature_c;
    let numerator = -1.28 + 0.225 * t - 0.0004059 * t * t;
    let denominator = 1.0 + checked::powf(FORMULA, rw, 1.23)? * (0.045 * t - 0.27);
    checked::div(FORMULA, numerator, denominator, "denominator")
}

/// Excess conductivity contributed by the clay exchange cations.
///
/// `Cx = B · Qv`
#[must_use]
pub fn excess_conductivity(b: f64, qv: f64) -> f64 {
    b * qv
}

/// Fraction of the total pore volume occupied by clay-bound water.
///
/// `Swb = φt,wet clay · Vclay / φt`
///
/// # Errors
///
/// Returns a domain error unless `phit` is strictly positive.
pub fn bound_water_saturation(phit_wet_clay: f64, vclay: f64, phit: f64) -> FormulaResult {
    let phit = require::<StrictlyPositive>("bound_water_saturation", "phit", phit)?;
    Ok(phit_wet_clay * vclay / phit)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use petrophys_core::FormulaError;

    #[test]
    fn qv_from_cec() {
        assert_relative_eq!(qv_cec(2.65, 0.2, 10.0).unwrap(), 1.06, max_relative = 1e-12);
    }

    #[test]
    fn qv_from_dry_clay_volume() {
        assert_relative_eq!(qv_juhasz(0.1, 2.65, 0.8, 0.2).unwrap(), 1.06, max_relative = 1e-12);
    }

    #[test]
    fn qv_rejects_zero_porosity() {
        assert_eq!(
            qv_cec(2.65, 0.0, 10.0).unwrap_err(),
            FormulaError::domain("qv_cec", "phit must not be zero")
        );
        assert!(qv_juhasz(0.1, 2.65, 0.8, 0.0).is_err());
        assert!(qv_juhasz(0.1, 2.65, 0.8, -0.1).is_err());
    }

    #[test]
    fn dry_clay_volume_divides_density_term_only() {
        assert_abs_diff_eq!(vol_dry_clay(0.3, 0.2, 0.5).unwrap(), -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(vol_dry_clay(0.35, 0.2, 0.8).unwrap(), 0.1, epsilon = 1e-12);
        assert!(vol_dry_clay(0.3, 0.2, 0.0).is_err());
    }

    #[test]
    fn b_at_reservoir_conditions() {
        let b = equiv_cond_exchange_cations_b(80.0, 0.05).unwrap();
        assert_abs_diff_eq!(b, 13.0328, epsilon = 1e-4);

        let b = equiv_cond_exchange_cations_b(25.0, 0.1).unwrap();
        assert_abs_diff_eq!(b, 3.8952, epsilon = 1e-4);
    }

    #[test]
    fn b_rises_with_temperature() {
        let cool = equiv_cond_exchange_cations_b(40.0, 0.1).unwrap();
        let hot = equiv_cond_exchange_cations_b(100.0, 0.1).unwrap();
        assert!(hot > cool);
    }

    #[test]
    fn b_rejects_negative_rw() {
        assert!(equiv_cond_exchange_cations_b(80.0, -0.05).is_err());
    }

    #[test]
    fn b_rejects_vanishing_denominator() {
        // 1 + 1^1.23 (0.045 T - 0.27) = 0 at T = -146/9 °C.
        assert_eq!(
            equiv_cond_exchange_cations_b(-16.222222222222225, 1.0).unwrap_err(),
            FormulaError::domain("equiv_cond_exchange_cations_b", "denominator must not be zero")
        );
    }

    #[test]
    fn excess_conductivity_and_bound_water() {
        assert_relative_eq!(excess_conductivity(13.0, 0.3), 3.9, max_relative = 1e-12);
        let swb = bound_water_saturation(0.3, 0.2, 0.2).unwrap();
        assert_relative_eq!(swb, 0.3, max_relative = 1e-12);
        assert!(bound_water_saturation(0.3, 0.2, 0.0).is_err());
    }
}
