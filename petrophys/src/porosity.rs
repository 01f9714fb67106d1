//! Porosity from density and sonic logs, and clay corrections.
//!
//! Log porosities can fall outside the physical range on bad-hole or
//! mineralogy effects. Apply [`Limits::porosity`](crate::Limits::porosity)
//! for the conventional `[0, 0.6]` window.
//!
//! # References
//!
//! - Wyllie MRJ, Gregory AR, Gardner LW (1956) Elastic wave velocities in
//!   heterogeneous and porous media. Geophysics 21(1):41–70.
//! - Raymer LL, Hunt ER, Gardner JS (1980) An improved sonic transit
//!   time-to-porosity transform. SPWLA 21st Annual Logging Symposium.

use std::{fmt, str::FromStr};

use petrophys_core::{FormulaError, FormulaResult, checked};

/// Density porosity.
///
/// `φ = (ρma − ρb) / (ρma − ρfl)`
///
/// Typical matrix densities: sandstone 2.65 g/cc, limestone 2.71 g/cc,
/// dolomite 2.80–2.85 g/cc.
///
/// Porosity is zero at the matrix density and one at the fluid density.
/// Variants that divide by `ρb − ρfl` give different values, e.g. 0.1379
/// instead of 0.1212 for a 2.45 g/cc reading in a 2.65 g/cc sandstone.
///
/// # Errors
///
/// Returns a domain error if the matrix and fluid densities are equal.
pub fn porosity_density(rho_matrix: f64, rho_fluid: f64, rho_bulk: f64) -> FormulaResult {
    checked::div(
        "porosity_density",
        rho_matrix - rho_bulk,
        rho_matrix - rho_fluid,
        "rho_matrix - rho_fluid",
    )
}

/// Sonic porosity transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SonicMethod {
    /// Wyllie time average: `φ = (Δt − Δtma) / (Δtfl − Δtma)`.
    #[default]
    Wyllie,
    /// Raymer-Hunt-Gardner: `φ = −α − √(α² + Δtma/Δt − 1)` with
    /// `α = Δtma / (2 Δtfl) − 1`.
    Raymer,
}

impl SonicMethod {
    /// Tags accepted by [`FromStr`].
    pub const ACCEPTED: &'static [&'static str] = &["wyllie", "raymer"];

    /// The method's tag, as accepted by [`FromStr`].
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Wyllie => "wyllie",
            Self::Raymer => "raymer",
        }
    }
}

impl fmt::Display for SonicMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SonicMethod {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wyllie" => Ok(Self::Wyllie),
            "raymer" => Ok(Self::Raymer),
            _ => Err(FormulaError::invalid_argument(
                "sonic porosity method",
                s,
                Self::ACCEPTED,
            )),
        }
    }
}

/// Sonic porosity from matrix, fluid and log slowness.
///
/// Typical matrix slowness: sandstone 52–55 µs/ft, limestone 47 µs/ft,
/// dolomite 43 µs/ft.
///
/// # Errors
///
/// Returns a domain error if a slowness used as a divisor is zero or the
/// Raymer radicand is negative.
pub fn porosity_sonic(
    dt_matrix: f64,
    dt_fluid: f64,
    dt_log: f64,
    method: SonicMethod,
) -> FormulaResult {
    match method {
        SonicMethod::Wyllie => checked::div(
            "porosity_sonic(wyllie)",
            dt_log - dt_matrix,
            dt_fluid - dt_matrix,
            "dt_fluid - dt_matrix",
        ),
        SonicMethod::Raymer => {
            const FORMULA: &str = "porosity_sonic(raymer)";
            let alpha = checked::div(FORMULA, dt_matrix, 2.0 * dt_fluid, "dt_fluid")? - 1.0;
            let ratio = checked::div(FORMULA, dt_matrix, dt_log, "dt_log")?;
            Ok(-alpha - checked::sqrt(FORMULA, alpha * alpha + ratio - 1.0)?)
        }
    }
}

/// Effective porosity: total porosity less the clay-bound water.
///
/// `φe = φt − Vclay · φt,clay`
#[must_use]
pub fn porosity_effective(phit: f64, vclay: f64, phit_clay: f64) -> f64 {
    phit - vclay * phit_clay
}

/// Shale porosity from dry and wet shale densities.
///
/// `φsh = (ρdry − ρwet) / ρw`
///
/// # Errors
///
/// Returns a domain error if the water density is zero.
pub fn porosity_shale(rho_dry_shale: f64, rho_wet_shale: f64, rho_water: f64) -> FormulaResult {
    checked::div(
        "porosity_shale",
        rho_dry_shale - rho_wet_shale,
        rho_water,
        "rho_water",
    )
}
