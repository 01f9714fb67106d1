//! Clay and shale volume from gamma ray and SP logs.
//!
//! Both logs are first normalized to an index between a clean reading (0)
//! and a clay or shale reading (1). Pass the 100% clay reading to get Vclay,
//! or the 100% shale reading to get Vshale.
//!
//! Gamma ray indices can then be bent by one of the non-linear transforms in
//! [`ClayVolumeMethod`], which correct the linear index's tendency to
//! overestimate clay content.
//!
//! # References
//!
//! - Larionov VV (1969) Borehole radiometry. Nedra, Moscow.
//! - Steiber RG (1973) Optimization of shale volumes in open hole logs.
//!   J Petrol Technol 25:147–162.
//! - Asquith G, Krygowski D (2004) Basic Well Log Analysis, 2nd ed.

use std::{fmt, str::FromStr};

use petrophys_core::{FormulaError, FormulaResult, checked};

/// Transform from a gamma ray index to a clay volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClayVolumeMethod {
    /// The gamma ray index itself.
    #[default]
    Linear,
    /// Larionov (1969) for Tertiary rocks: `0.083 (2^(3.71 I) − 1)`.
    LarionovYoung,
    /// Larionov (1969) for older rocks: `0.33 (2^(2 I) − 1)`.
    LarionovOld,
    /// Steiber (1973): `I / (3 − 2 I)`.
    Steiber,
    /// Clavier (1971): `1.7 − √(3.38 − (I + 0.7)²)`.
    Clavier,
}

impl ClayVolumeMethod {
    /// All methods in declaration order.
    pub const ALL: [ClayVolumeMethod; 5] = [
        ClayVolumeMethod::Linear,
        ClayVolumeMethod::LarionovYoung,
        ClayVolumeMethod::LarionovOld,
        ClayVolumeMethod::Steiber,
        ClayVolumeMethod::Clavier,
    ];

    /// Tags accepted by [`FromStr`].
    pub const ACCEPTED: &'static [&'static str] = &[
        "linear",
        "larionov-young",
        "larionov-old",
        "steiber",
        "clavier",
    ];

    /// The method's tag, as accepted by [`FromStr`].
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LarionovYoung => "larionov-young",
            Self::LarionovOld => "larionov-old",
            Self::Steiber => "steiber",
            Self::Clavier => "clavier",
        }
    }

    /// Converts a gamma ray index to a clay volume.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the transform has no real value for this
    /// index (Clavier for indices far outside `[0, 1]`).
    pub fn apply(self, igr: f64) -> FormulaResult {
        let vclay = match self {
            Self::Linear => igr,
            Self::LarionovYoung => 0.083 * (2f64.powf(3.71 * igr) - 1.0),
            Self::LarionovOld => 0.33 * (2f64.powf(2.0 * igr) - 1.0),
            Self::Steiber => checked::div("steiber", igr, 3.0 - 2.0 * igr, "3 - 2 * igr")?,
            Self::Clavier => 1.7 - checked::sqrt("clavier", 3.38 - (igr + 0.7).powi(2))?,
        };
        checked::finite(self.tag(), vclay)
    }
}

impl fmt::Display for ClayVolumeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ClayVolumeMethod {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| method.tag() == tag)
            .ok_or_else(|| FormulaError::invalid_argument("clay volume method", s, Self::ACCEPTED))
    }
}

/// Normalizes a gamma ray reading between clean and clay/shale readings.
///
/// `I = (gr − clean) / (shale − clean)`
///
/// # Errors
///
/// Returns a domain error if the clean and shale readings are equal.
pub fn gamma_ray_index(clean: f64, shale: f64, gr: f64) -> FormulaResult {
    checked::div("gamma_ray_index", gr - clean, shale - clean, "shale - clean")
}

/// Clay or shale volume from a gamma ray reading.
///
/// Restrict the result with [`Limits::fraction`](crate::Limits::fraction) if
/// values outside `[0, 1]` are not wanted.
///
/// ```
/// use petrophys::clay::{ClayVolumeMethod, gr_clay_volume};
///
/// let method: ClayVolumeMethod = "steiber".parse()?;
/// let vclay = gr_clay_volume(10.0, 120.0, 50.0, method)?;
/// assert!((vclay - 0.16).abs() < 1e-3);
/// # Ok::<(), petrophys::FormulaError>(())
/// ```
///
/// # Errors
///
/// Returns a domain error if the clean and shale readings are equal or the
/// method transform is undefined for the resulting index.
pub fn gr_clay_volume(
    clean: f64,
    shale: f64,
    gr: f64,
    method: ClayVolumeMethod,
) -> FormulaResult {
    method.apply(gamma_ray_index(clean, shale, gr)?)
}

/// Clay or shale volume from an SP reading, using the linear index.
///
/// # Errors
///
/// Returns a domain error if the clean and shale readings are equal.
pub fn sp_clay_volume(clean: f64, shale: f64, sp: f64) -> FormulaResult {
    checked::div("sp_clay_volume", sp - clean, shale - clean, "shale - clean")
}
