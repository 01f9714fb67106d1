//! Water saturation in clean and shaly formations.
//!
//! - [`sw_archie`]: Archie (1942) for clean formations, with its building
//!   blocks [`formation_factor`], [`ro`] and [`resistivity_index`].
//! - [`sw_indonesian`]: Poupon-Leveaux (1971) closed form for shaly sands.
//! - [`sw_waxman_smits`]: Waxman-Smits (1968), solved iteratively from an
//!   Archie seed.
//!
//! The shaly-sand corrections need the cation exchange capacity per unit
//! pore volume (Qv) and the equivalent conductance of the exchange cations
//! (B). Several Qv correlations are provided; pick the one that matches the
//! lab or log data at hand.

mod archie;
mod indonesian;
mod shaly;
mod waxman_smits;

pub use archie::{formation_factor, resistivity_index, ro, sw_archie};
pub use indonesian::sw_indonesian;
pub use petrophys_solve::fixed_point::{Action, Event, Status};
pub use shaly::{
    bound_water_saturation, equiv_cond_exchange_cations_b, excess_conductivity, qv_cec,
    qv_juhasz, vol_dry_clay,
};
pub use waxman_smits::{
    WaxmanSmits, WaxmanSmitsError, WaxmanSmitsSolution, sw_waxman_smits,
    sw_waxman_smits_observed,
};

/// Bulk volume water: the fraction of rock volume filled with water.
///
/// `BVW = Sw · φ`
#[must_use]
pub fn bulk_volume_water(sw: f64, phi: f64) -> f64 {
    sw * phi
}
