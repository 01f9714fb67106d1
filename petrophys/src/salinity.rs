//! Formation water salinity and resistivity.

use petrophys_core::{FormulaResult, checked};

use crate::convert::{TemperatureUnit, convert_temperature};

/// Mass ratio of NaCl to its chloride content.
const NACL_PER_CHLORIDE: f64 = 1.645;

/// Converts salinity from ppm chlorides to ppm NaCl equivalent.
#[must_use]
pub fn chlorides_to_nacl(ppm_chlorides: f64) -> f64 {
    ppm_chlorides * NACL_PER_CHLORIDE
}

/// Converts salinity from ppm NaCl equivalent to ppm chlorides.
#[must_use]
pub fn nacl_to_chlorides(ppm_nacl: f64) -> f64 {
    ppm_nacl / NACL_PER_CHLORIDE
}

/// Water resistivity at a new temperature (Arps).
///
/// - Fahrenheit: `Rw2 = Rw1 (T1 + 6.77) / (T2 + 6.77)`
/// - Celsius: `Rw2 = Rw1 (T1 + 21.5) / (T2 + 21.5)`
///
/// Kelvin temperatures are converted to Celsius first. Both temperatures
/// are in `unit`.
///
/// ```
/// use petrophys::{convert::TemperatureUnit, salinity::rw_at_temperature};
///
/// let rw = rw_at_temperature(0.05, 75.0, 112.0, TemperatureUnit::Fahrenheit)?;
/// assert!((rw - 0.0344).abs() < 1e-3);
/// # Ok::<(), petrophys::FormulaError>(())
/// ```
///
/// # Errors
///
/// Returns a domain error if the new temperature sits at the Arps
/// singularity (−6.77 °F or −21.5 °C).
pub fn rw_at_temperature(
    rw: f64,
    rw_temperature: f64,
    new_temperature: f64,
    unit: TemperatureUnit,
) -> FormulaResult {
    let (offset, t1, t2) = match unit {
        TemperatureUnit::Fahrenheit => (6.77, rw_temperature, new_temperature),
        TemperatureUnit::Celsius => (21.5, rw_temperature, new_temperature),
        TemperatureUnit::Kelvin => (
            21.5,
            convert_temperature(rw_temperature, unit, TemperatureUnit::Celsius),
            convert_temperature(new_temperature, unit, TemperatureUnit::Celsius),
        ),
    };
    Ok(rw * checked::div("rw_at_temperature", t1 + offset, t2 + offset, "new temperature offset")?)
}
