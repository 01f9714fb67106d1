//! Linear geothermal gradient.
//!
//! Temperatures and depths may be in any consistent units (°F with ft, or
//! °C with m); the gradient carries the matching per-depth unit.

use petrophys_core::{FormulaResult, checked};

/// Temperature gradient between surface and bottom hole.
///
/// `g = (BHT − Ts) / depth`
///
/// # Errors
///
/// Returns a domain error if the bottom hole depth is zero.
pub fn temperature_gradient(
    bottom_hole_temperature: f64,
    surface_temperature: f64,
    bottom_hole_depth: f64,
) -> FormulaResult {
    checked::div(
        "temperature_gradient",
        bottom_hole_temperature - surface_temperature,
        bottom_hole_depth,
        "bottom hole depth",
    )
}

/// Formation temperature at a depth along a linear gradient.
///
/// `T = Ts + g · depth`
#[must_use]
pub fn formation_temperature(surface_temperature: f64, gradient: f64, depth: f64) -> f64 {
    surface_temperature + gradient * depth
}
