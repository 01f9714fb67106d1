//! Unit conversions used around log interpretation.
//!
//! Length and temperature conversions go through `uom` quantities so the
//! conversion factors live in one place. Velocity and slowness are a
//! reciprocal pair scaled by 10⁶ (ft/s ↔ µs/ft, or m/s ↔ µs/m).

use std::{fmt, str::FromStr};

use petrophys_core::{FormulaError, FormulaResult, checked};
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::{foot, inch, meter},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
};

/// Converts feet to metres.
#[must_use]
pub fn feet_to_meters(value: f64) -> f64 {
    Length::new::<foot>(value).get::<meter>()
}

/// Converts metres to feet.
#[must_use]
pub fn meters_to_feet(value: f64) -> f64 {
    Length::new::<meter>(value).get::<foot>()
}

/// Converts feet to inches.
#[must_use]
pub fn feet_to_inches(value: f64) -> f64 {
    Length::new::<foot>(value).get::<inch>()
}

/// Converts inches to feet.
#[must_use]
pub fn inches_to_feet(value: f64) -> f64 {
    Length::new::<inch>(value).get::<foot>()
}

/// Converts a velocity to a slowness, e.g. ft/s to µs/ft.
///
/// # Errors
///
/// Returns a domain error if the velocity is zero.
pub fn velocity_to_slowness(velocity: f64) -> FormulaResult {
    checked::div("velocity_to_slowness", 1.0e6, velocity, "velocity")
}

/// Converts a slowness to a velocity, e.g. µs/ft to ft/s.
///
/// # Errors
///
/// Returns a domain error if the slowness is zero.
pub fn slowness_to_velocity(slowness: f64) -> FormulaResult {
    checked::div("slowness_to_velocity", 1.0e6, slowness, "slowness")
}

/// Temperature scale.
///
/// Parses from `c`, `f` or `k` (or the full scale name), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Tags accepted by [`FromStr`].
    pub const ACCEPTED: &'static [&'static str] = &["c", "f", "k"];

    /// Short tag for the scale.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "c",
            Self::Fahrenheit => "f",
            Self::Kelvin => "k",
        }
    }

    pub(crate) fn quantity(self, value: f64) -> ThermodynamicTemperature {
        match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
        }
    }

    pub(crate) fn value(self, temperature: ThermodynamicTemperature) -> f64 {
        match self {
            Self::Celsius => temperature.get::<degree_celsius>(),
            Self::Fahrenheit => temperature.get::<degree_fahrenheit>(),
            Self::Kelvin => temperature.get::<kelvin>(),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(FormulaError::invalid_argument(
                "temperature unit",
                s,
                Self::ACCEPTED,
            )),
        }
    }
}

/// Converts a temperature between scales.
///
/// ```
/// use petrophys::convert::{TemperatureUnit, convert_temperature};
///
/// let from: TemperatureUnit = "c".parse()?;
/// let f = convert_temperature(100.0, from, TemperatureUnit::Fahrenheit);
/// assert!((f - 212.0).abs() < 1e-9);
/// # Ok::<(), petrophys::FormulaError>(())
/// ```
#[must_use]
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    to.value(from.quantity(value))
}

/// How a fraction such as porosity or saturation is expressed.
///
/// Parses from `decimal` or `percent`, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FractionUnit {
    Decimal,
    Percent,
}

impl FractionUnit {
    /// Tags accepted by [`FromStr`].
    pub const ACCEPTED: &'static [&'static str] = &["decimal", "percent"];
}

impl FromStr for FractionUnit {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "percent" => Ok(Self::Percent),
            _ => Err(FormulaError::invalid_argument(
                "fraction unit",
                s,
                Self::ACCEPTED,
            )),
        }
    }
}

/// Switches a fraction between decimal and percent.
///
/// `unit` is the unit the value is currently in: a percent value is returned
/// as a decimal and a decimal value as a percent.
#[must_use]
pub fn decimal_percent_convert(value: f64, unit: FractionUnit) -> f64 {
    match unit {
        FractionUnit::Percent => value / 100.0,
        FractionUnit::Decimal => value * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn feet_and_meters() {
        assert_relative_eq!(feet_to_meters(10.0), 3.048, epsilon = 1e-12);
        assert_relative_eq!(meters_to_feet(10.0), 32.8084, epsilon = 1e-4);
        assert_relative_eq!(meters_to_feet(feet_to_meters(8000.0)), 8000.0, epsilon = 1e-9);
    }

    #[test]
    fn feet_and_inches() {
        assert_relative_eq!(feet_to_inches(2.5), 30.0, epsilon = 1e-12);
        assert_relative_eq!(inches_to_feet(30.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn velocity_slowness_pair() {
        assert_relative_eq!(velocity_to_slowness(20_000.0).unwrap(), 50.0);
        assert_relative_eq!(slowness_to_velocity(50.0).unwrap(), 20_000.0);
        assert!(velocity_to_slowness(0.0).is_err());
        assert!(slowness_to_velocity(0.0).is_err());
    }

    #[test]
    fn temperature_triangle() {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

        assert_relative_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(212.0, Fahrenheit, Celsius), 100.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(273.15, Kelvin, Celsius), 0.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(32.0, Fahrenheit, Kelvin), 273.15, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(373.15, Kelvin, Fahrenheit), 212.0, epsilon = 1e-9);
        assert_eq!(convert_temperature(42.0, Kelvin, Kelvin), 42.0);
    }

    #[test]
    fn parses_temperature_units() {
        assert_eq!("C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("fahrenheit".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("k".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
    }

    #[test]
    fn rejects_unknown_temperature_unit() {
        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(
            err,
            FormulaError::invalid_argument("temperature unit", "rankine", &["c", "f", "k"])
        );
    }

    #[test]
    fn decimal_percent() {
        assert_relative_eq!(decimal_percent_convert(55.0, FractionUnit::Percent), 0.55);
        assert_relative_eq!(decimal_percent_convert(0.42, FractionUnit::Decimal), 42.0);
        assert_relative_eq!(decimal_percent_convert(0.21, FractionUnit::Decimal), 21.0);
    }

    #[test]
    fn rejects_unknown_fraction_unit() {
        assert!(matches!(
            "solongandthanksforthefish".parse::<FractionUnit>(),
            Err(FormulaError::InvalidArgument { .. })
        ));
    }
}
