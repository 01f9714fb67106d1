//! Well-log petrophysics formulas.
//!
//! Each function converts raw wireline measurements (gamma ray, density,
//! sonic slowness, resistivity, SP) into a derived petrophysical quantity
//! for a single depth sample. Mapping a formula over a log curve is left to
//! the caller; every function is pure, so samples can be evaluated in any
//! order or in parallel.
//!
//! # Modules
//!
//! - [`saturation`]: Archie, Indonesian and Waxman-Smits water saturation,
//!   plus the Qv and B helpers that feed the shaly-sand corrections.
//! - [`clay`]: Clay or shale volume from gamma ray and SP logs.
//! - [`porosity`]: Density, sonic, effective and shale porosity.
//! - [`salinity`]: Salinity unit conversion and water resistivity at temperature.
//! - [`temperature`]: Geothermal gradient and formation temperature.
//! - [`convert`]: Length, slowness, temperature and fraction conversions.
//!
//! # Limits
//!
//! Formulas return their raw value. Restrict a result to a range with
//! [`Limits`], either directly or through [`LimitExt`]:
//!
//! ```
//! use petrophys::{LimitExt, Limits, saturation::sw_archie};
//!
//! let sw = sw_archie(0.23, 0.9, 40.0, 0.62, 2.15, 2.0).limit(&Limits::new(0.0, 0.5))?;
//! assert_eq!(sw, 0.5);
//! # Ok::<(), petrophys::FormulaError>(())
//! ```

pub mod clay;
pub mod convert;
pub mod porosity;
pub mod salinity;
pub mod saturation;
pub mod temperature;

pub use petrophys_core::{FormulaError, FormulaResult, LimitExt, Limits, limit_value};
pub use petrophys_solve::fixed_point::Config as SolverConfig;
