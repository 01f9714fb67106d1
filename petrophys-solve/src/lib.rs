//! Iterative solvers for implicit petrophysical equations.
//!
//! Most well-log formulas are closed forms. The few that are not, such as
//! Waxman-Smits saturation, are solved here by iterating an update rule to a
//! fixed point. Solvers are bounded: they either converge, are stopped by an
//! [`Observer`], or fail with a non-convergence error after the configured
//! number of iterations.

pub mod fixed_point;

mod update;

pub use fixed_point::Observer;
pub use update::Update;
