//! Fixed-point iteration `x_{k+1} = g(x_k)` with a bounded iteration count.
//!
//! The solver starts from a seed, applies the [`Update`] rule, and stops once
//! `|x_{k+1} - x_k| <= tolerance`. If that never happens within
//! [`Config::max_iters`] updates it returns [`Error::NonConvergence`] rather
//! than looping indefinitely.

mod config;
mod error;
mod observer;
mod solution;

pub use config::Config;
pub use error::Error;
pub use observer::Observer;
pub use solution::{Solution, Status};

use tracing::{debug, trace};

use crate::Update;

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current estimate.
    StopEarly,
}

/// Iteration event emitted by the fixed-point solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Estimate before the update.
    pub previous: f64,
    /// Estimate after the update.
    pub current: f64,
    /// Absolute change `|current - previous|`.
    pub step: f64,
}

/// Iterates `rule` from `seed` until successive estimates converge.
/// Observers see every update and may stop the iteration early.
///
/// # Errors
///
/// Returns an error if the config is invalid, the seed or any estimate is
/// non-finite, the update rule fails, or the tolerance is not met within
/// `config.max_iters` updates.
pub fn solve<R, Obs>(
    rule: &R,
    seed: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error<R::Error>>
where
    R: Update,
    Obs: Observer,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !seed.is_finite() {
        return Err(Error::NonFiniteIterate {
            iter: 0,
            value: seed,
        });
    }

    let mut previous = seed;
    let mut last_step = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let current = rule
            .update(previous)
            .map_err(|source| Error::Update { iter, source })?;

        if !current.is_finite() {
            return Err(Error::NonFiniteIterate {
                iter,
                value: current,
            });
        }

        let step = (current - previous).abs();
        trace!(iter, previous, current, step, "fixed-point update");

        let event = Event {
            iter,
            previous,
            current,
            step,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    debug!(iter, x = current, "fixed-point solve stopped by observer");
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x: current,
                        seed,
                        iters: iter,
                        last_step: step,
                    });
                }
            }
        }

        if step <= config.tolerance {
            debug!(iter, x = current, step, "fixed-point solve converged");
            return Ok(Solution {
                status: Status::Converged,
                x: current,
                seed,
                iters: iter,
                last_step: step,
            });
        }

        previous = current;
        last_step = step;
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
        last: previous,
        last_step,
        tolerance: config.tolerance,
    })
}

/// Runs the fixed-point solver without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<R: Update>(
    rule: &R,
    seed: f64,
    config: &Config,
) -> Result<Solution, Error<R::Error>> {
    solve(rule, seed, config, ())
}
