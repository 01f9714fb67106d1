use thiserror::Error;

/// Errors that can occur during fixed-point solving.
///
/// `E` is the error type of the [`Update`](crate::Update) rule.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite estimate {value} at iteration {iter}")]
    NonFiniteIterate { iter: usize, value: f64 },

    #[error("update rule failed at iteration {iter}")]
    Update {
        iter: usize,
        #[source]
        source: E,
    },

    #[error(
        "no convergence after {iters} iterations: last step {last_step} exceeds tolerance {tolerance}"
    )]
    NonConvergence {
        iters: usize,
        last: f64,
        last_step: f64,
        tolerance: f64,
    },
}
