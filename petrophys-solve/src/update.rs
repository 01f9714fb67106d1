use std::error::Error as StdError;

/// An update rule `x_next = g(x)` iterated by a fixed-point solver.
///
/// Closures of the form `Fn(f64) -> Result<f64, E>` implement this trait, so
/// most callers never name it.
pub trait Update {
    type Error: StdError + Send + Sync + 'static;

    /// Computes the next estimate from the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule is undefined at `x`.
    fn update(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Update for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn update(&self, x: f64) -> Result<f64, Self::Error> {
        self(x)
    }
}
