use petrophys_core::{
    FormulaError, FormulaResult, checked,
    constraint::{NonZero, StrictlyPositive, require},
};
use petrophys_solve::fixed_point::{self, Config, Observer, Status};
use thiserror::Error;
use tracing::debug;

use super::sw_archie;

const FORMULA: &str = "sw_waxman_smits";

/// Inputs to the Waxman-Smits saturation equation.
///
/// ```text
/// 1/Rt = φt^m* · Sw^n* / (a · Rw) · (1 + Rw · B · Qv / Sw)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaxmanSmits {
    /// Formation water resistivity (ohm·m).
    pub rw: f64,
    /// True formation resistivity (ohm·m).
    pub rt: f64,
    /// Equivalent conductance of the exchange cations, (S/m)/(meq/cc).
    pub b: f64,
    /// Cation exchange capacity per unit pore volume (meq/cc).
    pub qv: f64,
    /// Tortuosity factor.
    pub a: f64,
    /// Total porosity (fraction).
    pub phit: f64,
    /// Shaly-sand cementation exponent.
    pub m_star: f64,
    /// Shaly-sand saturation exponent.
    pub n_star: f64,
}

impl WaxmanSmits {
    /// Checks the inputs that every iteration depends on.
    ///
    /// # Errors
    ///
    /// Returns a domain error unless `phit`, `rw` and `rt` are strictly
    /// positive and `a` and `n_star` are non-zero.
    pub fn validate(&self) -> FormulaResult<()> {
        require::<StrictlyPositive>(FORMULA, "phit", self.phit)?;
        require::<StrictlyPositive>(FORMULA, "rw", self.rw)?;
        require::<StrictlyPositive>(FORMULA, "rt", self.rt)?;
        require::<NonZero>(FORMULA, "a", self.a)?;
        require::<NonZero>(FORMULA, "n_star", self.n_star)?;
        Ok(())
    }

    /// The Archie estimate used to start the iteration.
    ///
    /// # Errors
    ///
    /// Returns a domain error if Archie is undefined for these inputs.
    pub fn seed(&self) -> FormulaResult {
        sw_archie(self.phit, self.rw, self.rt, self.a, self.m_star, self.n_star)
    }

    /// One Waxman-Smits update from the current saturation estimate.
    ///
    /// `Sw' = [ Rt (1 + Rw B Qv / Sw) / (a φt^−m* Rw) ]^(−1/n*)`
    ///
    /// # Errors
    ///
    /// Returns a domain error if `swt` is zero or the bracket has no real
    /// power, which happens when a negative Qv drives it below zero.
    pub fn update(&self, swt: f64) -> FormulaResult {
        let clay = checked::div(FORMULA, self.rw * self.b * self.qv, swt, "saturation estimate")?;
        let conductive = self.rt * (1.0 + clay);
        let clean = self.a * checked::powf(FORMULA, self.phit, -self.m_star)? * self.rw;
        let ratio = checked::div(FORMULA, conductive, clean, "a * phit^-m* * rw")?;
        checked::powf(FORMULA, ratio, -1.0 / self.n_star)
    }
}

/// A solved Waxman-Smits saturation with its iteration record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaxmanSmitsSolution {
    /// Total water saturation.
    pub sw: f64,
    /// Archie starting estimate.
    pub seed: f64,
    /// Number of updates applied.
    pub iters: usize,
    /// Absolute change made by the last update.
    pub last_step: f64,
    /// How the iteration finished.
    pub status: Status,
}

/// Errors from the Waxman-Smits solver.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum WaxmanSmitsError {
    /// An input or intermediate estimate is outside the equation's domain.
    #[error(transparent)]
    Domain(#[from] FormulaError),

    /// The iteration cap was reached before successive estimates agreed.
    #[error(
        "sw_waxman_smits: no convergence after {iters} iterations \
         (last sw {last_sw}, step {last_step} > tolerance {tolerance})"
    )]
    NonConvergence {
        iters: usize,
        last_sw: f64,
        last_step: f64,
        tolerance: f64,
    },

    /// The solver configuration was rejected.
    #[error("sw_waxman_smits: invalid solver config: {reason}")]
    InvalidConfig { reason: &'static str },
}

impl From<fixed_point::Error<FormulaError>> for WaxmanSmitsError {
    fn from(error: fixed_point::Error<FormulaError>) -> Self {
        match error {
            fixed_point::Error::InvalidConfig { reason } => Self::InvalidConfig { reason },
            fixed_point::Error::NonFiniteIterate { iter, value } => {
                Self::Domain(FormulaError::domain(
                    FORMULA,
                    format!("non-finite saturation {value} at iteration {iter}"),
                ))
            }
            fixed_point::Error::Update { source, .. } => Self::Domain(source),
            fixed_point::Error::NonConvergence {
                iters,
                last,
                last_step,
                tolerance,
            } => Self::NonConvergence {
                iters,
                last_sw: last,
                last_step,
                tolerance,
            },
        }
    }
}

/// Waxman-Smits (1968) total water saturation for shaly sands.
///
/// The equation is implicit in `Sw`. Starting from the Archie estimate it is
/// iterated until two successive estimates differ by no more than
/// `config.tolerance`. The result is not limited.
///
/// ```
/// use petrophys::{SolverConfig, saturation::{WaxmanSmits, sw_waxman_smits}};
///
/// let input = WaxmanSmits {
///     rw: 0.05, rt: 10.0, b: 13.0328, qv: 0.3,
///     a: 1.0, phit: 0.2, m_star: 2.0, n_star: 2.0,
/// };
/// let solution = sw_waxman_smits(&input, &SolverConfig::default())?;
/// assert!((solution.sw - 0.2692).abs() < 1e-3);
/// # Ok::<(), petrophys::saturation::WaxmanSmitsError>(())
/// ```
///
/// # Errors
///
/// Returns [`WaxmanSmitsError::Domain`] for invalid inputs or an undefined
/// update, and [`WaxmanSmitsError::NonConvergence`] if `config.max_iters`
/// updates pass without meeting the tolerance.
///
/// # References
///
/// - Waxman MH, Smits LJM (1968) Electrical conductivities in oil-bearing
///   shaly sands. SPE Journal 8(2):107–122.
/// - Freedman R, Ausburn BE (1985) The Waxman-Smits equation for shaly
///   sands: I. Simple methods of solution. The Log Analyst 26(2).
pub fn sw_waxman_smits(
    input: &WaxmanSmits,
    config: &Config,
) -> Result<WaxmanSmitsSolution, WaxmanSmitsError> {
    sw_waxman_smits_observed(input, config, ())
}

/// Like [`sw_waxman_smits`], reporting each update to `observer`.
///
/// The observer may return [`Action::StopEarly`](super::Action::StopEarly)
/// to accept the current estimate. The solution's status is then
/// [`Status::StoppedByObserver`].
///
/// # Errors
///
/// See [`sw_waxman_smits`].
pub fn sw_waxman_smits_observed(
    input: &WaxmanSmits,
    config: &Config,
    observer: impl Observer,
) -> Result<WaxmanSmitsSolution, WaxmanSmitsError> {
    input.validate()?;
    let seed = input.seed()?;

    let rule = |swt: f64| input.update(swt);
    let solution = fixed_point::solve(&rule, seed, config, observer)?;

    debug!(
        sw = solution.x,
        seed,
        iters = solution.iters,
        "waxman-smits saturation solved"
    );

    Ok(WaxmanSmitsSolution {
        sw: solution.x,
        seed: solution.seed,
        iters: solution.iters,
        last_step: solution.last_step,
        status: solution.status,
    })
}
