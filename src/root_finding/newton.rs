//! Newton-Raphson method

use super::config::NewtonCfg;
use super::derivative::Derivative;
use super::errors::{RootFindingError, ToleranceError};
use super::report::NewtonReport;
use thiserror::Error;


/// Upper bound on the up-front allocation for the iterate sequence.
const ITERATES_PREALLOC: usize = 64;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative is zero at x={x} (step {iteration}); newton step undefined")]
    ZeroDerivative { x: f64, iteration: usize },

    #[error("did not converge within {max_iter} iterations; last x={last_x}")]
    NotConverged { max_iter: usize, last_x: f64, iterates: Vec<f64> },

    #[error("finite-difference step not representable at x={x}, h={h};\
             try smaller |x| scaling or analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 }
}

impl NewtonError {
    /// Partial trajectory of a run that exhausted its budget.
    pub fn iterates(&self) -> Option<&[f64]> {
        match self {
            NewtonError::NotConverged { iterates, .. } => Some(iterates),
            _ => None,
        }
    }
}


fn newton_loop<F, G>(
    mut f: F,
    mut df: Derivative<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<NewtonReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let tol       = cfg.tol();
    let max_iter  = cfg.max_iter();
    let criterion = cfg.criterion();

    let mut evals: usize = 0;
    let mut iterates = Vec::with_capacity(max_iter.min(ITERATES_PREALLOC) + 1);
    iterates.push(x0);

    let mut x  = x0;
    let mut fx = { evals += 1; f(x) };

    for iteration in 0..max_iter {
        let dfx = df.eval(&mut f, x, &mut evals)?;
        if dfx == 0.0 {
            return Err(NewtonError::ZeroDerivative { x, iteration });
        }

        let x_next = x - fx / dfx;
        iterates.push(x_next);

        let fx_next = { evals += 1; f(x_next) };
        if let Some(satisfied) = criterion.check(x, x_next, fx_next, tol) {
            return Ok(NewtonReport::new(
                iterates,
                fx_next,
                evals,
                satisfied,
                df.source()
            ));
        }

        x  = x_next;
        fx = fx_next;
    }

    Err(NewtonError::NotConverged { max_iter, last_x: x, iterates })
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, `max_iter`, stopping criterion)
///
/// # Returns
/// [`NewtonReport`] holding every iterate from `x0` to the root, which
/// satisfies the configured criterion (by default `|f(root)| < tol`).
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]                        : `x0` non-finite
/// - [`NewtonError::ZeroDerivative`]                      : `f'(x) == 0` at some iterate
/// - [`NewtonError::NotConverged`]                        : `max_iter` steps taken without meeting `tol`
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`] : FD step unrepresentable near `x`
///
/// # Behavior
/// - At least one step is always taken, even if `f(x0)` is already small.
/// - The derivative is checked for exact zero before each step.
/// - No partial result is returned on failure; [`NewtonError::NotConverged`]
///   carries the trajectory for diagnostics only.
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. Poor guesses or ill-behaved functions can diverge or cycle.
pub fn newton<F, G>(
    func: F,
    dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<NewtonReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, Derivative::from_option(dfunc), x0, cfg)
}


/// Runs Newton's method with an analytic derivative and returns the
/// iterate sequence `[x0, x1, ..., root]`.
///
/// Stops once `|f(x_n)| < tol`. The sequence has between `2` and
/// `max_iter + 1` elements.
///
/// # Errors
/// As [`newton`], plus [`ToleranceError::InvalidTol`] and
/// [`RootFindingError::InvalidMaxIter`] for out-of-range parameters.
pub fn find_root<F, G>(
    f: F,
    f_prime: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Vec<f64>, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    let cfg = NewtonCfg::new()
        .set_tol(tol)?
        .set_max_iter(max_iter)?;

    newton(f, Some(f_prime), x0, cfg).map(NewtonReport::into_iterates)
}
