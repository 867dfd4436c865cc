//! Scalar root finders used by the inverse lookup.
//!
//! Iteration caps are fixed; callers only see convergence or failure.

use tracing::trace;

use crate::error::CurveResult;

/// Iteration cap for the local (Halley) stage.
pub const LOCAL_MAX_ITERATIONS: usize = 50;
/// Iteration cap for the bracketing (Brent) stage.
pub const BRACKET_MAX_ITERATIONS: usize = 100;

const BRENT_XTOL: f64 = 2e-12;
const BRENT_RTOL: f64 = 4.0 * f64::EPSILON;

/// Outcome of the derivative-based local search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalSearch {
    Converged { root: f64, iterations: usize },
    Failed { reason: &'static str, last: f64 },
}

/// Outcome of the bracketing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketSearch {
    Root(f64),
    /// The endpoint values share a sign.
    NotBracketed { f_lo: f64, f_hi: f64 },
    /// Ran out of iterations; carries the best estimate.
    IterationLimit(f64),
}

/// Halley's method (Newton with a second-derivative correction).
///
/// `f` returns the residual together with its first and second derivatives.
/// Stops when successive iterates differ by at most `step_tol`.
pub fn halley<F>(start: f64, step_tol: f64, f: F) -> CurveResult<LocalSearch>
where
    F: Fn(f64) -> CurveResult<(f64, f64, f64)>,
{
    let mut x = start;
    if !x.is_finite() {
        return Ok(LocalSearch::Failed {
            reason: "non-finite start",
            last: x,
        });
    }

    for iteration in 0..LOCAL_MAX_ITERATIONS {
        let (fx, d1, d2) = f(x)?;
        if !fx.is_finite() || !d1.is_finite() {
            return Ok(LocalSearch::Failed {
                reason: "non-finite evaluation",
                last: x,
            });
        }
        if d1 == 0.0 {
            return Ok(LocalSearch::Failed {
                reason: "zero derivative",
                last: x,
            });
        }

        let mut step = fx / d1;
        let adjust = step * d2 / d1 / 2.0;
        if adjust.abs() < 1.0 {
            step /= 1.0 - adjust;
        }
        let next = x - step;
        trace!(iteration, x = next, residual = fx, "halley step");

        if !next.is_finite() {
            return Ok(LocalSearch::Failed {
                reason: "step diverged",
                last: x,
            });
        }
        if (next - x).abs() <= step_tol {
            return Ok(LocalSearch::Converged {
                root: next,
                iterations: iteration + 1,
            });
        }
        x = next;
    }

    Ok(LocalSearch::Failed {
        reason: "iteration limit",
        last: x,
    })
}

/// Brent's method on `[lo, hi]`: bisection safeguarded by secant and inverse
/// quadratic steps. Iterates never leave the bracket.
pub fn brent<F>(lo: f64, hi: f64, f: F) -> CurveResult<BracketSearch>
where
    F: Fn(f64) -> CurveResult<f64>,
{
    let mut xpre = lo;
    let mut xcur = hi;
    let mut fpre = f(xpre)?;
    let mut fcur = f(xcur)?;

    if fpre * fcur > 0.0 || fpre.is_nan() || fcur.is_nan() {
        return Ok(BracketSearch::NotBracketed {
            f_lo: fpre,
            f_hi: fcur,
        });
    }
    if fpre == 0.0 {
        return Ok(BracketSearch::Root(xpre));
    }
    if fcur == 0.0 {
        return Ok(BracketSearch::Root(xcur));
    }

    // Contrapoint: the end of the bracket opposite `xcur`.
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iteration in 0..BRACKET_MAX_ITERATIONS {
        if fpre != 0.0 && fcur != 0.0 && (fpre < 0.0) != (fcur < 0.0) {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (BRENT_XTOL + BRENT_RTOL * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(BracketSearch::Root(xcur));
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur)?;
        trace!(iteration, x = xcur, residual = fcur, "brent step");
    }

    Ok(BracketSearch::IterationLimit(xcur))
}
