//! Inverse lookup: temperature for a given EMF.
//!
//! Two stages:
//! 1. Halley iteration from the start guess, evaluated with extrapolation so
//!    it may briefly step outside the domain. Accepted only if the in-range
//!    residual meets the tolerance.
//! 2. Otherwise, Brent's method over the full domain.
//!
//! The lookup assumes the curve is monotonic. Where it is not (see
//! [`PiecewiseFunction::is_ambiguous`]) the returned root may be on either
//! branch; pass a start guess on the wanted branch.

use tc_core::ensure_finite;
use tracing::{debug, warn};

use crate::error::{CurveError, CurveResult};
use crate::function::PiecewiseFunction;
use crate::policy::{EvalOptions, OutOfRange};
use crate::roots::{BracketSearch, LocalSearch, brent, halley};

/// Options for [`PiecewiseFunction::inverse`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseOptions {
    /// Where to start the local search; the domain midpoint when `None`.
    pub start_guess: Option<f64>,
    /// Allowed absolute error on the function value (not on temperature).
    pub tolerance: f64,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self {
            start_guess: None,
            tolerance: 1e-6,
        }
    }
}

impl InverseOptions {
    pub fn with_start_guess(mut self, start_guess: f64) -> Self {
        self.start_guess = Some(start_guess);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl PiecewiseFunction {
    /// Find `t` with `|value(t) - target| <= tolerance`.
    pub fn inverse(&self, target: f64, options: InverseOptions) -> CurveResult<f64> {
        let target = ensure_finite(target, "inverse target")?;
        let tolerance = ensure_finite(options.tolerance, "inverse tolerance")?;

        if self.is_ambiguous(target) {
            warn!(
                target,
                turning_points = ?self.turning_points(),
                "inverse lookup on a non-monotonic range; root may be on either branch"
            );
        }

        let start = options.start_guess.unwrap_or_else(|| self.midpoint());
        match self.local_inverse(target, start, tolerance)? {
            LocalSearch::Converged { root, iterations } => {
                match self.value(root) {
                    Ok(v) if (v - target).abs() <= tolerance => return Ok(root),
                    Ok(v) => debug!(
                        root,
                        iterations,
                        residual = v - target,
                        "local root rejected by residual check; bracketing"
                    ),
                    Err(err) => debug!(root, iterations, %err, "local root outside domain; bracketing"),
                }
            }
            LocalSearch::Failed { reason, last } => {
                debug!(reason, last, target, "local root finder failed; bracketing");
            }
        }

        self.bracketed_inverse(target, tolerance)
    }

    fn local_inverse(&self, target: f64, start: f64, tolerance: f64) -> CurveResult<LocalSearch> {
        halley(start, tolerance, |t| {
            let v = self.evaluate(t, EvalOptions::extrapolated(0))?;
            let d1 = self.evaluate(t, EvalOptions::extrapolated(1))?;
            let d2 = self.evaluate(t, EvalOptions::extrapolated(2))?;
            Ok((v - target, d1, d2))
        })
    }

    fn bracketed_inverse(&self, target: f64, tolerance: f64) -> CurveResult<f64> {
        let (min, max) = (self.min_temp(), self.max_temp());
        // The bracket keeps every iterate inside the domain; extrapolation only
        // guards against rounding at the endpoints.
        let outcome = brent(min, max, |t| {
            Ok(self.evaluate(t, EvalOptions::extrapolated(0))? - target)
        })?;

        let root = match outcome {
            BracketSearch::Root(t) => t,
            BracketSearch::NotBracketed { .. } => {
                return Err(CurveError::OutOfDomain { target, min, max });
            }
            BracketSearch::IterationLimit(t) => {
                return Err(CurveError::Convergence {
                    target,
                    residual: self.residual(t, target)?,
                });
            }
        };

        let residual = self.residual(root, target)?;
        if residual <= tolerance {
            Ok(root)
        } else {
            Err(CurveError::Convergence { target, residual })
        }
    }

    /// Absolute residual with out-of-range inputs turned into NaN.
    fn residual(&self, t: f64, target: f64) -> CurveResult<f64> {
        let nan = EvalOptions::default().with_out_of_range(OutOfRange::Nan);
        Ok((self.evaluate(t, nan)? - target).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use tc_core::{TemperatureUnit, VoltageUnit};

    fn curve(segments: Vec<Segment>) -> PiecewiseFunction {
        PiecewiseFunction::new(
            segments,
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "test",
            "ITS-90",
        )
        .unwrap()
    }

    /// Smooth, increasing cubic on [0, 1000].
    fn cubic() -> PiecewiseFunction {
        curve(vec![
            Segment::new(0.0, 1000.0, vec![1e-9, 2e-6, 0.04, 0.0], None).unwrap(),
        ])
    }

    #[test]
    fn inverts_within_tolerance() {
        let f = cubic();
        for t in [1.0, 123.0, 500.0, 999.0] {
            let v = f.value(t).unwrap();
            let back = f.inverse(v, InverseOptions::default().with_tolerance(1e-10)).unwrap();
            assert!((back - t).abs() < 1e-6, "{t} -> {v} -> {back}");
        }
    }

    #[test]
    fn target_outside_range_is_out_of_domain() {
        let f = cubic();
        let too_big = f.value(1000.0).unwrap() + 1.0;
        let err = f.inverse(too_big, InverseOptions::default()).unwrap_err();
        assert!(matches!(err, CurveError::OutOfDomain { .. }));

        let too_small = -1.0;
        let err = f.inverse(too_small, InverseOptions::default()).unwrap_err();
        assert!(matches!(err, CurveError::OutOfDomain { .. }));
    }

    #[test]
    fn falls_back_to_bracketing_from_a_bad_start() {
        // Flat start: zero slope at t = 0 stops Halley immediately.
        let f = curve(vec![Segment::new(0.0, 10.0, vec![1.0, 0.0, 0.0], None).unwrap()]);
        let t = f
            .inverse(25.0, InverseOptions::default().with_start_guess(0.0))
            .unwrap();
        assert!((t - 5.0).abs() < 1e-6);
    }

    #[test]
    fn start_guess_selects_branch() {
        // (t - 20)^2 on [0, 100]: value 100 at t = 10 and t = 30.
        let f = curve(vec![
            Segment::new(0.0, 100.0, vec![1.0, -40.0, 400.0], None).unwrap(),
        ]);
        assert!(f.is_ambiguous(100.0));
        let low = f
            .inverse(100.0, InverseOptions::default().with_start_guess(5.0))
            .unwrap();
        let high = f
            .inverse(100.0, InverseOptions::default().with_start_guess(40.0))
            .unwrap();
        assert!((low - 10.0).abs() < 1e-6);
        assert!((high - 30.0).abs() < 1e-6);
    }

    #[test]
    fn piecewise_curve_inverts_across_segments() {
        let f = curve(vec![
            Segment::new(0.0, 10.0, vec![1.0, 0.0], None).unwrap(),
            Segment::new(10.0, 20.0, vec![2.0, -10.0], None).unwrap(),
        ]);
        let t = f.inverse(25.0, InverseOptions::default()).unwrap();
        assert!((t - 17.5).abs() < 1e-6);
        let t = f.inverse(3.0, InverseOptions::default()).unwrap();
        assert!((t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_non_finite_target() {
        let err = cubic()
            .inverse(f64::NAN, InverseOptions::default())
            .unwrap_err();
        assert!(matches!(err, CurveError::NonFinite { .. }));
    }
}
