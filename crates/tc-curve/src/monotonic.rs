//! Slope-sign analysis used to flag ambiguous inverse lookups.
//!
//! Some published curves are not monotonic over their whole domain (type B
//! dips below zero just above 0 °C). Inverse lookups whose target is reached
//! on more than one branch cannot be resolved without a start guess.

use crate::error::CurveResult;
use crate::function::PiecewiseFunction;
use crate::policy::{EvalOptions, OutOfRange};

const SAMPLES_PER_SEGMENT: usize = 128;
const REFINE_ITERATIONS: usize = 60;

impl PiecewiseFunction {
    /// Temperatures where the slope changes sign, ascending.
    pub fn turning_points(&self) -> &[f64] {
        self.cached_turning_points()
    }

    pub fn is_monotonic(&self) -> bool {
        self.turning_points().is_empty()
    }

    /// Number of monotonic branches whose value range contains `value`.
    pub fn branch_count(&self, value: f64) -> usize {
        let mut breaks = Vec::with_capacity(self.turning_points().len() + 2);
        breaks.push(self.min_temp());
        breaks.extend_from_slice(self.turning_points());
        breaks.push(self.max_temp());

        let nan = EvalOptions::default().with_out_of_range(OutOfRange::Nan);
        breaks
            .windows(2)
            .filter(|w| {
                let (Ok(a), Ok(b)) = (self.evaluate(w[0], nan), self.evaluate(w[1], nan)) else {
                    return false;
                };
                a.min(b) <= value && value <= a.max(b)
            })
            .count()
    }

    /// True when `value` is reached on more than one branch of the curve.
    pub fn is_ambiguous(&self, value: f64) -> bool {
        self.branch_count(value) > 1
    }

    pub(crate) fn find_turning_points(&self) -> CurveResult<Vec<f64>> {
        let mut points = Vec::new();
        // Last sample with a nonzero slope, carried across segment boundaries.
        let mut last: Option<(f64, f64)> = None;

        for seg in self.segments() {
            let (lo, hi) = (seg.min_temp(), seg.max_temp());
            let mut prev_in_segment: Option<(f64, f64)> = None;

            for i in 0..=SAMPLES_PER_SEGMENT {
                let t = lo + (hi - lo) * i as f64 / SAMPLES_PER_SEGMENT as f64;
                let slope = seg.value(t, 1)?;
                if slope == 0.0 {
                    continue;
                }

                if let Some((t_prev, s_prev)) = last {
                    if s_prev.signum() != slope.signum() {
                        let root = match prev_in_segment {
                            Some((a, _)) if a == t_prev => {
                                refine(|x| seg.value(x, 1), t_prev, t, s_prev)?
                            }
                            // Slope flips across a segment boundary.
                            _ => lo,
                        };
                        points.push(root);
                    }
                }

                last = Some((t, slope));
                prev_in_segment = Some((t, slope));
            }
        }

        points.dedup();
        Ok(points)
    }
}

/// Bisect a slope sign change inside `[a, b]`.
fn refine<F>(slope: F, mut a: f64, mut b: f64, slope_a: f64) -> CurveResult<f64>
where
    F: Fn(f64) -> CurveResult<f64>,
{
    for _ in 0..REFINE_ITERATIONS {
        let mid = 0.5 * (a + b);
        let s = slope(mid)?;
        if s == 0.0 {
            return Ok(mid);
        }
        if s.signum() == slope_a.signum() {
            a = mid;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}
