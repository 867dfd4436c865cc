//! Float helpers shared across the workspace.

use crate::error::{TcError, TcResult};

/// Floating point type used for temperatures and EMFs.
pub type Real = f64;

/// Closeness test that passes on either an absolute or a relative bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Temperatures after a chain of affine unit conversions.
    pub const TEMPERATURE: Tolerances = Tolerances::new(1e-9, 1e-12);

    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    pub fn accepts(self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.accepts(a, b)
}

/// Pass `v` through when finite; otherwise report it under `what`.
pub fn ensure_finite(v: Real, what: &'static str) -> TcResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}
