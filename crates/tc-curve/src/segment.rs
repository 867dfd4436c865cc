//! One piece of a piecewise reference function.

use crate::error::{CurveError, CurveResult};
use crate::polynomial::{derivative_coefficients, horner};

/// Highest derivative order the evaluator supports.
pub const MAX_DERIVATIVE: usize = 3;

/// Additive bump term `amplitude * exp(decay * (t - center)^2)`.
///
/// Type K carries one of these to model the anomaly near 127 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub amplitude: f64,
    pub decay: f64,
    pub center: f64,
}

impl Gaussian {
    pub const fn new(amplitude: f64, decay: f64, center: f64) -> Self {
        Self {
            amplitude,
            decay,
            center,
        }
    }

    /// Value or derivative of the bump at `t`; `None` past third order.
    pub fn derivative(&self, t: f64, order: usize) -> Option<f64> {
        let a1 = self.decay;
        let dt = t - self.center;
        let g = self.amplitude * (a1 * dt * dt).exp();
        match order {
            0 => Some(g),
            1 => Some(2.0 * a1 * g * dt),
            2 => Some(2.0 * a1 * g * (2.0 * a1 * dt * dt + 1.0)),
            3 => Some(4.0 * a1 * a1 * g * dt * (2.0 * a1 * dt * dt + 3.0)),
            _ => None,
        }
    }

    fn is_finite(&self) -> bool {
        self.amplitude.is_finite() && self.decay.is_finite() && self.center.is_finite()
    }
}

/// Polynomial (plus optional Gaussian) valid over `[min_temp, max_temp]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    min_temp: f64,
    max_temp: f64,
    coefficients: Vec<f64>,
    gaussian: Option<Gaussian>,
    /// Derivative coefficient sets for orders `0..=MAX_DERIVATIVE`.
    derivatives: [Vec<f64>; MAX_DERIVATIVE + 1],
}

impl Segment {
    /// Build a segment from coefficients ordered highest power first.
    pub fn new(
        min_temp: f64,
        max_temp: f64,
        coefficients: impl Into<Vec<f64>>,
        gaussian: Option<Gaussian>,
    ) -> CurveResult<Self> {
        let coefficients = coefficients.into();

        if !min_temp.is_finite() || !max_temp.is_finite() {
            return Err(CurveError::InvalidTable {
                what: format!("non-finite segment limits {min_temp} to {max_temp}"),
            });
        }
        if min_temp > max_temp {
            return Err(CurveError::InvalidTable {
                what: format!(
                    "temperature limits must be in ascending order ({min_temp} > {max_temp})"
                ),
            });
        }
        if coefficients.is_empty() {
            return Err(CurveError::InvalidTable {
                what: "segment has no polynomial coefficients".to_string(),
            });
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(CurveError::InvalidTable {
                what: format!("non-finite coefficient in segment {min_temp} to {max_temp}"),
            });
        }
        if gaussian.is_some_and(|g| !g.is_finite()) {
            return Err(CurveError::InvalidTable {
                what: format!("non-finite gaussian term in segment {min_temp} to {max_temp}"),
            });
        }

        let derivatives = std::array::from_fn(|order| derivative_coefficients(&coefficients, order));

        Ok(Self {
            min_temp,
            max_temp,
            coefficients,
            gaussian,
            derivatives,
        })
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    /// Polynomial coefficients, highest power first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn gaussian(&self) -> Option<&Gaussian> {
        self.gaussian.as_ref()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn contains(&self, t: f64) -> bool {
        (self.min_temp..=self.max_temp).contains(&t)
    }

    /// Evaluate this segment's formula at `t`, ignoring its nominal limits.
    pub fn value(&self, t: f64, order: usize) -> CurveResult<f64> {
        let poly = self
            .derivatives
            .get(order)
            .ok_or(CurveError::UnsupportedDerivative { order })?;
        let mut v = horner(poly, t);
        if let Some(g) = &self.gaussian {
            v += g
                .derivative(t, order)
                .ok_or(CurveError::UnsupportedDerivative { order })?;
        }
        Ok(v)
    }

    /// Same segment with its output multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> CurveResult<Self> {
        let coefficients: Vec<f64> = self.coefficients.iter().map(|c| c * factor).collect();
        let gaussian = self
            .gaussian
            .map(|g| Gaussian::new(g.amplitude * factor, g.decay, g.center));
        Self::new(self.min_temp, self.max_temp, coefficients, gaussian)
    }
}
