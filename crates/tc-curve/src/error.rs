//! Reference-function errors.

use tc_core::{TcError, TemperatureUnit};
use thiserror::Error;

/// Result type for reference-function operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised while building, evaluating or inverting a piecewise function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Malformed coefficient table (ranges out of order, gaps, empty).
    #[error("Invalid table: {what}")]
    InvalidTable { what: String },

    /// Inputs outside the function's domain under the "raise" policy.
    #[error("Temperatures ({unit}) under or over range: under={under:?}, over={over:?}")]
    OutOfRange {
        under: Vec<f64>,
        over: Vec<f64>,
        unit: TemperatureUnit,
    },

    /// Derivative order above the supported maximum.
    #[error("Derivative order {order} not supported (maximum is 3)")]
    UnsupportedDerivative { order: usize },

    /// Inverse target not reachable inside the domain.
    #[error("Value {target} not achievable within the range {min} to {max}")]
    OutOfDomain { target: f64, min: f64, max: f64 },

    /// Root finding stopped without meeting the residual tolerance.
    #[error("Did not converge within tolerance for target {target} (residual {residual})")]
    Convergence { target: f64, residual: f64 },

    /// Unrecognized out-of-range policy name.
    #[error("Unknown out-of-range policy '{text}' (expected raise, nan or extrapolate)")]
    UnknownPolicy { text: String },

    /// Non-finite numeric input.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<TcError> for CurveError {
    fn from(err: TcError) -> Self {
        match err {
            TcError::NonFinite { what, value } => CurveError::NonFinite { what, value },
            other => CurveError::InvalidTable {
                what: other.to_string(),
            },
        }
    }
}

impl From<CurveError> for TcError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidTable { .. } => TcError::Invariant { what: "table" },
            CurveError::OutOfRange { .. } => TcError::InvalidArg {
                what: "temperature out of range",
            },
            CurveError::UnsupportedDerivative { .. } => TcError::InvalidArg {
                what: "derivative order",
            },
            CurveError::OutOfDomain { .. } => TcError::InvalidArg {
                what: "inverse target",
            },
            CurveError::Convergence { .. } => TcError::Invariant {
                what: "convergence",
            },
            CurveError::UnknownPolicy { .. } => TcError::InvalidArg {
                what: "out-of-range policy",
            },
            CurveError::NonFinite { what, value } => TcError::NonFinite { what, value },
        }
    }
}
