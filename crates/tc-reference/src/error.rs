//! Facade and registry errors.

use tc_core::{TcError, TemperatureUnit, VoltageUnit};
use tc_curve::CurveError;
use thiserror::Error;

pub type ThermocoupleResult<T> = Result<T, ThermocoupleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermocoupleError {
    /// The facade only wraps functions in degrees Celsius and millivolts.
    #[error("Reference function must be in °C and mV, got {temperature} and {voltage}")]
    UnsupportedUnits {
        temperature: TemperatureUnit,
        voltage: VoltageUnit,
    },

    #[error("Unknown thermocouple type '{id}'")]
    UnknownType { id: String },

    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl From<ThermocoupleError> for TcError {
    fn from(e: ThermocoupleError) -> Self {
        match e {
            ThermocoupleError::UnsupportedUnits { .. } => TcError::InvalidArg {
                what: "reference function units",
            },
            ThermocoupleError::UnknownType { .. } => TcError::InvalidArg {
                what: "thermocouple type",
            },
            ThermocoupleError::Curve(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_names_the_id() {
        let err = ThermocoupleError::UnknownType { id: "ZZ".into() };
        assert_eq!(err.to_string(), "Unknown thermocouple type 'ZZ'");
    }

    #[test]
    fn curve_errors_pass_through() {
        let err: ThermocoupleError = CurveError::UnsupportedDerivative { order: 4 }.into();
        assert!(err.to_string().contains("Derivative order 4"));
        let tc: TcError = err.into();
        assert!(matches!(tc, TcError::InvalidArg { .. }));
    }
}
