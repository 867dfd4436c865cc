//! Out-of-range handling and evaluation options.

use core::fmt;
use core::str::FromStr;

use crate::error::CurveError;

/// What to do with temperatures outside the function's domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutOfRange {
    /// Fail with [`CurveError::OutOfRange`].
    #[default]
    Raise,
    /// Return NaN for offending inputs.
    Nan,
    /// Evaluate the nearest segment beyond its limits. Not trustworthy; meant
    /// for root finders probing past the domain.
    Extrapolate,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raise => write!(f, "raise"),
            Self::Nan => write!(f, "nan"),
            Self::Extrapolate => write!(f, "extrapolate"),
        }
    }
}

impl FromStr for OutOfRange {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(Self::Raise),
            "nan" => Ok(Self::Nan),
            "extrapolate" => Ok(Self::Extrapolate),
            _ => Err(CurveError::UnknownPolicy {
                text: s.to_string(),
            }),
        }
    }
}

/// Options for forward evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalOptions {
    /// Derivative order, 0 for the function value itself.
    pub derivative: usize,
    pub out_of_range: OutOfRange,
}

impl EvalOptions {
    pub fn with_derivative(mut self, derivative: usize) -> Self {
        self.derivative = derivative;
        self
    }

    pub fn with_out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.out_of_range = out_of_range;
        self
    }

    pub(crate) fn extrapolated(derivative: usize) -> Self {
        Self {
            derivative,
            out_of_range: OutOfRange::Extrapolate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("raise".parse::<OutOfRange>().unwrap(), OutOfRange::Raise);
        assert_eq!("NaN".parse::<OutOfRange>().unwrap(), OutOfRange::Nan);
        assert_eq!(
            " extrapolate".parse::<OutOfRange>().unwrap(),
            OutOfRange::Extrapolate
        );
        let err = "clamp".parse::<OutOfRange>().unwrap_err();
        assert!(matches!(err, CurveError::UnknownPolicy { .. }));
    }

    #[test]
    fn display_round_trips() {
        for p in [OutOfRange::Raise, OutOfRange::Nan, OutOfRange::Extrapolate] {
            assert_eq!(p.to_string().parse::<OutOfRange>().unwrap(), p);
        }
    }

    #[test]
    fn default_options_raise_on_value() {
        let opts = EvalOptions::default();
        assert_eq!(opts.derivative, 0);
        assert_eq!(opts.out_of_range, OutOfRange::Raise);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&OutOfRange::Extrapolate).unwrap();
        assert_eq!(json, "\"extrapolate\"");
    }
}
