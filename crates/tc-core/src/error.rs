//! Foundation error type. The curve and reference crates map their own
//! errors into it.

use thiserror::Error;

pub type TcResult<T> = Result<T, TcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Unit label that does not name one of the supported scales.
    #[error("Unknown unit '{text}'")]
    UnknownUnit { text: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_display_names_input() {
        let err = TcError::UnknownUnit {
            text: "furlong".into(),
        };
        assert!(err.to_string().contains("furlong"));
    }
}
