//! Conversion errors
//!
//! Only the unit-conversion path signals failure. Parsing never fails and
//! degrades to the zero-value quantity instead.

use thiserror::Error;

/// Error type for unit conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The symbol is not a unit of the requested quantity kind
    #[error("{unit} is an invalid unit for {kind}")]
    InvalidUnit {
        unit: String,
        kind: &'static str,
    },
}

impl ConversionError {
    pub fn invalid_unit(unit: impl Into<String>, kind: &'static str) -> Self {
        ConversionError::InvalidUnit {
            unit: unit.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_unit_message() {
        let err = ConversionError::invalid_unit("xyz", "mass");
        assert_eq!(err.to_string(), "xyz is an invalid unit for mass");
    }

    #[test]
    fn test_invalid_unit_fields() {
        let err = ConversionError::invalid_unit("K", "temperature");
        assert_eq!(
            err,
            ConversionError::InvalidUnit { unit: "K".to_string(), kind: "temperature" }
        );
    }
}
