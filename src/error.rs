//! Error types for a3s-cron-codec

use crate::unit::UnitKind;
use thiserror::Error;

/// Errors that can occur while encoding or decoding cron expressions
#[derive(Debug, Error)]
pub enum CodecError {
    /// A supplied or parsed value lies outside its field's domain
    #[error("Value {value} out of range for {unit}")]
    OutOfRange { unit: UnitKind, value: i32 },

    /// Structurally invalid expression or field
    #[error("Malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    /// A step filter matched no values
    #[error("Empty interval value '{expression}' for {unit}")]
    EmptyInterval { unit: UnitKind, expression: String },

    /// Encoder input did not contain exactly five fields
    #[error("Expected 5 fields, got {0}")]
    InvalidFiveFieldShape(usize),

    /// Unrecognized period label
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodecError {
    pub(crate) fn malformed(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_unit_and_value() {
        let err = CodecError::OutOfRange {
            unit: UnitKind::Minute,
            value: 60,
        };
        assert_eq!(err.to_string(), "Value 60 out of range for minute");
    }

    #[test]
    fn test_malformed_display() {
        let err = CodecError::malformed("* * *", "expected 5 fields, got 3");
        assert_eq!(
            err.to_string(),
            "Malformed expression '* * *': expected 5 fields, got 3"
        );
    }

    #[test]
    fn test_empty_interval_display() {
        let err = CodecError::EmptyInterval {
            unit: UnitKind::DayOfWeek,
            expression: "1/2".to_string(),
        };
        assert_eq!(err.to_string(), "Empty interval value '1/2' for day-of-week");
    }
}
