// ============================================================================
// Numeric Errors
// Error types for parsing operators and expressions
// ============================================================================

use std::fmt;

/// Errors that can occur while turning text into an arithmetic operation.
///
/// The arithmetic functions themselves are infallible; only parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is empty, malformed, or an operand is not a valid i32
    InvalidInput,
    /// Operator symbol or name is not recognized
    UnknownOperator,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::UnknownOperator => {
                write!(f, "unknown operator: expected one of + - * /")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
        assert_eq!(
            NumericError::UnknownOperator.to_string(),
            "unknown operator: expected one of + - * /"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidInput, NumericError::InvalidInput);
        assert_ne!(NumericError::InvalidInput, NumericError::UnknownOperator);
    }

    #[test]
    fn test_error_is_std_error() {
        use std::error::Error;

        let err: Box<dyn Error> = Box::new(NumericError::UnknownOperator);
        assert!(err.source().is_none());
    }
}
