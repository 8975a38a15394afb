//! Error types for the Ferâiz engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// A fraction was constructed with a zero denominator
    #[error("Zero denominator in fraction")]
    ZeroDenominator,

    /// Division by the zero fraction
    #[error("Division by zero")]
    DivisionByZero,

    /// An exact intermediate value left the 64-bit range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Heir identifier not part of the registry
    #[error("Unknown heir: {0}")]
    UnknownHeir(String),

    /// Malformed input from a front end
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Heir count outside the accepted input range
    #[error("Count for '{heir}' is {count}, maximum is {max}")]
    CountTooLarge { heir: String, count: u64, max: u32 },

    /// Husband and wife were both given as present
    #[error("A husband and a wife cannot both be heirs of the same deceased")]
    SpouseConflict,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error (reading input)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EngineError {
    /// Whether this error is an arithmetic failure inside a calculation.
    ///
    /// These indicate a defect in rule logic and abort the whole calculation.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            EngineError::ZeroDenominator | EngineError::DivisionByZero | EngineError::Overflow(_)
        )
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::UnknownHeir("cousin".to_string());
        assert_eq!(err.to_string(), "Unknown heir: cousin");
    }

    #[test]
    fn test_count_too_large_display() {
        let err = EngineError::CountTooLarge {
            heir: "son".to_string(),
            count: 20_000,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "Count for 'son' is 20000, maximum is 10000");
    }

    #[test]
    fn test_arithmetic_classification() {
        assert!(EngineError::DivisionByZero.is_arithmetic());
        assert!(EngineError::ZeroDenominator.is_arithmetic());
        assert!(!EngineError::SpouseConflict.is_arithmetic());
        assert!(!EngineError::UnknownHeir("x".to_string()).is_arithmetic());
    }
}
