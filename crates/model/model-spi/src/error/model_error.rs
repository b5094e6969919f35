//! Model error types
//!
//! Defines the standardized error type for fitting and querying models.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while fitting or querying a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Requested observation range is malformed
    #[error("Invalid prediction range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    /// Invalid time series data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = ModelError::InsufficientData {
            required: 10,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 10 points, got 5"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = ModelError::InvalidParameter {
            name: "alpha".to_string(),
            reason: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'alpha': must be between 0 and 1"
        );
    }

    #[test]
    fn test_not_fitted_equality() {
        assert_eq!(ModelError::NotFitted, ModelError::NotFitted);
        assert_ne!(
            ModelError::NotFitted,
            ModelError::InvalidData("x".to_string())
        );
    }

    #[test]
    fn test_invalid_range_display() {
        let error = ModelError::InvalidRange { start: 12, end: 3 };
        assert_eq!(
            error.to_string(),
            "Invalid prediction range: start 12 is after end 3"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ModelError::NotFitted);
    }
}
