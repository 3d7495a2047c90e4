//! Outlier detection error types.

use thiserror::Error;

use crate::model::Dispersion;

/// Outlier detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    #[error("Empty input: at least one sample is required")]
    EmptyInput,

    #[error("Degenerate input: {measure} is zero, scores are undefined")]
    DegenerateInput { measure: Dispersion },

    #[error("Non-finite sample at index {index}: {value}")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("Numeric overflow: {quantity} is not finite")]
    Overflow { quantity: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OutlierError {
    /// Shorthand for an [`OutlierError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True when the error reports a zero spread estimate.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

/// Result type for outlier detection operations.
pub type Result<T> = std::result::Result<T, OutlierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            OutlierError::EmptyInput.to_string(),
            "Empty input: at least one sample is required"
        );
    }

    #[test]
    fn test_degenerate_std_dev_display() {
        let error = OutlierError::DegenerateInput {
            measure: Dispersion::StandardDeviation,
        };
        assert_eq!(
            error.to_string(),
            "Degenerate input: standard deviation is zero, scores are undefined"
        );
    }

    #[test]
    fn test_degenerate_mad_display() {
        let error = OutlierError::DegenerateInput {
            measure: Dispersion::MedianAbsoluteDeviation,
        };
        assert_eq!(
            error.to_string(),
            "Degenerate input: median absolute deviation is zero, scores are undefined"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let error = OutlierError::NonFiniteSample {
            index: 3,
            value: f64::INFINITY,
        };
        assert_eq!(error.to_string(), "Non-finite sample at index 3: inf");
    }

    #[test]
    fn test_overflow_display() {
        let error = OutlierError::Overflow {
            quantity: "modified z-score".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Numeric overflow: modified z-score is not finite"
        );
        assert!(!error.is_degenerate());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = OutlierError::invalid_parameter("threshold", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter: threshold - must be positive"
        );
    }

    #[test]
    fn test_config_display() {
        let error = OutlierError::Config("missing field `threshold`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: missing field `threshold`"
        );
    }

    #[test]
    fn test_is_degenerate() {
        assert!(OutlierError::DegenerateInput {
            measure: Dispersion::InterquartileRange
        }
        .is_degenerate());
        assert!(!OutlierError::EmptyInput.is_degenerate());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(OutlierError::EmptyInput);
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlierError>();
    }
}
