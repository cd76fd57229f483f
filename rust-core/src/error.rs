//! Error types for winding analysis

use thiserror::Error;

/// Result type for winding operations
pub type WindingResult<T> = Result<T, WindingError>;

/// Errors raised while setting up or running a winding analysis
///
/// Every variant is an input-validation failure detected synchronously at the
/// call that violated its precondition. Nothing here is transient or retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindingError {
    #[error("Invalid input: sample sequences must not be empty")]
    EmptySignal,

    #[error("Invalid input: length mismatch (x has {x_len} samples, y has {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Invalid input: winding domain [{min_winding}, {max_winding}] requires min <= max")]
    InvalidDomain { min_winding: f64, max_winding: f64 },

    #[error("Invalid input: sweep needs at least 2 samples (got {0})")]
    TooFewSamples(usize),
}

impl WindingError {
    /// All winding errors belong to the invalid-input class
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WindingError::EmptySignal
                | WindingError::LengthMismatch { .. }
                | WindingError::InvalidDomain { .. }
                | WindingError::TooFewSamples(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WindingError::LengthMismatch { x_len: 3, y_len: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid input: length mismatch (x has 3 samples, y has 4)"
        );

        let err = WindingError::TooFewSamples(1);
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_invalid_input_class() {
        assert!(WindingError::EmptySignal.is_invalid_input());
        assert!(WindingError::InvalidDomain { min_winding: 1.0, max_winding: 0.0 }.is_invalid_input());
    }
}
