//! Error types for the exp-smoothing library.

use thiserror::Error;

/// Result type alias for smoothing operations.
pub type Result<T> = std::result::Result<T, SmoothingError>;

/// Errors that can occur during smoothing or scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Length mismatch between two sequences.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
