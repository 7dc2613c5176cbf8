//! Error types for core statistical operations

use thiserror::Error;

/// Error type for moment and correlation computations
#[derive(Error, Debug)]
pub enum Error {
    /// Insufficient data for the requested operation
    #[error("insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Error for a sample with no usable values
    pub fn empty_sample() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
