//! Error types for table loading and column access

use crate::ColumnKind;
use thiserror::Error;

/// Error type for table operations
#[derive(Error, Debug)]
pub enum Error {
    /// A column referenced by name does not exist in the table
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// A column exists but has the wrong kind for the requested access
    #[error("column '{column}' is {got}, expected a {expected} column")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        got: ColumnKind,
    },

    /// The table has no numeric columns to correlate
    #[error("no numeric columns available for correlation")]
    NoNumericColumns,

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error propagated from a core statistical routine
    #[error(transparent)]
    Core(#[from] trend_core::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
