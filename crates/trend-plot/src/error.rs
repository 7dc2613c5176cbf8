//! Errors that can occur during figure generation

use thiserror::Error;

/// Error type for the plot generators
#[derive(Error, Debug)]
pub enum PlotError {
    /// A required column is missing or mis-typed
    #[error(transparent)]
    Table(#[from] trend_table::Error),

    /// The column holds no finite values to draw
    #[error("no finite values in column '{0}'")]
    EmptyColumn(String),

    /// Failure in the drawing backend while rendering or saving
    #[error("failed to render figure: {0}")]
    Render(String),
}

impl PlotError {
    /// Collapse a backend error into its message. The plotters error
    /// types are generic over the backend, so they are carried as text.
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias using our PlotError type
pub type Result<T> = std::result::Result<T, PlotError>;
