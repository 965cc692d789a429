//! Error types for the projection engine and its loaders

use thiserror::Error;

/// Result type alias for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised by the engine and the layers around it
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// An input outside the engine's domain (zero compounding, negative horizon, rate below -100%)
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON config or report error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A plan file row that parsed but could not be turned into parameters
    #[error("Invalid plan at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

impl ProjectionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for the engine's own error kind
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ProjectionError::InvalidParameter { .. })
    }
}
