//! Error types for the plan generator library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all reelplan operations.
#[derive(Error, Debug)]
pub enum ReelplanError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ReelplanError {
        ReelplanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ReelplanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller's input rather than the
    /// environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ReelplanError::InvalidInput { .. } | ReelplanError::Serialization { .. }
        )
    }
}

/// Result type alias for reelplan operations
pub type Result<T> = std::result::Result<T, ReelplanError>;
