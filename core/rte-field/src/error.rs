//! Error types for the rich text field.

use thiserror::Error;

/// Field-level errors.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Posted content exceeds the column capacity minus the safety margin.
    /// Surfaced to the author as a validation message on the field.
    #[error("{attribute} is too long.")]
    TooLong {
        attribute: String,
        length: usize,
        limit: u64,
    },

    /// Editor configuration document could not be parsed.
    #[error("invalid editor config {file}: {source}")]
    InvalidConfig {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTML sanitizer failed.
    #[error("sanitizer error: {0}")]
    Sanitizer(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
