//! Error types module
//!
//! This module provides the error taxonomy used throughout Vitrine. Every
//! formatting operation either returns a value or surfaces one of these
//! variants unchanged to the caller; there is no retry, no fallback, and no
//! partial result anywhere in the result-building path. The caller (the
//! search-result rendering pipeline) decides whether to omit the result,
//! show a placeholder, or abort the page render.

use thiserror::Error;

/// Formatting and collaborator errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// A file, metadata structure, or index field could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A thumbnail or link collaborator failed to render a reference.
    #[error("Render failed: {0}")]
    Render(String),

    /// A field is present in the index but its value does not parse.
    #[error("Invalid value '{value}' for index field '{field}'")]
    InvalidField { field: String, value: String },

    /// Transport or protocol failure from a collaborator implementation.
    #[error("Portal backend error: {0}")]
    Backend(String),
}

impl FormatError {
    /// Get the error type name for log fields and error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            FormatError::NotFound(_) => "NotFound",
            FormatError::Render(_) => "Render",
            FormatError::InvalidField { .. } => "InvalidField",
            FormatError::Backend(_) => "Backend",
        }
    }
}
