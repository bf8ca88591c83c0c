//! Parse error types.

use thiserror::Error;

/// Errors that can occur while reading a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text could not be parsed.
    #[error("invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// Byte offset where the error occurred, when known.
        offset: Option<usize>,
    },

    /// No front end handles the file extension.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a new invalid source error with offset.
    pub fn invalid_source_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a new unsupported format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat(extension.into())
    }
}
