//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Query parameter '{0}' is required.")]
    MissingParameter(String),

    #[error("Query parameter '{name}' {reason}.")]
    InvalidParameter { name: String, reason: String },

    #[error("Missing required filter: must be either 'books' or 'authors'")]
    MissingFilter,

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl BookshelfError {
    /// Build an `InvalidParameter` error
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter { .. } | Self::MissingFilter
        )
    }
}

/// Errors raised while talking to OpenLibrary
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure or non-success status
    #[error("OpenLibrary unavailable at {url}: {reason}")]
    Unavailable { url: String, reason: String },

    /// Response body was not the JSON we expected
    #[error("Malformed OpenLibrary response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}
