//! Error types for notion-notes
//!
//! Every failure in a sync run is fatal: errors bubble up with `?` to the
//! binary, which logs them and exits with status 1. The variants exist so the
//! log line says which stage failed and why.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for notion-notes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for notion-notes
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "NOTION_TOKEN")
        key: Option<String>,
    },

    /// Transport-level failure talking to the Notion API (DNS, TLS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The Notion API answered with a non-success status
    #[error("Notion API returned HTTP {status} ({code}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Machine-readable error code from the response body (e.g., "unauthorized")
        code: String,
        /// Human-readable message from the response body
        message: String,
    },

    /// Response body could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File-system failure while writing output
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Requested document does not exist in the source
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Build a configuration error tied to a specific key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the service rejected the credentials (401/403)
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}
