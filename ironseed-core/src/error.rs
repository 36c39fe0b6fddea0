//! Error types for IronSeed

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the seeding run can hit.
///
/// The binary does not distinguish between variants: any of them aborts the
/// run with exit status 1.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service-account key missing or malformed
    #[error("Credential error ({}): {message}", .path.display())]
    Credential { path: PathBuf, message: String },

    /// Token exchange failed or the key could not sign
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Transport-level failure talking to a remote endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered but refused the write
    #[error("Insert rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Fixture file could not be used
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Collection name is not usable as a path segment
    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),

    /// JSON encode/decode failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for SeedError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SeedError::Auth(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SeedError>;
