//! Error types for the corpora client.

use thiserror::Error;

/// Result type alias using corpora's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dataset API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Request payload failed local validation; no request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Target resource absent (404-class response).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication failed (401 response).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (403 response).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Non-success API response not covered by a more specific variant.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
