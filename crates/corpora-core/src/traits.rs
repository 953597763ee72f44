//! Transport trait for the dataset API.
//!
//! The client facade is parameterized over this seam so callers can supply
//! their own HTTP stack (or a scripted transport in tests). Implementations
//! own authentication, connection pooling, and TLS; they return parsed JSON
//! on success and map non-success statuses to typed errors:
//!
//! - 404 → [`Error::NotFound`]
//! - 400/422 → [`Error::InvalidInput`]
//! - 401 → [`Error::Unauthorized`]
//! - 403 → [`Error::Forbidden`]
//! - other non-2xx → [`Error::Api`]
//!
//! [`Error::NotFound`]: crate::Error::NotFound
//! [`Error::InvalidInput`]: crate::Error::InvalidInput
//! [`Error::Unauthorized`]: crate::Error::Unauthorized
//! [`Error::Forbidden`]: crate::Error::Forbidden
//! [`Error::Api`]: crate::Error::Api

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;

/// HTTP transport for dataset API calls.
///
/// Paths are relative to the transport's configured base URL and always
/// start with `/`. Bodies, when present, are JSON.
#[async_trait]
pub trait DatasetTransport: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, path: &str) -> Result<JsonValue>;

    /// Perform a POST request with an optional JSON body.
    async fn post(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue>;

    /// Perform a PATCH request with a JSON body.
    async fn patch(&self, path: &str, body: JsonValue) -> Result<JsonValue>;

    /// Perform a DELETE request with an optional JSON body.
    async fn delete(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue>;
}
