//! reqwest-backed implementation of [`DatasetTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use corpora_core::{DatasetTransport, Error, Result};

/// Default dataset API endpoint (self-hosted).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for unauthenticated endpoints).
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Skip TLS verification (for self-signed certs in local environments).
    pub skip_tls_verify: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            skip_tls_verify: false,
        }
    }
}

impl HttpConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CORPORA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: std::env::var("CORPORA_API_KEY").ok(),
            timeout_seconds: std::env::var("CORPORA_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            skip_tls_verify: std::env::var("CORPORA_SKIP_TLS_VERIFY")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }
}

/// HTTP transport over the dataset API.
///
/// Holds a pooled [`reqwest::Client`]; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut client_builder =
            Client::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if config.skip_tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing dataset API transport: url={}, auth={}",
            config.base_url,
            config.api_key.is_some()
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(HttpConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a request with authentication if configured.
    fn build_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req
    }

    /// Send a request and map the response into parsed JSON or a typed error.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
    ) -> Result<JsonValue> {
        debug!(method = %method, path = path, "dataset API request");

        let mut req = self.build_request(method, path);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            // Some mutation endpoints return an empty body on success.
            if text.trim().is_empty() {
                return Ok(JsonValue::Object(serde_json::Map::new()));
            }
            return serde_json::from_str(&text).map_err(Into::into);
        }

        warn!(
            status = %status,
            path = path,
            body = %text,
            "dataset API returned error status"
        );

        Err(status_error(status, &text))
    }
}

/// Map a non-success status and body to a typed error.
///
/// The message is taken from the server error envelope's `message` field
/// when the body parses as JSON, otherwise the raw body text is used.
fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<JsonValue>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::InvalidInput(message),
        StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
        StatusCode::FORBIDDEN => Error::Forbidden(message),
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl DatasetTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<JsonValue> {
        self.execute(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue> {
        self.execute(Method::POST, path, body).await
    }

    async fn patch(&self, path: &str, body: JsonValue) -> Result<JsonValue> {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue> {
        self.execute(Method::DELETE, path, body).await
    }
}
