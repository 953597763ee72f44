//! # corpora-client
//!
//! Typed client for the corpora dataset API's tag and metadata endpoints.
//!
//! This crate provides:
//! - The [`TagsClient`] facade, one method per remote operation
//! - Request schemas with local validation
//! - A reqwest-backed [`HttpTransport`] implementing the transport seam
//!
//! # Example
//!
//! ```rust,no_run
//! use corpora_client::{HttpConfig, HttpTransport, TagsClient};
//!
//! #[tokio::main]
//! async fn main() -> corpora_core::Result<()> {
//!     let transport = HttpTransport::new(HttpConfig {
//!         base_url: "https://datasets.example.com".to_string(),
//!         api_key: Some("key".to_string()),
//!         ..HttpConfig::default()
//!     })?;
//!     let client = TagsClient::new(transport);
//!     let tag = client.create("Research").await?;
//!     println!("created tag {}", tag.id);
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod tags;

// Scripted transport for tests
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use corpora_core::*;

pub use http::{HttpConfig, HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use tags::TagsClient;
