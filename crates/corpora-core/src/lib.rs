//! # corpora-core
//!
//! Core types, traits, and error handling for the corpora dataset API
//! client.
//!
//! This crate provides the domain value objects (tags, metadata fields,
//! document metadata), the [`DatasetTransport`] seam the client facade is
//! built over, and the shared [`Error`]/[`Result`] types.

pub mod error;
pub mod metadata;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use metadata::{
    BuiltInFieldAction, DocumentMetadata, DocumentMetadataInput, MetadataField, MetadataListResponse,
    MetadataValue,
};
pub use tags::{validate_tag_name, KnowledgeTag, TAG_NAME_MAX_CHARS};
pub use traits::DatasetTransport;
