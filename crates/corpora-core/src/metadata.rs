//! Metadata field domain types.
//!
//! A metadata field is a named, typed attribute defined per dataset and
//! attached to documents. Built-in fields are server-provided and toggled
//! per dataset, distinct from user-defined fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

// =============================================================================
// FIELD TYPES
// =============================================================================

/// A metadata field definition.
///
/// The field type is an open set of labels; the server currently accepts
/// `string`, `number`, and `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataField {
    /// Metadata field ID.
    pub id: String,
    /// Field type label.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Field name.
    pub name: String,
    /// Number of documents using this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_count: Option<u64>,
}

/// A metadata value attached to a document.
///
/// Values are always carried as text on the wire regardless of field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataValue {
    /// Metadata field ID.
    pub id: String,
    /// Metadata value.
    pub value: String,
    /// Field name.
    pub name: String,
}

/// Metadata values for one document.
///
/// `metadata_list` order is preserved and meaningful: values are applied
/// per-field in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document ID.
    pub document_id: String,
    /// Metadata values.
    pub metadata_list: Vec<MetadataValue>,
}

/// Response of the metadata field listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataListResponse {
    /// Metadata fields defined for the dataset.
    pub doc_metadata: Vec<MetadataField>,
    /// Whether built-in fields are enabled for the dataset.
    pub built_in_field_enabled: bool,
}

// =============================================================================
// BUILT-IN FIELD ACTION
// =============================================================================

/// Action applied to a dataset's built-in metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltInFieldAction {
    Enable,
    Disable,
}

impl std::fmt::Display for BuiltInFieldAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enable => write!(f, "enable"),
            Self::Disable => write!(f, "disable"),
        }
    }
}

impl std::str::FromStr for BuiltInFieldAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            _ => Err(Error::InvalidInput(format!(
                "invalid built-in field action: {} (expected 'enable' or 'disable')",
                s
            ))),
        }
    }
}

// =============================================================================
// DOCUMENT METADATA INPUT
// =============================================================================

/// Caller-supplied document metadata: either an already-typed value or a
/// raw JSON mapping normalized at the client boundary.
#[derive(Debug, Clone)]
pub enum DocumentMetadataInput {
    Typed(DocumentMetadata),
    Raw(JsonValue),
}

impl DocumentMetadataInput {
    /// Normalize into a typed [`DocumentMetadata`].
    ///
    /// Raw mappings must carry `document_id` and `metadata_list` in the
    /// documented shape; anything else is rejected as invalid input.
    pub fn into_typed(self) -> Result<DocumentMetadata> {
        match self {
            Self::Typed(doc) => Ok(doc),
            Self::Raw(value) => serde_json::from_value(value)
                .map_err(|e| Error::InvalidInput(format!("invalid document metadata: {}", e))),
        }
    }
}

impl From<DocumentMetadata> for DocumentMetadataInput {
    fn from(doc: DocumentMetadata) -> Self {
        Self::Typed(doc)
    }
}

impl From<JsonValue> for DocumentMetadataInput {
    fn from(value: JsonValue) -> Self {
        Self::Raw(value)
    }
}
