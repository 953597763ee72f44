//! Request bodies for the tag and metadata endpoints.
//!
//! Each mutating operation has one request type. Constructors validate the
//! fields the server enforces locally, so a bad payload fails before any
//! request is sent.

use serde::Serialize;

use corpora_core::{
    validate_tag_name, DocumentMetadata, DocumentMetadataInput, Error, Result,
};

// =============================================================================
// TAG REQUESTS
// =============================================================================

/// Request body for creating a knowledge tag.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTagRequest {
    pub name: String,
}

impl CreateTagRequest {
    /// Validate and build. The tag name is limited to 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_tag_name(&name)?;
        Ok(Self { name })
    }
}

/// Request body for renaming a knowledge tag.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTagRequest {
    pub name: String,
    pub tag_id: String,
}

impl UpdateTagRequest {
    pub fn new(tag_id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_tag_name(&name)?;
        Ok(Self {
            name,
            tag_id: tag_id.into(),
        })
    }
}

/// Request body for deleting a knowledge tag.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTagRequest {
    pub tag_id: String,
}

/// Request body for binding a dataset to tags.
#[derive(Debug, Clone, Serialize)]
pub struct BindTagsRequest {
    pub tag_ids: Vec<String>,
    pub target_id: String,
}

impl BindTagsRequest {
    /// Validate and build. At least one tag ID is required.
    pub fn new(dataset_id: impl Into<String>, tag_ids: Vec<String>) -> Result<Self> {
        if tag_ids.is_empty() {
            return Err(Error::InvalidInput(
                "at least one tag ID is required for binding".to_string(),
            ));
        }
        Ok(Self {
            tag_ids,
            target_id: dataset_id.into(),
        })
    }
}

/// Request body for unbinding a dataset from a tag.
#[derive(Debug, Clone, Serialize)]
pub struct UnbindTagRequest {
    pub tag_id: String,
    pub target_id: String,
}

// =============================================================================
// METADATA REQUESTS
// =============================================================================

/// Request body for creating a metadata field.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMetadataRequest {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
}

/// Request body for renaming a metadata field.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMetadataRequest {
    pub name: String,
}

/// Request body for updating document metadata values.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDocumentMetadataRequest {
    pub operation_data: Vec<DocumentMetadata>,
}

impl UpdateDocumentMetadataRequest {
    /// Normalize caller input into one typed payload.
    ///
    /// Raw mappings are converted to [`DocumentMetadata`] first; every entry
    /// must carry at least one metadata value.
    pub fn new(operation_data: Vec<DocumentMetadataInput>) -> Result<Self> {
        let mut converted = Vec::with_capacity(operation_data.len());
        for item in operation_data {
            let doc = item.into_typed()?;
            if doc.metadata_list.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "document {} has an empty metadata_list",
                    doc.document_id
                )));
            }
            converted.push(doc);
        }
        Ok(Self {
            operation_data: converted,
        })
    }
}
