//! Tag and metadata client facade.
//!
//! One method per remote operation; each is a single request/response round
//! trip: validate the request schema, serialize it, call the transport,
//! parse the JSON response into a typed result. The facade holds no state
//! besides the transport and performs no retries, batching, or caching.

pub mod types;

use serde_json::Value as JsonValue;
use tracing::debug;

use corpora_core::{
    BuiltInFieldAction, DatasetTransport, DocumentMetadataInput, Error, KnowledgeTag,
    MetadataField, MetadataListResponse, Result,
};

use types::{
    BindTagsRequest, CreateMetadataRequest, CreateTagRequest, DeleteTagRequest,
    UnbindTagRequest, UpdateDocumentMetadataRequest, UpdateMetadataRequest, UpdateTagRequest,
};

// Collection-level tag endpoints; dataset-scoped paths are formatted inline.
const TAGS_PATH: &str = "/v1/datasets/tags";
const TAG_BINDING_PATH: &str = "/v1/datasets/tags/binding";
const TAG_UNBINDING_PATH: &str = "/v1/datasets/tags/unbinding";

/// Client for tag and metadata management operations.
///
/// Generic over the transport so tests can inject a scripted one; safe to
/// share across tasks whenever `T` is.
pub struct TagsClient<T> {
    transport: T,
}

impl<T: DatasetTransport> TagsClient<T> {
    /// Create a new client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // KNOWLEDGE TAG OPERATIONS
    // =========================================================================

    /// Create a new knowledge tag.
    ///
    /// The name is limited to 50 characters; longer names fail locally
    /// without a request being sent.
    pub async fn create(&self, name: &str) -> Result<KnowledgeTag> {
        let request = CreateTagRequest::new(name)?;
        debug!(name = %request.name, "creating knowledge tag");
        let response = self
            .transport
            .post(TAGS_PATH, Some(serde_json::to_value(&request)?))
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// List all knowledge tags.
    pub async fn list(&self) -> Result<Vec<KnowledgeTag>> {
        let response = self.transport.get(TAGS_PATH).await?;
        tag_list(response)
    }

    /// Rename a knowledge tag.
    pub async fn update(&self, tag_id: &str, name: &str) -> Result<KnowledgeTag> {
        let request = UpdateTagRequest::new(tag_id, name)?;
        let response = self
            .transport
            .patch(TAGS_PATH, serde_json::to_value(&request)?)
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Delete a knowledge tag.
    ///
    /// Returns the server's opaque success mapping.
    pub async fn delete(&self, tag_id: &str) -> Result<JsonValue> {
        let request = DeleteTagRequest {
            tag_id: tag_id.to_string(),
        };
        self.transport
            .delete(TAGS_PATH, Some(serde_json::to_value(&request)?))
            .await
    }

    /// Bind a dataset to one or more tags.
    pub async fn bind_to_dataset(
        &self,
        dataset_id: &str,
        tag_ids: Vec<String>,
    ) -> Result<JsonValue> {
        let request = BindTagsRequest::new(dataset_id, tag_ids)?;
        self.transport
            .post(TAG_BINDING_PATH, Some(serde_json::to_value(&request)?))
            .await
    }

    /// Unbind a dataset from a tag.
    pub async fn unbind_from_dataset(&self, dataset_id: &str, tag_id: &str) -> Result<JsonValue> {
        let request = UnbindTagRequest {
            tag_id: tag_id.to_string(),
            target_id: dataset_id.to_string(),
        };
        self.transport
            .post(TAG_UNBINDING_PATH, Some(serde_json::to_value(&request)?))
            .await
    }

    /// Get the tags bound to a dataset.
    pub async fn get_dataset_tags(&self, dataset_id: &str) -> Result<Vec<KnowledgeTag>> {
        let path = format!("/v1/datasets/{}/tags", dataset_id);
        let response = self.transport.get(&path).await?;
        tag_list(response)
    }

    // =========================================================================
    // METADATA OPERATIONS
    // =========================================================================

    /// Create a metadata field for a dataset.
    ///
    /// `field_type` is one of the server's field-type labels (`string`,
    /// `number`, `time`).
    pub async fn create_metadata(
        &self,
        dataset_id: &str,
        field_type: &str,
        name: &str,
    ) -> Result<MetadataField> {
        let request = CreateMetadataRequest {
            field_type: field_type.to_string(),
            name: name.to_string(),
        };
        let path = format!("/v1/datasets/{}/metadata", dataset_id);
        let response = self
            .transport
            .post(&path, Some(serde_json::to_value(&request)?))
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Rename a metadata field.
    pub async fn update_metadata(
        &self,
        dataset_id: &str,
        metadata_id: &str,
        name: &str,
    ) -> Result<MetadataField> {
        let request = UpdateMetadataRequest {
            name: name.to_string(),
        };
        let path = format!("/v1/datasets/{}/metadata/{}", dataset_id, metadata_id);
        let response = self
            .transport
            .patch(&path, serde_json::to_value(&request)?)
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Delete a metadata field.
    pub async fn delete_metadata(&self, dataset_id: &str, metadata_id: &str) -> Result<JsonValue> {
        let path = format!("/v1/datasets/{}/metadata/{}", dataset_id, metadata_id);
        self.transport.delete(&path, None).await
    }

    /// Enable or disable a dataset's built-in metadata fields.
    ///
    /// String inputs parse via [`BuiltInFieldAction`]'s `FromStr`; anything
    /// outside `enable`/`disable` fails there, before any request is made.
    pub async fn toggle_built_in_metadata(
        &self,
        dataset_id: &str,
        action: BuiltInFieldAction,
    ) -> Result<JsonValue> {
        let path = format!("/v1/datasets/{}/metadata/built-in/{}", dataset_id, action);
        self.transport.post(&path, None).await
    }

    /// Update metadata values on documents.
    ///
    /// Accepts a mixed list of typed [`DocumentMetadata`] values and raw
    /// mappings; raw entries are normalized before one unified payload is
    /// sent. The server accepts or rejects the whole batch.
    ///
    /// [`DocumentMetadata`]: corpora_core::DocumentMetadata
    pub async fn update_document_metadata(
        &self,
        dataset_id: &str,
        operation_data: Vec<DocumentMetadataInput>,
    ) -> Result<JsonValue> {
        let request = UpdateDocumentMetadataRequest::new(operation_data)?;
        debug!(
            documents = request.operation_data.len(),
            "updating document metadata"
        );
        let path = format!("/v1/datasets/{}/documents/metadata", dataset_id);
        self.transport
            .post(&path, Some(serde_json::to_value(&request)?))
            .await
    }

    /// List the metadata fields defined for a dataset.
    pub async fn list_metadata(&self, dataset_id: &str) -> Result<MetadataListResponse> {
        let path = format!("/v1/datasets/{}/metadata", dataset_id);
        let response = self.transport.get(&path).await?;
        serde_json::from_value(response).map_err(Into::into)
    }
}

/// Normalize the tag listing envelope.
///
/// The server answers with either a bare array or `{"data": [...]}`
/// depending on deployment; both shapes must produce identical results, and
/// an object without `data` yields an empty list.
fn tag_list(response: JsonValue) -> Result<Vec<KnowledgeTag>> {
    match response {
        JsonValue::Array(_) => serde_json::from_value(response).map_err(Into::into),
        JsonValue::Object(mut map) => match map.remove("data") {
            Some(data) => serde_json::from_value(data).map_err(Into::into),
            None => Ok(Vec::new()),
        },
        other => Err(Error::Serialization(format!(
            "unexpected tag list response shape: {}",
            other
        ))),
    }
}
