//! End-to-end tests for the tags client over the HTTP transport.
//!
//! Each test stands up a mock server and drives a full round trip through
//! the facade: request schema → wire body → response parsing.

use corpora_client::{HttpConfig, HttpTransport, TagsClient};
use corpora_core::{BuiltInFieldAction, Error};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> TagsClient<HttpTransport> {
    let transport = HttpTransport::new(HttpConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        ..HttpConfig::default()
    })
    .expect("Failed to create transport");
    TagsClient::new(transport)
}

#[tokio::test]
async fn test_create_tag_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datasets/tags"))
        .and(body_json(json!({"name": "Research"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "t1", "name": "Research"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let tag = client.create("Research").await.unwrap();

    assert_eq!(tag.id, "t1");
    assert_eq!(tag.name, "Research");
    assert_eq!(tag.color, None);
}

#[tokio::test]
async fn test_list_tags_bare_and_enveloped_agree() {
    let bare_server = MockServer::start().await;
    let enveloped_server = MockServer::start().await;
    let tags = json!([
        {"id": "t1", "name": "a", "binding_count": 2},
        {"id": "t2", "name": "b"}
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/datasets/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&tags))
        .mount(&bare_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/datasets/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": tags})))
        .mount(&enveloped_server)
        .await;

    let from_bare = client_for(&bare_server).await.list().await.unwrap();
    let from_envelope = client_for(&enveloped_server).await.list().await.unwrap();

    assert_eq!(from_bare, from_envelope);
    assert_eq!(from_bare.len(), 2);
    assert_eq!(from_bare[0].binding_count, Some(2));
}

#[tokio::test]
async fn test_update_tag_patches_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/datasets/tags"))
        .and(body_json(json!({"name": "Archive", "tag_id": "t1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "t1", "name": "Archive"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let tag = client.update("t1", "Archive").await.unwrap();

    assert_eq!(tag.name, "Archive");
}

#[tokio::test]
async fn test_update_missing_tag_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/datasets/tags"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "tag not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.update("t9", "anything").await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_bind_and_unbind_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datasets/tags/binding"))
        .and(body_json(json!({"tag_ids": ["t1", "t2"], "target_id": "ds1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/datasets/tags/unbinding"))
        .and(body_json(json!({"tag_id": "t1", "target_id": "ds1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    client
        .bind_to_dataset("ds1", vec!["t1".to_string(), "t2".to_string()])
        .await
        .unwrap();
    client.unbind_from_dataset("ds1", "t1").await.unwrap();
}

#[tokio::test]
async fn test_metadata_field_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datasets/ds1/metadata"))
        .and(body_json(json!({"type": "string", "name": "source"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "m1", "type": "string", "name": "source"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/datasets/ds1/metadata/m1"))
        .and(body_json(json!({"name": "origin"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "m1", "type": "string", "name": "origin"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/datasets/ds1/metadata/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let field = client.create_metadata("ds1", "string", "source").await.unwrap();
    assert_eq!(field.id, "m1");

    let field = client.update_metadata("ds1", "m1", "origin").await.unwrap();
    assert_eq!(field.name, "origin");

    client.delete_metadata("ds1", "m1").await.unwrap();
}

#[tokio::test]
async fn test_toggle_built_in_metadata_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datasets/ds1/metadata/built-in/enable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    client
        .toggle_built_in_metadata("ds1", BuiltInFieldAction::Enable)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_document_metadata_wire_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datasets/ds1/documents/metadata"))
        .and(body_json(json!({
            "operation_data": [{
                "document_id": "d1",
                "metadata_list": [{"id": "m1", "value": "v1", "name": "f1"}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let raw = json!({
        "document_id": "d1",
        "metadata_list": [{"id": "m1", "value": "v1", "name": "f1"}]
    });
    client
        .update_document_metadata("ds1", vec![raw.into()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_metadata_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/datasets/ds1/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doc_metadata": [{"id": "m1", "type": "string", "name": "source"}],
            "built_in_field_enabled": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client.list_metadata("ds1").await.unwrap();

    assert_eq!(response.doc_metadata.len(), 1);
    assert_eq!(response.doc_metadata[0].field_type, "string");
    assert!(response.built_in_field_enabled);
}
