//! Custom-attribute value bag semantics: read-modify-write over the full
//! mapping with the caller-supplied version.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taigapi::{CustomAttributeValues, Issue, TaigaClient, TaigaError, Task, UserStory};

fn client_for(server: &MockServer) -> TaigaClient {
    TaigaClient::new("test-token", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_get_attributes_fetches_the_bag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userstories/custom-attributes-values/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes_values": {"3": "high"},
            "version": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bag = UserStory::get_attributes(&client, 101)
        .await
        .expect("get_attributes failed");

    assert_eq!(bag.version, 2);
    assert_eq!(bag.value(3), Some(&json!("high")));
}

#[tokio::test]
async fn test_set_attribute_is_one_read_one_write_with_merged_bag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userstories/custom-attributes-values/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes_values": {"5": "keep-me"},
            "version": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    // The write resends the complete bag: pre-existing keys survive and
    // the caller's version is stamped on.
    Mock::given(method("PATCH"))
        .and(path("/userstories/custom-attributes-values/101"))
        .and(body_json(json!({
            "attributes_values": {"3": "x", "5": "keep-me"},
            "version": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes_values": {"3": "x", "5": "keep-me"},
            "version": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bag = UserStory::set_attribute(&client, 101, 3, json!("x"), 2)
        .await
        .expect("set_attribute failed");

    assert_eq!(bag.version, 3);
    assert_eq!(bag.value(3), Some(&json!("x")));
    assert_eq!(bag.value(5), Some(&json!("keep-me")));
}

#[tokio::test]
async fn test_set_attribute_stale_version_surfaces_validation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issues/custom-attributes-values/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes_values": {},
            "version": 4
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/issues/custom-attributes-values/31"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "_error_message": "The version doesn't match with the current one"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Issue::set_attribute(&client, 31, 3, json!("x"), 1)
        .await
        .unwrap_err();

    match err {
        TaigaError::Validation { message } => {
            assert!(message.contains("version"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_each_kind_uses_its_own_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/custom-attributes-values/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes_values": {},
            "version": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bag = Task::get_attributes(&client, 55)
        .await
        .expect("get_attributes failed");

    assert!(bag.attributes_values.is_empty());
}
