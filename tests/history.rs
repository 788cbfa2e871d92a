//! History views and comment moderation.

use serde_json::json;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taigapi::{History, TaigaClient};

fn client_for(server: &MockServer) -> TaigaClient {
    TaigaClient::new("test-token", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_get_history_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history/userstory/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "e62a1c7f-0f18-4f1b-9e2a-6b2f6a3f1a11",
                "comment": "Looks good",
                "created_at": "2026-02-01T09:30:00Z",
                "values_diff": {"status": [1, 2]}
            },
            {
                "id": "a11b2c3d-0000-4f1b-9e2a-6b2f6a3f1a22",
                "comment": "",
                "values_diff": {"subject": ["Fix bug", "Fix login bug"]}
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = History::user_story()
        .get(&client, 101)
        .await
        .expect("history get failed");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].comment.as_deref(), Some("Looks good"));
    assert!(entries[0].delete_comment_date.is_none());
}

#[tokio::test]
async fn test_delete_comment_posts_empty_body_with_entry_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/history/issue/31/delete_comment"))
        .and(query_param("id", "e62a1c7f-0f18-4f1b-9e2a-6b2f6a3f1a11"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    History::issue()
        .delete_comment(&client, 31, "e62a1c7f-0f18-4f1b-9e2a-6b2f6a3f1a11")
        .await
        .expect("delete_comment failed");
}

#[tokio::test]
async fn test_undelete_comment_restores_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/history/task/55/undelete_comment"))
        .and(query_param("id", "a11b2c3d-0000-4f1b-9e2a-6b2f6a3f1a22"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    History::task()
        .undelete_comment(&client, 55, "a11b2c3d-0000-4f1b-9e2a-6b2f6a3f1a22")
        .await
        .expect("undelete_comment failed");
}

#[tokio::test]
async fn test_wiki_history_path_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history/wiki/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = History::wiki().get(&client, 9).await.expect("get failed");

    assert!(entries.is_empty());
}
