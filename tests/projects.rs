//! Project workflows against a mock service.

use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taigapi::{Create, CreateProject, Get, List, Project, ProjectQuery, TaigaClient};

fn client_for(server: &MockServer) -> TaigaClient {
    TaigaClient::new("test-token", &server.uri()).unwrap()
}

fn project_detail() -> serde_json::Value {
    json!({
        "id": 7,
        "name": "Backend",
        "slug": "backend",
        "description": "API server",
        "members": [
            {"id": 12, "username": "jdoe", "full_name": "J. Doe"},
            {"id": 13, "username": "asmith", "full_name": "A. Smith"}
        ],
        "priorities": [{"id": 4, "name": "High", "project": 7}],
        "issue_statuses": [{"id": 2, "name": "Open", "is_closed": false, "project": 7}],
        "issue_types": [{"id": 1, "name": "Bug", "project": 7}],
        "task_statuses": [{"id": 5, "name": "In progress", "project": 7}],
        "severities": [{"id": 6, "name": "Minor", "project": 7}],
        "roles": [{"id": 3, "name": "Back", "computable": true}],
        "points": [{"id": 9, "name": "1", "value": 1.0}],
        "us_statuses": [{"id": 1, "name": "New", "project": 7}]
    })
}

#[tokio::test]
async fn test_get_project_parses_nested_catalogs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get(&client, 7).await.expect("get failed");

    assert_eq!(project.members.len(), 2);
    assert_eq!(project.members[1].full_name.as_deref(), Some("A. Smith"));
    assert_eq!(project.task_statuses[0].name.as_deref(), Some("In progress"));
    assert_eq!(project.points[0].value, Some(1.0));
}

#[tokio::test]
async fn test_get_project_by_slug() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/by_slug"))
        .and(query_param("slug", "backend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get_by_slug(&client, "backend")
        .await
        .expect("get_by_slug failed");

    assert_eq!(project.id, 7);
}

#[tokio::test]
async fn test_list_projects_with_member_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("member", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_detail()])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = ProjectQuery {
        member: Some(12),
        ..Default::default()
    };
    let projects = Project::list(&client, &query).await.expect("list failed");

    assert_eq!(projects.len(), 1);
}

#[tokio::test]
async fn test_create_project_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(json!({"name": "Backend", "description": "API server"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_detail()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::create(&client, &CreateProject::new("Backend", "API server"))
        .await
        .expect("create failed");

    assert_eq!(project.slug.as_deref(), Some("backend"));
}

#[tokio::test]
async fn test_star_posts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/7/star"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get(&client, 7).await.unwrap();
    project.star(&client).await.expect("star failed");
}

#[tokio::test]
async fn test_get_userstory_by_ref_queries_ref_and_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/userstories/by_ref"))
        .and(query_param("ref", "14"))
        .and(query_param("project", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 101, "ref": 14, "project": 7, "subject": "Fix bug"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get(&client, 7).await.unwrap();
    let story = project
        .get_userstory_by_ref(&client, 14)
        .await
        .expect("by_ref failed");

    assert_eq!(story.id, 101);
}

#[tokio::test]
async fn test_project_stats_returns_raw_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/7/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_points": 42.0,
            "closed_points": 10.0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get(&client, 7).await.unwrap();
    let stats = project.stats(&client).await.expect("stats failed");

    assert_eq!(stats["total_points"], json!(42.0));
}

#[tokio::test]
async fn test_add_membership_from_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_detail()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/memberships"))
        .and(body_json(json!({
            "project": 7,
            "email": "new@example.com",
            "role": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 31, "project": 7, "email": "new@example.com", "role": 3
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = Project::get(&client, 7).await.unwrap();
    let membership = project
        .add_membership(&client, "new@example.com", 3)
        .await
        .expect("add_membership failed");

    assert_eq!(membership.role, Some(3));
}
