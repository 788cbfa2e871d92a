//! Importer endpoint semantics: bulk creation always targets
//! `importer/{project}/{type}`, never the entity's own collection.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taigapi::{
    Import, ImportIssue, ImportMilestone, ImportProject, ImportTask, ImportUserStory,
    ImportWikiLink, ImportWikiPage, Issue, Milestone, Project, TaigaClient, Task, UserStory,
    WikiLink, WikiPage,
};

fn client_for(server: &MockServer) -> TaigaClient {
    TaigaClient::new("test-token", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_import_user_story_uses_us_discriminator() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer/7/us"))
        .and(body_json(json!({
            "project": 7,
            "subject": "Migrated story",
            "status": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 201, "project": 7, "subject": "Migrated story", "status": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    // The collection endpoint must never see importer traffic.
    Mock::given(method("POST"))
        .and(path("/userstories"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let story = UserStory::import(&client, 7, &ImportUserStory::new("Migrated story", 1))
        .await
        .expect("import failed");

    assert_eq!(story.id, 201);
}

#[tokio::test]
async fn test_import_task_uses_task_discriminator() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer/7/task"))
        .and(body_json(json!({
            "project": 7,
            "subject": "Migrated task",
            "status": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 202, "project": 7, "subject": "Migrated task", "status": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = Task::import(&client, 7, &ImportTask::new("Migrated task", 2))
        .await
        .expect("import failed");

    assert_eq!(task.id, 202);
}

#[tokio::test]
async fn test_import_issue_uses_issue_discriminator() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer/7/issue"))
        .and(body_json(json!({
            "project": 7,
            "subject": "Migrated issue",
            "priority": 4,
            "status": 2,
            "type": 1,
            "severity": 5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 203, "project": 7, "subject": "Migrated issue"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let issue = Issue::import(&client, 7, &ImportIssue::new("Migrated issue", 4, 2, 1, 5))
        .await
        .expect("import failed");

    assert_eq!(issue.id, 203);
}

#[tokio::test]
async fn test_import_milestone_serializes_dates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer/7/milestone"))
        .and(body_json(json!({
            "project": 7,
            "name": "Sprint 1",
            "estimated_start": "2026-03-02",
            "estimated_finish": "2026-03-16"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 204, "project": 7, "name": "Sprint 1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ImportMilestone::new(
        "Sprint 1",
        chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
    );
    let milestone = Milestone::import(&client, 7, &params)
        .await
        .expect("import failed");

    assert_eq!(milestone.id, 204);
}

#[tokio::test]
async fn test_import_wiki_kinds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer/7/wiki_page"))
        .and(body_json(json!({"project": 7, "slug": "home", "content": "# Hi"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 205, "project": 7, "slug": "home"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/importer/7/wiki_link"))
        .and(body_json(json!({"project": 7, "title": "Home", "href": "home"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 206, "project": 7, "title": "Home", "href": "home"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = WikiPage::import(&client, 7, &ImportWikiPage::new("home", "# Hi"))
        .await
        .expect("wiki page import failed");
    let link = WikiLink::import(&client, 7, &ImportWikiLink::new("Home", "home"))
        .await
        .expect("wiki link import failed");

    assert_eq!(page.id, 205);
    assert_eq!(link.id, 206);
}

#[tokio::test]
async fn test_import_project_targets_bare_importer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/importer"))
        .and(body_json(json!({
            "name": "Migrated",
            "description": "From elsewhere",
            "roles": [{"name": "Back"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8, "name": "Migrated", "description": "From elsewhere"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ImportProject::new("Migrated", "From elsewhere", vec![json!({"name": "Back"})]);
    let project = Project::import(&client, &params)
        .await
        .expect("project import failed");

    assert_eq!(project.id, 8);
}
