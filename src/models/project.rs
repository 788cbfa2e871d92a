//! Project model and trait implementations.
//!
//! Projects are the top-level containers; their detail responses embed the
//! member and workflow catalogs, which parse into typed values rather than
//! raw maps. The inherent methods mirror the project-scoped collections so
//! callers can stay on a fetched `Project` value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::models::common::{CreateNamed, ProjectFilter};
use crate::models::custom_attributes::{IssueAttribute, TaskAttribute, UserStoryAttribute};
use crate::models::issue::{CreateIssue, ImportIssue, Issue, IssueFilter, IssueStatus, IssueType, Priority, Severity};
use crate::models::membership::{CreateMembership, CreateRole, Membership, Role};
use crate::models::milestone::{CreateMilestone, ImportMilestone, Milestone};
use crate::models::task::{ImportTask, Task, TaskStatus};
use crate::models::user::User;
use crate::models::userstory::{
    CreatePoint, CreateUserStory, ImportUserStory, Point, UserStory, UserStoryFilter,
    UserStoryStatus,
};
use crate::models::wiki::{
    CreateWikiLink, CreateWikiPage, ImportWikiLink, ImportWikiPage, WikiLink, WikiPage,
};
use crate::traits::{Create, Delete, Get, Import, List, Resource, Update};

/// A Taiga project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub owner: Option<Value>,

    #[serde(default)]
    pub is_private: Option<bool>,

    #[serde(default)]
    pub is_backlog_activated: Option<bool>,

    #[serde(default)]
    pub is_issues_activated: Option<bool>,

    #[serde(default)]
    pub is_kanban_activated: Option<bool>,

    #[serde(default)]
    pub is_wiki_activated: Option<bool>,

    /// `"appear-in"` or `"talky"`.
    #[serde(default)]
    pub videoconferences: Option<String>,

    #[serde(default)]
    pub videoconferences_salt: Option<String>,

    #[serde(default)]
    pub total_milestones: Option<u32>,

    #[serde(default)]
    pub total_story_points: Option<f64>,

    /// Members of the project, parsed into typed users.
    #[serde(default)]
    pub members: Vec<User>,

    #[serde(default)]
    pub priorities: Vec<Priority>,

    #[serde(default)]
    pub issue_statuses: Vec<IssueStatus>,

    #[serde(default)]
    pub issue_types: Vec<IssueType>,

    #[serde(default)]
    pub task_statuses: Vec<TaskStatus>,

    #[serde(default)]
    pub severities: Vec<Severity>,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default)]
    pub us_statuses: Vec<UserStoryStatus>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectQuery {
    /// Restrict to projects a user is a member of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<u64>,

    /// Sort order (e.g. `"total_activity"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

/// Create payload for a project: name and description are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    /// Attach an additional optional field to the payload.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Import payload for a whole project. Unlike the per-entity importers
/// this targets the bare `importer` endpoint and carries its own role
/// definitions.
#[derive(Debug, Clone, Serialize)]
pub struct ImportProject {
    pub name: String,
    pub description: String,
    pub roles: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportProject {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        roles: Vec<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            roles,
            extra: Map::new(),
        }
    }

    /// Attach an additional optional field to the payload.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Partial-update payload for a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_backlog_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_issues_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_kanban_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wiki_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences_salt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_milestones: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_story_points: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Project {
    const ENDPOINT: &'static str = "projects";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Project {}

impl List for Project {
    type Filter = ProjectQuery;
}

impl Create for Project {
    type Params = CreateProject;
}

impl Update for Project {
    type Patch = ProjectPatch;
}

impl Delete for Project {}

impl Project {
    /// Fetch a project by its slug.
    pub async fn get_by_slug(client: &TaigaClient, slug: &str) -> Result<Project> {
        let response = client
            .get_with_query(&format!("{}/by_slug", Self::ENDPOINT), &[("slug", slug)])
            .await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Import a whole project through the bare `importer` endpoint.
    pub async fn import(client: &TaigaClient, params: &ImportProject) -> Result<Project> {
        let response = client.post("importer", params).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Fetch the project stats as the service reports them.
    pub async fn stats(&self, client: &TaigaClient) -> Result<Value> {
        let path = format!("{}/{}/stats", Self::ENDPOINT, self.id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Like the project.
    pub async fn like(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/like", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Withdraw a like from the project.
    pub async fn unlike(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/unlike", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Star the project.
    pub async fn star(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/star", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Unstar the project.
    pub async fn unstar(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/unstar", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Fetch a task by its per-project reference number.
    pub async fn get_task_by_ref(&self, client: &TaigaClient, task_ref: u64) -> Result<Task> {
        let response = client
            .get_with_query(
                &format!("{}/by_ref", Task::ENDPOINT),
                &[("ref", task_ref), ("project", self.id)],
            )
            .await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Fetch a user story by its per-project reference number.
    pub async fn get_userstory_by_ref(
        &self,
        client: &TaigaClient,
        story_ref: u64,
    ) -> Result<UserStory> {
        let response = client
            .get_with_query(
                &format!("{}/by_ref", UserStory::ENDPOINT),
                &[("ref", story_ref), ("project", self.id)],
            )
            .await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Fetch an issue by its per-project reference number.
    pub async fn get_issue_by_ref(&self, client: &TaigaClient, issue_ref: u64) -> Result<Issue> {
        let response = client
            .get_with_query(
                &format!("{}/by_ref", Issue::ENDPOINT),
                &[("ref", issue_ref), ("project", self.id)],
            )
            .await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Invite a member into the project.
    pub async fn add_membership(
        &self,
        client: &TaigaClient,
        email: &str,
        role: u64,
    ) -> Result<Membership> {
        Membership::create(client, &CreateMembership::new(self.id, email, role)).await
    }

    /// List the project's memberships.
    pub async fn list_memberships(&self, client: &TaigaClient) -> Result<Vec<Membership>> {
        Membership::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a user story to the project.
    pub async fn add_user_story(&self, client: &TaigaClient, subject: &str) -> Result<UserStory> {
        UserStory::create(client, &CreateUserStory::new(self.id, subject)).await
    }

    /// Import a user story into the project.
    pub async fn import_user_story(
        &self,
        client: &TaigaClient,
        params: &ImportUserStory,
    ) -> Result<UserStory> {
        UserStory::import(client, self.id, params).await
    }

    /// List the project's user stories.
    pub async fn list_user_stories(&self, client: &TaigaClient) -> Result<Vec<UserStory>> {
        let filter = UserStoryFilter {
            project: Some(self.id),
            ..Default::default()
        };
        UserStory::list(client, &filter).await
    }

    /// Add an issue to the project.
    pub async fn add_issue(
        &self,
        client: &TaigaClient,
        subject: &str,
        priority: u64,
        status: u64,
        issue_type: u64,
        severity: u64,
    ) -> Result<Issue> {
        Issue::create(
            client,
            &CreateIssue::new(self.id, subject, priority, status, issue_type, severity),
        )
        .await
    }

    /// Import an issue into the project.
    pub async fn import_issue(&self, client: &TaigaClient, params: &ImportIssue) -> Result<Issue> {
        Issue::import(client, self.id, params).await
    }

    /// List the project's issues.
    pub async fn list_issues(&self, client: &TaigaClient) -> Result<Vec<Issue>> {
        let filter = IssueFilter {
            project: Some(self.id),
            ..Default::default()
        };
        Issue::list(client, &filter).await
    }

    /// Add a milestone to the project.
    pub async fn add_milestone(
        &self,
        client: &TaigaClient,
        name: &str,
        estimated_start: chrono::NaiveDate,
        estimated_finish: chrono::NaiveDate,
    ) -> Result<Milestone> {
        Milestone::create(
            client,
            &CreateMilestone::new(self.id, name, estimated_start, estimated_finish),
        )
        .await
    }

    /// Import a milestone into the project.
    pub async fn import_milestone(
        &self,
        client: &TaigaClient,
        params: &ImportMilestone,
    ) -> Result<Milestone> {
        Milestone::import(client, self.id, params).await
    }

    /// List the project's milestones.
    pub async fn list_milestones(&self, client: &TaigaClient) -> Result<Vec<Milestone>> {
        Milestone::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Import a task into the project.
    pub async fn import_task(&self, client: &TaigaClient, params: &ImportTask) -> Result<Task> {
        Task::import(client, self.id, params).await
    }

    /// Add an estimation point to the project.
    pub async fn add_point(&self, client: &TaigaClient, name: &str, value: f64) -> Result<Point> {
        Point::create(client, &CreatePoint::new(self.id, name, value)).await
    }

    /// List the project's estimation points.
    pub async fn list_points(&self, client: &TaigaClient) -> Result<Vec<Point>> {
        Point::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a task status to the project.
    pub async fn add_task_status(&self, client: &TaigaClient, name: &str) -> Result<TaskStatus> {
        TaskStatus::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's task statuses.
    pub async fn list_task_statuses(&self, client: &TaigaClient) -> Result<Vec<TaskStatus>> {
        TaskStatus::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a user story status to the project.
    pub async fn add_user_story_status(
        &self,
        client: &TaigaClient,
        name: &str,
    ) -> Result<UserStoryStatus> {
        UserStoryStatus::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's user story statuses.
    pub async fn list_user_story_statuses(
        &self,
        client: &TaigaClient,
    ) -> Result<Vec<UserStoryStatus>> {
        UserStoryStatus::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add an issue type to the project.
    pub async fn add_issue_type(&self, client: &TaigaClient, name: &str) -> Result<IssueType> {
        IssueType::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's issue types.
    pub async fn list_issue_types(&self, client: &TaigaClient) -> Result<Vec<IssueType>> {
        IssueType::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add an issue status to the project.
    pub async fn add_issue_status(&self, client: &TaigaClient, name: &str) -> Result<IssueStatus> {
        IssueStatus::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's issue statuses.
    pub async fn list_issue_statuses(&self, client: &TaigaClient) -> Result<Vec<IssueStatus>> {
        IssueStatus::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a severity to the project.
    pub async fn add_severity(&self, client: &TaigaClient, name: &str) -> Result<Severity> {
        Severity::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's severities.
    pub async fn list_severities(&self, client: &TaigaClient) -> Result<Vec<Severity>> {
        Severity::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a priority to the project.
    pub async fn add_priority(&self, client: &TaigaClient, name: &str) -> Result<Priority> {
        Priority::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's priorities.
    pub async fn list_priorities(&self, client: &TaigaClient) -> Result<Vec<Priority>> {
        Priority::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a role to the project.
    pub async fn add_role(&self, client: &TaigaClient, name: &str) -> Result<Role> {
        Role::create(client, &CreateRole::new(self.id, name)).await
    }

    /// List the project's roles.
    pub async fn list_roles(&self, client: &TaigaClient) -> Result<Vec<Role>> {
        Role::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a wiki page to the project.
    pub async fn add_wikipage(
        &self,
        client: &TaigaClient,
        slug: &str,
        content: &str,
    ) -> Result<WikiPage> {
        WikiPage::create(client, &CreateWikiPage::new(self.id, slug, content)).await
    }

    /// Import a wiki page into the project.
    pub async fn import_wikipage(
        &self,
        client: &TaigaClient,
        params: &ImportWikiPage,
    ) -> Result<WikiPage> {
        WikiPage::import(client, self.id, params).await
    }

    /// List the project's wiki pages.
    pub async fn list_wikipages(&self, client: &TaigaClient) -> Result<Vec<WikiPage>> {
        WikiPage::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a wiki link to the project.
    pub async fn add_wikilink(
        &self,
        client: &TaigaClient,
        title: &str,
        href: &str,
    ) -> Result<WikiLink> {
        WikiLink::create(client, &CreateWikiLink::new(self.id, title, href)).await
    }

    /// Import a wiki link into the project.
    pub async fn import_wikilink(
        &self,
        client: &TaigaClient,
        params: &ImportWikiLink,
    ) -> Result<WikiLink> {
        WikiLink::import(client, self.id, params).await
    }

    /// List the project's wiki links.
    pub async fn list_wikilinks(&self, client: &TaigaClient) -> Result<Vec<WikiLink>> {
        WikiLink::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add an issue custom-attribute definition to the project.
    pub async fn add_issue_attribute(
        &self,
        client: &TaigaClient,
        name: &str,
    ) -> Result<IssueAttribute> {
        IssueAttribute::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's issue custom-attribute definitions.
    pub async fn list_issue_attributes(
        &self,
        client: &TaigaClient,
    ) -> Result<Vec<IssueAttribute>> {
        IssueAttribute::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a task custom-attribute definition to the project.
    pub async fn add_task_attribute(
        &self,
        client: &TaigaClient,
        name: &str,
    ) -> Result<TaskAttribute> {
        TaskAttribute::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's task custom-attribute definitions.
    pub async fn list_task_attributes(&self, client: &TaigaClient) -> Result<Vec<TaskAttribute>> {
        TaskAttribute::list(client, &ProjectFilter::project(self.id)).await
    }

    /// Add a user story custom-attribute definition to the project.
    pub async fn add_user_story_attribute(
        &self,
        client: &TaigaClient,
        name: &str,
    ) -> Result<UserStoryAttribute> {
        UserStoryAttribute::create(client, &CreateNamed::new(self.id, name)).await
    }

    /// List the project's user story custom-attribute definitions.
    pub async fn list_user_story_attributes(
        &self,
        client: &TaigaClient,
    ) -> Result<Vec<UserStoryAttribute>> {
        UserStoryAttribute::list(client, &ProjectFilter::project(self.id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_nested_catalogs_parse_typed() {
        let json = r#"{
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
            "roles": [{"id": 3, "name": "Back", "computable": true}],
            "points": [{"id": 9, "name": "1", "value": 1.0}],
            "us_statuses": [{"id": 1, "name": "New", "wip_limit": null}],
            "tags_colors": {}
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.members.len(), 2);
        assert_eq!(project.members[0].username.as_deref(), Some("jdoe"));
        assert_eq!(project.priorities[0].name.as_deref(), Some("High"));
        assert_eq!(project.issue_statuses[0].is_closed, Some(false));
        assert_eq!(project.roles[0].computable, Some(true));
        assert_eq!(project.us_statuses[0].wip_limit, None);
        assert!(project.extra.contains_key("tags_colors"));
    }

    #[test]
    fn test_project_reserializes_member_ids_unchanged() {
        let json = r#"{
            "id": 7,
            "name": "Backend",
            "members": [{"id": 12, "username": "jdoe"}]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&project).unwrap();

        assert_eq!(back["members"][0]["id"], serde_json::json!(12));
    }

    #[test]
    fn test_create_project_payload() {
        let params = CreateProject::new("Backend", "API server").with("is_private", true);
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Backend",
                "description": "API server",
                "is_private": true
            })
        );
    }
}
