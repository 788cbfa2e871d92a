//! User story model, its statuses and points, and trait implementations.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::Result;
use crate::models::attachment::{Attachment, AttachmentParams};
use crate::models::common::{CreateNamed, ProjectFilter};
use crate::models::task::{CreateTask, Task, TaskFilter};
use crate::traits::{
    Attachable, Commentable, Create, CustomAttributeValues, Delete, Get, Import, List, Resource,
    Update,
};

/// A Taiga user story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStory {
    pub id: u64,

    /// Human-facing reference number, unique per project.
    #[serde(rename = "ref", default)]
    pub reference: Option<u64>,

    /// Optimistic-concurrency version; required by the service on updates.
    #[serde(default)]
    pub version: Option<u64>,

    pub project: u64,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// User story status id.
    #[serde(default)]
    pub status: Option<u64>,

    #[serde(default)]
    pub milestone: Option<u64>,

    #[serde(default)]
    pub assigned_to: Option<u64>,

    /// Role id to points id mapping.
    #[serde(default)]
    pub points: Option<Value>,

    #[serde(default)]
    pub is_closed: Option<bool>,

    #[serde(default)]
    pub is_blocked: Option<bool>,

    #[serde(default)]
    pub blocked_note: Option<String>,

    #[serde(default)]
    pub is_archived: Option<bool>,

    #[serde(default)]
    pub client_requirement: Option<bool>,

    #[serde(default)]
    pub team_requirement: Option<bool>,

    #[serde(default)]
    pub backlog_order: Option<i64>,

    #[serde(default)]
    pub sprint_order: Option<i64>,

    #[serde(default)]
    pub kanban_order: Option<i64>,

    /// Tags as the service returns them (plain names or [name, color] pairs).
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub watchers: Vec<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing user stories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserStoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

/// Create payload for a user story: project and subject are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserStory {
    pub project: u64,
    pub subject: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateUserStory {
    pub fn new(project: u64, subject: impl Into<String>) -> Self {
        Self {
            project,
            subject: subject.into(),
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

/// Import payload for a user story; unlike `create`, the importer also
/// requires a status.
#[derive(Debug, Clone, Serialize)]
pub struct ImportUserStory {
    pub subject: String,
    pub status: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportUserStory {
    pub fn new(subject: impl Into<String>, status: u64) -> Self {
        Self {
            subject: subject.into(),
            status,
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

/// Partial-update payload for a user story.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserStoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_requirement: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_requirement: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlog_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanban_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,

    /// Version the record was read at; the service rejects stale writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for UserStory {
    const ENDPOINT: &'static str = "userstories";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for UserStory {}

impl List for UserStory {
    type Filter = UserStoryFilter;
}

impl Create for UserStory {
    type Params = CreateUserStory;
}

impl Update for UserStory {
    type Patch = UserStoryPatch;
}

impl Delete for UserStory {}

impl Import for UserStory {
    const IMPORT_TYPE: &'static str = "us";
    type ImportParams = ImportUserStory;
}

impl Commentable for UserStory {}

impl CustomAttributeValues for UserStory {}

impl Attachable for UserStory {
    const ATTACHMENT_ENDPOINT: &'static str = "userstories/attachments";
}

impl UserStory {
    /// Create a task under this story.
    pub async fn add_task(
        &self,
        client: &TaigaClient,
        subject: &str,
        status: u64,
    ) -> Result<Task> {
        let params = CreateTask::new(self.project, subject, status).with("user_story", self.id);
        Task::create(client, &params).await
    }

    /// List the tasks of this story.
    pub async fn list_tasks(&self, client: &TaigaClient) -> Result<Vec<Task>> {
        let filter = TaskFilter {
            user_story: Some(self.id),
            ..Default::default()
        };
        Task::list(client, &filter).await
    }

    /// Add a comment to this story.
    pub async fn add_comment(&self, client: &TaigaClient, comment: &str) -> Result<UserStory> {
        <Self as Commentable>::add_comment(client, self.id, comment).await
    }

    /// List this story's attachments.
    pub async fn list_attachments(&self, client: &TaigaClient) -> Result<Vec<Attachment>> {
        <Self as Attachable>::list_attachments(client, self.id).await
    }

    /// Attach a local file to this story.
    pub async fn attach(
        &self,
        client: &TaigaClient,
        file: &Path,
        params: &AttachmentParams,
    ) -> Result<Attachment> {
        <Self as Attachable>::attach(client, self.project, self.id, file, params).await
    }
}

/// A user story workflow status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStoryStatus {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub is_closed: Option<bool>,

    /// Work-in-progress limit for kanban columns.
    #[serde(default)]
    pub wip_limit: Option<u32>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial-update payload for a user story status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserStoryStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for UserStoryStatus {
    const ENDPOINT: &'static str = "userstory-statuses";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for UserStoryStatus {}

impl List for UserStoryStatus {
    type Filter = ProjectFilter;
}

impl Create for UserStoryStatus {
    type Params = CreateNamed;
}

impl Update for UserStoryStatus {
    type Patch = UserStoryStatusPatch;
}

impl Delete for UserStoryStatus {}

/// An estimation point value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    /// Numeric value; `null` means "?" (unestimated).
    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a point: project, name and value are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePoint {
    pub project: u64,
    pub name: String,
    pub value: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatePoint {
    pub fn new(project: u64, name: impl Into<String>, value: f64) -> Self {
        Self {
            project,
            name: name.into(),
            value,
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

/// Partial-update payload for a point.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PointPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Point {
    const ENDPOINT: &'static str = "points";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Point {}

impl List for Point {
    type Filter = ProjectFilter;
}

impl Create for Point {
    type Params = CreatePoint;
}

impl Update for Point {
    type Patch = PointPatch;
}

impl Delete for Point {}
