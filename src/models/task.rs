//! Task model, task statuses, and trait implementations.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::Result;
use crate::models::attachment::{Attachment, AttachmentParams};
use crate::models::common::{CreateNamed, ProjectFilter};
use crate::traits::{
    Attachable, Commentable, Create, CustomAttributeValues, Delete, Get, Import, List, Resource,
    Update,
};

/// A Taiga task, optionally nested under a user story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
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

    /// Task status id.
    #[serde(default)]
    pub status: Option<u64>,

    /// Owning user story id, if any.
    #[serde(default)]
    pub user_story: Option<u64>,

    #[serde(default)]
    pub milestone: Option<u64>,

    #[serde(default)]
    pub assigned_to: Option<u64>,

    #[serde(default)]
    pub is_blocked: Option<bool>,

    #[serde(default)]
    pub blocked_note: Option<String>,

    #[serde(default)]
    pub is_closed: Option<bool>,

    /// "Iocaine" flag: the assignee marked this task as painful.
    #[serde(default)]
    pub is_iocaine: Option<bool>,

    #[serde(default)]
    pub external_reference: Option<Value>,

    #[serde(default)]
    pub us_order: Option<i64>,

    #[serde(default)]
    pub taskboard_order: Option<i64>,

    /// Tags as the service returns them (plain names or [name, color] pairs).
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub watchers: Vec<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,
}

/// Create payload for a task: project, subject and status are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub project: u64,
    pub subject: String,
    pub status: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateTask {
    pub fn new(project: u64, subject: impl Into<String>, status: u64) -> Self {
        Self {
            project,
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

/// Import payload for a task; the project id is carried by the importer
/// URL and merged in by [`Import::import`].
#[derive(Debug, Clone, Serialize)]
pub struct ImportTask {
    pub subject: String,
    pub status: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportTask {
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

/// Partial-update payload for a task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_iocaine: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taskboard_order: Option<i64>,

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

impl Resource for Task {
    const ENDPOINT: &'static str = "tasks";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Task {}

impl List for Task {
    type Filter = TaskFilter;
}

impl Create for Task {
    type Params = CreateTask;
}

impl Update for Task {
    type Patch = TaskPatch;
}

impl Delete for Task {}

impl Import for Task {
    const IMPORT_TYPE: &'static str = "task";
    type ImportParams = ImportTask;
}

impl Commentable for Task {}

impl CustomAttributeValues for Task {}

impl Attachable for Task {
    const ATTACHMENT_ENDPOINT: &'static str = "tasks/attachments";
}

impl Task {
    /// Add a comment to this task.
    pub async fn add_comment(&self, client: &TaigaClient, comment: &str) -> Result<Task> {
        <Self as Commentable>::add_comment(client, self.id, comment).await
    }

    /// List this task's attachments.
    pub async fn list_attachments(&self, client: &TaigaClient) -> Result<Vec<Attachment>> {
        <Self as Attachable>::list_attachments(client, self.id).await
    }

    /// Attach a local file to this task.
    pub async fn attach(
        &self,
        client: &TaigaClient,
        file: &Path,
        params: &AttachmentParams,
    ) -> Result<Attachment> {
        <Self as Attachable>::attach(client, self.project, self.id, file, params).await
    }
}

/// A task workflow status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub is_closed: Option<bool>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial-update payload for a task status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for TaskStatus {
    const ENDPOINT: &'static str = "task-statuses";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for TaskStatus {}

impl List for TaskStatus {
    type Filter = ProjectFilter;
}

impl Create for TaskStatus {
    type Params = CreateNamed;
}

impl Update for TaskStatus {
    type Patch = TaskStatusPatch;
}

impl Delete for TaskStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_payload() {
        let params = CreateTask::new(7, "Write docs", 2).with("user_story", 101);
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "project": 7,
                "subject": "Write docs",
                "status": 2,
                "user_story": 101
            })
        );
    }

    #[test]
    fn test_task_filter_by_user_story() {
        let filter = TaskFilter {
            user_story: Some(101),
            ..Default::default()
        };
        let qs = serde_qs::to_string(&filter).unwrap();

        assert_eq!(qs, "user_story=101");
    }

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "id": 55,
            "ref": 9,
            "project": 7,
            "subject": "Write docs",
            "status": 2,
            "user_story": 101,
            "is_iocaine": false,
            "watchers": [1, 2]
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, 55);
        assert_eq!(task.user_story, Some(101));
        assert_eq!(task.is_iocaine, Some(false));
        assert_eq!(task.watchers, vec![1, 2]);
    }
}
