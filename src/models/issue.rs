//! Issue model, its workflow entities, and trait implementations.
//!
//! Issues carry four workflow dimensions (status, type, priority,
//! severity), all project-scoped catalogs defined here as well.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::Result;
use crate::models::attachment::{Attachment, AttachmentParams};
use crate::models::common::{CreateNamed, NamedPatch, ProjectFilter};
use crate::traits::{
    Attachable, Commentable, Create, CustomAttributeValues, Delete, Get, Import, List, Resource,
    Update,
};

/// A Taiga issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
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

    /// Issue status id.
    #[serde(default)]
    pub status: Option<u64>,

    /// Issue type id.
    #[serde(rename = "type", default)]
    pub issue_type: Option<u64>,

    #[serde(default)]
    pub priority: Option<u64>,

    #[serde(default)]
    pub severity: Option<u64>,

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

    /// Tags as the service returns them (plain names or [name, color] pairs).
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub watchers: Vec<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing issues.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u64>,
}

/// Create payload for an issue. The service requires the full workflow
/// tuple up front: project, subject, priority, status, type and severity.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssue {
    pub project: u64,
    pub subject: String,
    pub priority: u64,
    pub status: u64,
    #[serde(rename = "type")]
    pub issue_type: u64,
    pub severity: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateIssue {
    pub fn new(
        project: u64,
        subject: impl Into<String>,
        priority: u64,
        status: u64,
        issue_type: u64,
        severity: u64,
    ) -> Self {
        Self {
            project,
            subject: subject.into(),
            priority,
            status,
            issue_type,
            severity,
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

/// Import payload for an issue; the project id is carried by the importer
/// URL and merged in by [`Import::import`].
#[derive(Debug, Clone, Serialize)]
pub struct ImportIssue {
    pub subject: String,
    pub priority: u64,
    pub status: u64,
    #[serde(rename = "type")]
    pub issue_type: u64,
    pub severity: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportIssue {
    pub fn new(
        subject: impl Into<String>,
        priority: u64,
        status: u64,
        issue_type: u64,
        severity: u64,
    ) -> Self {
        Self {
            subject: subject.into(),
            priority,
            status,
            issue_type,
            severity,
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

/// Partial-update payload for an issue.
///
/// The fields mirror the service's mutable set; anything else passes
/// through `extra` unfiltered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,

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

impl Resource for Issue {
    const ENDPOINT: &'static str = "issues";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Issue {}

impl List for Issue {
    type Filter = IssueFilter;
}

impl Create for Issue {
    type Params = CreateIssue;
}

impl Update for Issue {
    type Patch = IssuePatch;
}

impl Delete for Issue {}

impl Import for Issue {
    const IMPORT_TYPE: &'static str = "issue";
    type ImportParams = ImportIssue;
}

impl Commentable for Issue {}

impl CustomAttributeValues for Issue {}

impl Attachable for Issue {
    const ATTACHMENT_ENDPOINT: &'static str = "issues/attachments";
}

impl Issue {
    /// Upvote this issue.
    pub async fn upvote(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/upvote", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Withdraw an upvote from this issue.
    pub async fn downvote(&self, client: &TaigaClient) -> Result<()> {
        let path = format!("{}/{}/downvote", Self::ENDPOINT, self.id);
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Add a comment to this issue.
    pub async fn add_comment(&self, client: &TaigaClient, comment: &str) -> Result<Issue> {
        <Self as Commentable>::add_comment(client, self.id, comment).await
    }

    /// List this issue's attachments.
    pub async fn list_attachments(&self, client: &TaigaClient) -> Result<Vec<Attachment>> {
        <Self as Attachable>::list_attachments(client, self.id).await
    }

    /// Attach a local file to this issue.
    pub async fn attach(
        &self,
        client: &TaigaClient,
        file: &Path,
        params: &AttachmentParams,
    ) -> Result<Attachment> {
        <Self as Attachable>::attach(client, self.project, self.id, file, params).await
    }
}

/// An issue workflow status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStatus {
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

/// Partial-update payload for an issue status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueStatusPatch {
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

impl Resource for IssueStatus {
    const ENDPOINT: &'static str = "issue-statuses";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for IssueStatus {}

impl List for IssueStatus {
    type Filter = ProjectFilter;
}

impl Create for IssueStatus {
    type Params = CreateNamed;
}

impl Update for IssueStatus {
    type Patch = IssueStatusPatch;
}

impl Delete for IssueStatus {}

/// An issue type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueType {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for IssueType {
    const ENDPOINT: &'static str = "issue-types";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for IssueType {}

impl List for IssueType {
    type Filter = ProjectFilter;
}

impl Create for IssueType {
    type Params = CreateNamed;
}

impl Update for IssueType {
    type Patch = NamedPatch;
}

impl Delete for IssueType {}

/// An issue priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priority {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Priority {
    const ENDPOINT: &'static str = "priorities";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Priority {}

impl List for Priority {
    type Filter = ProjectFilter;
}

impl Create for Priority {
    type Params = CreateNamed;
}

impl Update for Priority {
    type Patch = NamedPatch;
}

impl Delete for Priority {}

/// An issue severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Severity {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Severity {
    const ENDPOINT: &'static str = "severities";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Severity {}

impl List for Severity {
    type Filter = ProjectFilter;
}

impl Create for Severity {
    type Params = CreateNamed;
}

impl Update for Severity {
    type Patch = NamedPatch;
}

impl Delete for Severity {}
