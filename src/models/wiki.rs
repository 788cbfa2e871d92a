//! Wiki page and wiki link models and trait implementations.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::Result;
use crate::models::attachment::{Attachment, AttachmentParams};
use crate::models::common::ProjectFilter;
use crate::traits::{Attachable, Create, Delete, Get, Import, List, Resource, Update};

/// A project wiki page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPage {
    pub id: u64,

    pub project: u64,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// Optimistic-concurrency version; required by the service on updates.
    #[serde(default)]
    pub version: Option<u64>,

    #[serde(default)]
    pub owner: Option<u64>,

    #[serde(default)]
    pub last_modifier: Option<u64>,

    #[serde(default)]
    pub watchers: Vec<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a wiki page: project, slug and content are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWikiPage {
    pub project: u64,
    pub slug: String,
    pub content: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateWikiPage {
    pub fn new(project: u64, slug: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            project,
            slug: slug.into(),
            content: content.into(),
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

/// Import payload for a wiki page; the project id is carried by the
/// importer URL and merged in by [`Import::import`].
#[derive(Debug, Clone, Serialize)]
pub struct ImportWikiPage {
    pub slug: String,
    pub content: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportWikiPage {
    pub fn new(slug: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            content: content.into(),
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

/// Partial-update payload for a wiki page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WikiPagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,

    /// Version the record was read at; the service rejects stale writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for WikiPage {
    const ENDPOINT: &'static str = "wiki";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for WikiPage {}

impl List for WikiPage {
    type Filter = ProjectFilter;
}

impl Create for WikiPage {
    type Params = CreateWikiPage;
}

impl Update for WikiPage {
    type Patch = WikiPagePatch;
}

impl Delete for WikiPage {}

impl Import for WikiPage {
    const IMPORT_TYPE: &'static str = "wiki_page";
    type ImportParams = ImportWikiPage;
}

impl Attachable for WikiPage {
    const ATTACHMENT_ENDPOINT: &'static str = "wiki/attachments";
}

impl WikiPage {
    /// Attach a local file to this wiki page.
    pub async fn attach(
        &self,
        client: &TaigaClient,
        file: &Path,
        params: &AttachmentParams,
    ) -> Result<Attachment> {
        <Self as Attachable>::attach(client, self.project, self.id, file, params).await
    }

    /// List this wiki page's attachments.
    pub async fn list_attachments(&self, client: &TaigaClient) -> Result<Vec<Attachment>> {
        <Self as Attachable>::list_attachments(client, self.id).await
    }
}

/// A link in a project's wiki sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiLink {
    pub id: u64,

    pub project: u64,

    #[serde(default)]
    pub title: Option<String>,

    /// Target page slug.
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a wiki link: project, title and href are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWikiLink {
    pub project: u64,
    pub title: String,
    pub href: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateWikiLink {
    pub fn new(project: u64, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            project,
            title: title.into(),
            href: href.into(),
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

/// Import payload for a wiki link.
#[derive(Debug, Clone, Serialize)]
pub struct ImportWikiLink {
    pub title: String,
    pub href: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportWikiLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
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

/// Partial-update payload for a wiki link.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WikiLinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for WikiLink {
    const ENDPOINT: &'static str = "wiki-links";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for WikiLink {}

impl List for WikiLink {
    type Filter = ProjectFilter;
}

impl Create for WikiLink {
    type Params = CreateWikiLink;
}

impl Update for WikiLink {
    type Patch = WikiLinkPatch;
}

impl Delete for WikiLink {}

impl Import for WikiLink {
    const IMPORT_TYPE: &'static str = "wiki_link";
    type ImportParams = ImportWikiLink;
}
