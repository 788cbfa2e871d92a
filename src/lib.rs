//! Taiga API client library.
//!
//! A Rust library for interacting with the Taiga REST API using a
//! trait-based architecture: each operation (Get, List, Create, Update,
//! Delete, Import) is a trait with a generic implementation driven by the
//! entity's declared endpoint, and each entity type opts into the
//! operations its API supports.
//!
//! # Quick Start
//!
//! ```no_run
//! use taigapi::{Create, CreateUserStory, Get, List, Project, TaigaClient, UserStory};
//!
//! #[tokio::main]
//! async fn main() -> taigapi::Result<()> {
//!     // Create client from environment variables
//!     let client = TaigaClient::from_env()?;
//!
//!     // Get a project and add a story to it
//!     let project = Project::get(&client, 7).await?;
//!     let story = project.add_user_story(&client, "Fix login").await?;
//!     println!("Created story #{:?}", story.reference);
//!
//!     // Or work with the traits directly
//!     let story = UserStory::create(&client, &CreateUserStory::new(7, "Fix logout")).await?;
//!     let stories = UserStory::list_all(&client).await?;
//!     println!("{} stories", stories.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`TaigaClient`] holds the base URL, auth token and connection pool;
//!   every other type is a stateless view over it.
//! - Operation traits ([`Get`], [`List`], [`Create`], [`Update`],
//!   [`Delete`], [`Import`]) carry default method bodies keyed off each
//!   entity's [`Resource::ENDPOINT`].
//! - Capability traits ([`Commentable`], [`CustomAttributeValues`],
//!   [`Attachable`]) add comment, custom-field and attachment support to
//!   the entities that have it.
//!
//! Every failure from the service is surfaced unchanged as a
//! [`TaigaError`]; this layer never retries or recovers locally.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `TAIGA_TOKEN` (required) - Your Taiga auth token
//! - `TAIGA_URL` (optional) - Base URL (defaults to `https://api.taiga.io/api/v1`)

mod client;
mod error;
mod models;
mod traits;

// Re-export core types
pub use client::TaigaClient;
pub use error::{Result, TaigaError};

// Re-export traits
pub use traits::{
    Attachable, AttributeBag, Commentable, Create, CustomAttributeValues, Delete, Get, Import,
    List, Resource, Update,
};

// Re-export models
pub use models::{
    // Projects
    CreateProject,
    ImportProject,
    Project,
    ProjectPatch,
    ProjectQuery,
    // Users
    User,
    UserFilter,
    // Memberships and roles
    CreateMembership,
    CreateRole,
    Membership,
    MembershipPatch,
    Role,
    RolePatch,
    // User stories, statuses, points
    CreatePoint,
    CreateUserStory,
    ImportUserStory,
    Point,
    PointPatch,
    UserStory,
    UserStoryFilter,
    UserStoryPatch,
    UserStoryStatus,
    UserStoryStatusPatch,
    // Milestones
    CreateMilestone,
    ImportMilestone,
    Milestone,
    MilestonePatch,
    // Tasks
    CreateTask,
    ImportTask,
    Task,
    TaskFilter,
    TaskPatch,
    TaskStatus,
    TaskStatusPatch,
    // Issues and their catalogs
    CreateIssue,
    ImportIssue,
    Issue,
    IssueFilter,
    IssuePatch,
    IssueStatus,
    IssueStatusPatch,
    IssueType,
    NamedPatch,
    Priority,
    Severity,
    // Wiki
    CreateWikiLink,
    CreateWikiPage,
    ImportWikiLink,
    ImportWikiPage,
    WikiLink,
    WikiLinkPatch,
    WikiPage,
    WikiPagePatch,
    // Attachments
    Attachment,
    AttachmentParams,
    AttachmentPatch,
    // Custom attributes
    CustomAttributePatch,
    IssueAttribute,
    TaskAttribute,
    UserStoryAttribute,
    // History
    History,
    HistoryEntry,
    HistoryKind,
    // Shared payloads/filters
    CreateNamed,
    ProjectFilter,
};
