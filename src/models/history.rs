//! Change/comment history views and moderation toggles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};

const ENDPOINT: &str = "history";

/// Entity discriminator for the four history sub-views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Issue,
    Task,
    UserStory,
    Wiki,
}

impl HistoryKind {
    /// Path segment used by the service.
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryKind::Issue => "issue",
            HistoryKind::Task => "task",
            HistoryKind::UserStory => "userstory",
            HistoryKind::Wiki => "wiki",
        }
    }
}

/// One change/comment entry in a record's history.
///
/// Entries are identified by a UUID string; the order is whatever the
/// service returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub comment_html: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Set when the comment has been moderated away.
    #[serde(default)]
    pub delete_comment_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user: Option<Value>,

    /// Field-level diff of the change.
    #[serde(default)]
    pub values_diff: Option<Value>,

    #[serde(default)]
    pub diff: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Read/moderation view over one entity kind's change history.
///
/// # Example
///
/// ```ignore
/// use taigapi::{History, TaigaClient};
///
/// let client = TaigaClient::from_env()?;
/// let entries = History::user_story().get(&client, 101).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct History {
    kind: HistoryKind,
}

impl History {
    /// History view over issues.
    pub fn issue() -> Self {
        Self {
            kind: HistoryKind::Issue,
        }
    }

    /// History view over tasks.
    pub fn task() -> Self {
        Self {
            kind: HistoryKind::Task,
        }
    }

    /// History view over user stories.
    pub fn user_story() -> Self {
        Self {
            kind: HistoryKind::UserStory,
        }
    }

    /// History view over wiki pages.
    pub fn wiki() -> Self {
        Self {
            kind: HistoryKind::Wiki,
        }
    }

    /// History view for an arbitrary kind.
    pub fn of(kind: HistoryKind) -> Self {
        Self { kind }
    }

    /// Fetch the change/comment history of one record.
    pub async fn get(&self, client: &TaigaClient, resource_id: u64) -> Result<Vec<HistoryEntry>> {
        let path = format!("{}/{}/{}", ENDPOINT, self.kind.as_str(), resource_id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Mark one history entry's comment as deleted.
    pub async fn delete_comment(
        &self,
        client: &TaigaClient,
        resource_id: u64,
        entry_id: &str,
    ) -> Result<()> {
        let path = format!(
            "{}/{}/{}/delete_comment?id={}",
            ENDPOINT,
            self.kind.as_str(),
            resource_id,
            urlencoding::encode(entry_id)
        );
        client.post_empty(&path).await?;
        Ok(())
    }

    /// Restore one history entry's moderated comment.
    pub async fn undelete_comment(
        &self,
        client: &TaigaClient,
        resource_id: u64,
        entry_id: &str,
    ) -> Result<()> {
        let path = format!(
            "{}/{}/{}/undelete_comment?id={}",
            ENDPOINT,
            self.kind.as_str(),
            resource_id,
            urlencoding::encode(entry_id)
        );
        client.post_empty(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_kind_path_segments() {
        assert_eq!(HistoryKind::Issue.as_str(), "issue");
        assert_eq!(HistoryKind::Task.as_str(), "task");
        assert_eq!(HistoryKind::UserStory.as_str(), "userstory");
        assert_eq!(HistoryKind::Wiki.as_str(), "wiki");
    }

    #[test]
    fn test_history_entry_deserialize() {
        let json = r#"{
            "id": "e62a1c7f-0f18-4f1b-9e2a-6b2f6a3f1a11",
            "comment": "Looks good",
            "created_at": "2026-02-01T09:30:00Z",
            "values_diff": {"status": [1, 2]},
            "type": 1
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.comment.as_deref(), Some("Looks good"));
        assert!(entry.delete_comment_date.is_none());
        assert_eq!(
            entry.values_diff,
            Some(serde_json::json!({"status": [1, 2]}))
        );
    }
}
