//! Attachment model shared by all attachable parents.
//!
//! Attachments have no collection endpoint of their own; each parent kind
//! (user story, task, issue, wiki page) owns a sub-collection under
//! `<parent-endpoint>/attachments`, addressed through the
//! [`crate::traits::Attachable`] trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A file attached to a user story, task, issue or wiki page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,

    /// Id of the parent record.
    #[serde(default)]
    pub object_id: Option<u64>,

    #[serde(default)]
    pub project: Option<u64>,

    /// Download URL of the stored file.
    #[serde(default)]
    pub attached_file: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_deprecated: Option<bool>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub owner: Option<u64>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Optional attributes sent alongside an upload.
#[derive(Debug, Clone, Default)]
pub struct AttachmentParams {
    pub description: Option<String>,
    pub is_deprecated: Option<bool>,
}

/// Partial-update payload for an attachment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_deserialize() {
        let json = r#"{
            "id": 8,
            "object_id": 101,
            "project": 7,
            "attached_file": "https://taiga.example.com/media/a/trace.log",
            "name": "trace.log",
            "size": 2048,
            "is_deprecated": false,
            "created_date": "2026-02-01T09:30:00Z"
        }"#;

        let attachment: Attachment = serde_json::from_str(json).unwrap();

        assert_eq!(attachment.id, 8);
        assert_eq!(attachment.object_id, Some(101));
        assert_eq!(attachment.name.as_deref(), Some("trace.log"));
        assert_eq!(attachment.size, Some(2048));
    }

    #[test]
    fn test_attachment_patch_skips_unset() {
        let patch = AttachmentPatch {
            is_deprecated: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json, serde_json::json!({"is_deprecated": true}));
    }
}
