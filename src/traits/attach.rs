//! Attachment support for entities with a parent-scoped attachment
//! sub-collection.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::models::{Attachment, AttachmentParams, AttachmentPatch};
use crate::traits::Resource;

/// File-attachment support for entities whose attachments live under
/// `<parent-endpoint>/attachments`.
#[async_trait]
pub trait Attachable: Resource {
    /// Attachment sub-collection endpoint (e.g. `"userstories/attachments"`).
    const ATTACHMENT_ENDPOINT: &'static str;

    /// List the attachments of one parent record.
    async fn list_attachments(client: &TaigaClient, object_id: u64) -> Result<Vec<Attachment>> {
        let response = client
            .get_with_query(Self::ATTACHMENT_ENDPOINT, &[("object_id", object_id)])
            .await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Fetch a single attachment by id.
    async fn get_attachment(client: &TaigaClient, attachment_id: u64) -> Result<Attachment> {
        let path = format!("{}/{}", Self::ATTACHMENT_ENDPOINT, attachment_id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Upload a local file as an attachment of one parent record.
    ///
    /// The file is read before any network call; an unreadable path is a
    /// local precondition failure ([`TaigaError::AttachmentFile`]),
    /// distinct from a remote rejection.
    async fn attach(
        client: &TaigaClient,
        project: u64,
        object_id: u64,
        file: &Path,
        params: &AttachmentParams,
    ) -> Result<Attachment> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|source| TaigaError::AttachmentFile {
                path: file.to_path_buf(),
                source,
            })?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        let mut form = Form::new()
            .text("project", project.to_string())
            .text("object_id", object_id.to_string())
            .part("attached_file", Part::bytes(bytes).file_name(file_name));
        if let Some(description) = &params.description {
            form = form.text("description", description.clone());
        }
        if let Some(is_deprecated) = params.is_deprecated {
            form = form.text("is_deprecated", is_deprecated.to_string());
        }

        let response = client.post_multipart(Self::ATTACHMENT_ENDPOINT, form).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Update an attachment's mutable fields.
    async fn update_attachment(
        client: &TaigaClient,
        attachment_id: u64,
        patch: &AttachmentPatch,
    ) -> Result<Attachment> {
        let path = format!("{}/{}", Self::ATTACHMENT_ENDPOINT, attachment_id);
        let response = client.patch(&path, patch).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Delete an attachment by id.
    async fn delete_attachment(client: &TaigaClient, attachment_id: u64) -> Result<()> {
        let path = format!("{}/{}", Self::ATTACHMENT_ENDPOINT, attachment_id);
        client.delete(&path).await?;
        Ok(())
    }
}
