//! Update trait for modifying entities, plus comment support.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// Update an existing entity with a partial payload.
///
/// Patch types mirror the entity's mutable fields as `Option`s and skip
/// unset ones, so only the provided fields are sent. The returned value is
/// a fresh parse of the service's response body.
#[async_trait]
pub trait Update: Resource {
    /// Partial-update payload type for this entity.
    type Patch: Serialize + Send + Sync;

    /// PATCH the set fields to `<endpoint>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError::Validation`] on rejected fields or a stale
    /// `version`, [`TaigaError::NotFound`] for an unknown id, or any other
    /// error the request surfaces.
    async fn update(client: &TaigaClient, id: u64, patch: &Self::Patch) -> Result<Self> {
        let path = format!("{}/{}", Self::ENDPOINT, id);
        let response = client.patch(&path, patch).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}

/// Comment support for entities whose updates accept a `comment` field.
///
/// Adding a comment is a partial update carrying only that field.
#[async_trait]
pub trait Commentable: Resource {
    /// Add a comment to the record.
    async fn add_comment(client: &TaigaClient, id: u64, comment: &str) -> Result<Self> {
        let path = format!("{}/{}", Self::ENDPOINT, id);
        let payload = serde_json::json!({ "comment": comment });
        let response = client.patch(&path, &payload).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
