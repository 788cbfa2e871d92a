//! Create trait for posting new entities.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// Create a new entity on the collection endpoint.
///
/// Each params type carries the entity's required fields as plain struct
/// fields and passes optional extras through a flattened map, so the POST
/// payload is the exact union of both.
///
/// # Example
///
/// ```ignore
/// use taigapi::{TaigaClient, UserStory, CreateUserStory, Create};
///
/// let client = TaigaClient::from_env()?;
/// let story = UserStory::create(
///     &client,
///     &CreateUserStory::new(7, "Fix bug").with("tags", serde_json::json!(["bug"])),
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Resource {
    /// Create-payload type for this entity.
    type Params: Serialize + Send + Sync;

    /// POST the params to the collection endpoint and parse the created
    /// record from the response.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError::Validation`] when the service rejects a field
    /// constraint, or any other error the request surfaces.
    async fn create(client: &TaigaClient, params: &Self::Params) -> Result<Self> {
        let response = client.post(Self::ENDPOINT, params).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
