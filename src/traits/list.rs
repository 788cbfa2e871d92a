//! List trait for fetching collections of entities.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// List/filter entities.
///
/// Filters are forwarded verbatim as query parameters; the service's
/// return order is preserved and an empty result is a valid empty `Vec`.
///
/// # Example
///
/// ```ignore
/// use taigapi::{TaigaClient, UserStory, UserStoryFilter, List};
///
/// let client = TaigaClient::from_env()?;
/// let stories = UserStory::list(
///     &client,
///     &UserStoryFilter { project: Some(7), ..Default::default() },
/// ).await?;
/// ```
#[async_trait]
pub trait List: Resource {
    /// Query parameters for filtering.
    type Filter: Serialize + Default + Send + Sync;

    /// List entities matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &TaigaClient, filter: &Self::Filter) -> Result<Vec<Self>> {
        let response = client.get_with_query(Self::ENDPOINT, filter).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// List every entity visible to the caller (no filters).
    async fn list_all(client: &TaigaClient) -> Result<Vec<Self>> {
        Self::list(client, &Self::Filter::default()).await
    }
}
