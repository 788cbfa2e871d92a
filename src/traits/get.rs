//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// Fetch a single entity by id.
///
/// All data is parsed from the response body up front; reading a field on
/// the returned value never triggers a network call.
///
/// # Example
///
/// ```ignore
/// use taigapi::{TaigaClient, UserStory, Get};
///
/// let client = TaigaClient::from_env()?;
/// let story = UserStory::get(&client, 42).await?;
/// ```
#[async_trait]
pub trait Get: Resource {
    /// Fetch the entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError::NotFound`] if no such record exists, or any
    /// other error the request surfaces.
    async fn get(client: &TaigaClient, id: u64) -> Result<Self> {
        let path = format!("{}/{}", Self::ENDPOINT, id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
