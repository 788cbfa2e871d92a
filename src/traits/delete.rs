//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::TaigaClient;
use crate::error::Result;
use crate::traits::Resource;

/// Delete an entity by id.
///
/// The request carries no body. After a successful delete the local value
/// is dead; no further operations on it are meaningful.
#[async_trait]
pub trait Delete: Resource {
    /// DELETE `<endpoint>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns an error on conflict, missing record, or insufficient
    /// rights, exactly as the service reports it.
    async fn delete(client: &TaigaClient, id: u64) -> Result<()> {
        let path = format!("{}/{}", Self::ENDPOINT, id);
        client.delete(&path).await?;
        Ok(())
    }
}
