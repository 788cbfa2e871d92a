//! Import trait for bulk/migration-style creation via the importer endpoint.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// Create an entity through `importer/{project}/{type}`, bypassing normal
/// workflow validation.
///
/// The discriminator is fixed per entity kind and the target is always the
/// importer endpoint, never the entity's own collection endpoint. The
/// project id is sent both in the path and merged into the payload.
#[async_trait]
pub trait Import: Resource {
    /// Fixed discriminator in the importer URL (`"us"`, `"task"`,
    /// `"issue"`, `"milestone"`, `"wiki_page"`, `"wiki_link"`).
    const IMPORT_TYPE: &'static str;

    /// Import-payload type: the entity's required fields plus extras.
    type ImportParams: Serialize + Send + Sync;

    /// POST the params to the importer endpoint and parse the created
    /// record from the response.
    ///
    /// # Errors
    ///
    /// Same semantics as `create`: [`TaigaError::Validation`] on rejected
    /// fields, or any other error the request surfaces.
    async fn import(
        client: &TaigaClient,
        project: u64,
        params: &Self::ImportParams,
    ) -> Result<Self> {
        let Value::Object(mut payload) = serde_json::to_value(params)? else {
            return Err(TaigaError::Validation {
                message: "import payload must serialize to a JSON object".to_string(),
            });
        };
        payload.insert("project".to_string(), project.into());

        let path = format!("importer/{}/{}", project, Self::IMPORT_TYPE);
        let response = client.post(&path, &payload).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
