//! Custom-attribute value support for user stories, tasks and issues.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::traits::Resource;

/// The versioned custom-attribute value bag of one record.
///
/// Keys are stringified custom-attribute ids. The service applies
/// optimistic concurrency to the bag as a whole, not to individual keys,
/// so writes must always resend the complete mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeBag {
    /// Mapping from stringified attribute id to value.
    #[serde(default)]
    pub attributes_values: Map<String, Value>,

    /// Version the bag was read at.
    #[serde(default)]
    pub version: u64,
}

impl AttributeBag {
    /// Look up a value by attribute id.
    pub fn value(&self, attribute_id: u64) -> Option<&Value> {
        self.attributes_values.get(&attribute_id.to_string())
    }
}

/// Custom-field support for entities with a
/// `<endpoint>/custom-attributes-values/<id>` sub-resource.
#[async_trait]
pub trait CustomAttributeValues: Resource {
    /// Fetch the record's custom-attribute value bag.
    async fn get_attributes(client: &TaigaClient, id: u64) -> Result<AttributeBag> {
        let path = format!("{}/custom-attributes-values/{}", Self::ENDPOINT, id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }

    /// Set one custom-attribute value via read-modify-write.
    ///
    /// Fetches the current bag, inserts the stringified attribute id, and
    /// PATCHes the full mapping back stamped with the caller-supplied
    /// `version`: exactly one read followed by one write. Callers must
    /// pass the version they last observed; a stale version surfaces as
    /// the service's validation error.
    async fn set_attribute(
        client: &TaigaClient,
        id: u64,
        attribute_id: u64,
        value: Value,
        version: u64,
    ) -> Result<AttributeBag> {
        let mut bag = Self::get_attributes(client, id).await?;
        bag.attributes_values
            .insert(attribute_id.to_string(), value);

        let path = format!("{}/custom-attributes-values/{}", Self::ENDPOINT, id);
        let payload = serde_json::json!({
            "attributes_values": bag.attributes_values,
            "version": version,
        });
        let response = client.patch(&path, &payload).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
