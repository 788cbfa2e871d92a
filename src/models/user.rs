//! User model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::models::project::Project;
use crate::traits::{Get, List, Resource};

/// A Taiga user.
///
/// Users are read-only through this API surface; membership in a project
/// is managed via [`crate::models::Membership`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: u64,

    /// Login name.
    #[serde(default)]
    pub username: Option<String>,

    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub full_name_display: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,

    /// Fields not modeled explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFilter {
    /// Restrict to members of one project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,
}

impl Resource for User {
    const ENDPOINT: &'static str = "users";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for User {}

impl List for User {
    type Filter = UserFilter;
}

impl User {
    /// Projects this user has starred.
    pub async fn starred_projects(&self, client: &TaigaClient) -> Result<Vec<Project>> {
        let path = format!("{}/{}/starred", Self::ENDPOINT, self.id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}
