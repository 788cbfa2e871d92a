//! Milestone (sprint) model and trait implementations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TaigaClient;
use crate::error::{Result, TaigaError};
use crate::models::common::ProjectFilter;
use crate::models::userstory::UserStory;
use crate::traits::{Create, Delete, Get, Import, List, Resource, Update};

/// A Taiga milestone (sprint).
///
/// Milestone detail responses embed the sprint's user stories; they parse
/// into typed [`UserStory`] values rather than raw maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,

    pub project: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub estimated_start: Option<NaiveDate>,

    #[serde(default)]
    pub estimated_finish: Option<NaiveDate>,

    #[serde(default)]
    pub disponibility: Option<f64>,

    #[serde(default)]
    pub order: Option<u32>,

    #[serde(default)]
    pub closed: Option<bool>,

    #[serde(default)]
    pub user_stories: Vec<UserStory>,

    #[serde(default)]
    pub watchers: Vec<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a milestone: project, name and the estimated date
/// range are required. Dates serialize as `%Y-%m-%d`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMilestone {
    pub project: u64,
    pub name: String,
    pub estimated_start: NaiveDate,
    pub estimated_finish: NaiveDate,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateMilestone {
    pub fn new(
        project: u64,
        name: impl Into<String>,
        estimated_start: NaiveDate,
        estimated_finish: NaiveDate,
    ) -> Self {
        Self {
            project,
            name: name.into(),
            estimated_start,
            estimated_finish,
            extra: Map::new(),
        }
    }

    /// Attach an additional optional field to the payload.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Import payload for a milestone; the project id is carried by the
/// importer URL and merged in by [`Import::import`].
#[derive(Debug, Clone, Serialize)]
pub struct ImportMilestone {
    pub name: String,
    pub estimated_start: NaiveDate,
    pub estimated_finish: NaiveDate,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImportMilestone {
    pub fn new(
        name: impl Into<String>,
        estimated_start: NaiveDate,
        estimated_finish: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            estimated_start,
            estimated_finish,
            extra: Map::new(),
        }
    }

    /// Attach an additional optional field to the payload.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Partial-update payload for a milestone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestonePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_start: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_finish: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponibility: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Milestone {
    const ENDPOINT: &'static str = "milestones";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Milestone {}

impl List for Milestone {
    type Filter = ProjectFilter;
}

impl Create for Milestone {
    type Params = CreateMilestone;
}

impl Update for Milestone {
    type Patch = MilestonePatch;
}

impl Delete for Milestone {}

impl Import for Milestone {
    const IMPORT_TYPE: &'static str = "milestone";
    type ImportParams = ImportMilestone;
}

impl Milestone {
    /// Fetch the sprint burndown stats for this milestone, as the service
    /// reports them.
    pub async fn stats(&self, client: &TaigaClient) -> Result<Value> {
        let path = format!("{}/{}/stats", Self::ENDPOINT, self.id);
        let response = client.get(&path).await?;
        response.json().await.map_err(TaigaError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_milestone_dates_serialize_as_ymd() {
        let params = CreateMilestone::new(
            7,
            "Sprint 3",
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
        );
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "project": 7,
                "name": "Sprint 3",
                "estimated_start": "2026-03-02",
                "estimated_finish": "2026-03-16"
            })
        );
    }

    #[test]
    fn test_milestone_nested_user_stories_parse_typed() {
        let json = r#"{
            "id": 3,
            "project": 7,
            "name": "Sprint 3",
            "estimated_start": "2026-03-02",
            "estimated_finish": "2026-03-16",
            "user_stories": [
                {"id": 101, "project": 7, "subject": "Fix bug"},
                {"id": 102, "project": 7, "subject": "Add feature"}
            ]
        }"#;

        let milestone: Milestone = serde_json::from_str(json).unwrap();

        assert_eq!(milestone.user_stories.len(), 2);
        assert_eq!(milestone.user_stories[0].subject.as_deref(), Some("Fix bug"));
        assert_eq!(
            milestone.estimated_start,
            NaiveDate::from_ymd_opt(2026, 3, 2)
        );
    }
}
