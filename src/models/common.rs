//! Shared filter and payload types for project-scoped collections.

use serde::Serialize;
use serde_json::{Map, Value};

/// Filter for collections whose only useful filter is the owning project.
///
/// Used by statuses, priorities, severities, roles, points, memberships,
/// wiki pages/links and custom-attribute definitions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectFilter {
    /// Restrict results to one project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,
}

impl ProjectFilter {
    /// Filter scoped to a single project.
    #[must_use]
    pub fn project(id: u64) -> Self {
        Self { project: Some(id) }
    }
}

/// Shared create payload for the name/color/order catalogs (statuses,
/// types, priorities, severities, custom-attribute definitions): project
/// and name are required, everything else passes through `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNamed {
    pub project: u64,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateNamed {
    pub fn new(project: u64, name: impl Into<String>) -> Self {
        Self {
            project,
            name: name.into(),
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

/// Shared partial-update payload for the name/color/order catalogs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NamedPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_named_payload() {
        let params = CreateNamed::new(7, "High").with("color", "#ff0000");
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"project": 7, "name": "High", "color": "#ff0000"})
        );
    }

    #[test]
    fn test_project_filter_serializes_only_set_fields() {
        let empty = serde_qs::to_string(&ProjectFilter::default()).unwrap();
        assert!(empty.is_empty());

        let scoped = serde_qs::to_string(&ProjectFilter::project(7)).unwrap();
        assert_eq!(scoped, "project=7");
    }
}
