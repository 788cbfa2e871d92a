//! Custom-attribute definition models and trait implementations.
//!
//! Definitions declare which custom fields exist per project; the values
//! themselves live in a separate versioned bag per record (see
//! [`crate::traits::CustomAttributeValues`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{CreateNamed, ProjectFilter};
use crate::traits::{Create, Delete, Get, List, Resource, Update};

/// Shared partial-update payload for custom-attribute definitions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomAttributePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

macro_rules! custom_attribute_entity {
    ($(#[$doc:meta])* $name:ident, $endpoint:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            pub id: u64,

            #[serde(default)]
            pub name: Option<String>,

            #[serde(default)]
            pub description: Option<String>,

            #[serde(default)]
            pub order: Option<u32>,

            #[serde(default)]
            pub project: Option<u64>,

            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }

        impl Resource for $name {
            const ENDPOINT: &'static str = $endpoint;

            fn id(&self) -> u64 {
                self.id
            }
        }

        impl Get for $name {}

        impl List for $name {
            type Filter = ProjectFilter;
        }

        impl Create for $name {
            type Params = CreateNamed;
        }

        impl Update for $name {
            type Patch = CustomAttributePatch;
        }

        impl Delete for $name {}
    };
}

custom_attribute_entity!(
    /// A custom-attribute definition for issues.
    IssueAttribute,
    "issue-custom-attributes"
);

custom_attribute_entity!(
    /// A custom-attribute definition for tasks.
    TaskAttribute,
    "task-custom-attributes"
);

custom_attribute_entity!(
    /// A custom-attribute definition for user stories.
    UserStoryAttribute,
    "userstory-custom-attributes"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_endpoints_differ_per_kind() {
        assert_eq!(IssueAttribute::ENDPOINT, "issue-custom-attributes");
        assert_eq!(TaskAttribute::ENDPOINT, "task-custom-attributes");
        assert_eq!(UserStoryAttribute::ENDPOINT, "userstory-custom-attributes");
    }

    #[test]
    fn test_attribute_deserialize() {
        let json = r#"{"id": 3, "name": "Browser", "order": 1, "project": 7}"#;
        let attr: IssueAttribute = serde_json::from_str(json).unwrap();

        assert_eq!(attr.name.as_deref(), Some("Browser"));
        assert_eq!(attr.project, Some(7));
    }
}
