//! Membership and Role models and trait implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::ProjectFilter;
use crate::traits::{Create, Delete, Get, List, Resource, Update};

/// A project membership: one user (or invitation email) bound to a role
/// within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: u64,

    /// Invitation/contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Role id within the project.
    #[serde(default)]
    pub role: Option<u64>,

    #[serde(default)]
    pub project: Option<u64>,

    /// User id once the invitation is accepted.
    #[serde(default)]
    pub user: Option<u64>,

    #[serde(default)]
    pub role_name: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a membership: project, email and role are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMembership {
    pub project: u64,
    pub email: String,
    pub role: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateMembership {
    pub fn new(project: u64, email: impl Into<String>, role: u64) -> Self {
        Self {
            project,
            email: email.into(),
            role,
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

/// Partial-update payload for a membership.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MembershipPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Membership {
    const ENDPOINT: &'static str = "memberships";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Membership {}

impl List for Membership {
    type Filter = ProjectFilter;
}

impl Create for Membership {
    type Params = CreateMembership;
}

impl Update for Membership {
    type Patch = MembershipPatch;
}

impl Delete for Membership {}

/// A project role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,

    /// Whether story points assigned under this role count toward totals.
    #[serde(default)]
    pub computable: Option<bool>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create payload for a role: project and name are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRole {
    pub project: u64,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateRole {
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

/// Partial-update payload for a role.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub computable: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Role {
    const ENDPOINT: &'static str = "roles";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Get for Role {}

impl List for Role {
    type Filter = ProjectFilter;
}

impl Create for Role {
    type Params = CreateRole;
}

impl Update for Role {
    type Patch = RolePatch;
}

impl Delete for Role {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_membership_payload() {
        let params = CreateMembership::new(7, "jdoe@example.com", 3);
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"project": 7, "email": "jdoe@example.com", "role": 3})
        );
    }

    #[test]
    fn test_membership_patch_skips_unset() {
        let patch = MembershipPatch {
            role: Some(5),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json, serde_json::json!({"role": 5}));
    }
}
