//! Personnel record (the row keyed by identity id)

use super::identity::IdentityId;
use super::role::RoleId;
use serde::{Deserialize, Serialize};

/// A staff member; `role_id` is the caller's single role assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    /// Personnel id (same as the identity id)
    pub id: IdentityId,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Assigned role, if any
    pub role_id: Option<RoleId>,
    /// "Active" or "Inactive"
    pub status: String,
}

impl Personnel {
    pub fn new(id: IdentityId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role_id: None,
            status: "Active".to_string(),
        }
    }

    pub fn with_role(mut self, role_id: RoleId) -> Self {
        self.role_id = Some(role_id);
        self
    }
}
