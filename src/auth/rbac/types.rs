//! RBAC type definitions

use crate::core::models::{Permission, Role};
use serde::{Deserialize, Serialize};

/// Permissions sharing a module prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroup {
    /// Module name (first key segment)
    pub module: String,
    /// Permissions of the module, ordered by name
    pub permissions: Vec<Permission>,
}

/// The complete grant set of a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrants {
    /// Role
    pub role: Role,
    /// Granted permissions, ordered by name
    pub permissions: Vec<Permission>,
}

impl RoleGrants {
    /// Granted permission names
    pub fn names(&self) -> Vec<&str> {
        self.permissions.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Rows created by a catalog seed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    /// Permissions in the catalog
    pub permissions: usize,
    /// Roles in the catalog
    pub roles: usize,
    /// Roles whose grants were written because they had none
    pub roles_granted: usize,
}
