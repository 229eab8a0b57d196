//! Role types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable role identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub i32);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named authorization category ("BOD", "Quản lý", "Nhân viên", "Thực tập", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: RoleId,
    /// Role name (unique)
    pub name: String,
    /// Role description
    pub description: Option<String>,
}

/// The role currently assigned to an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Assigned role id
    pub role_id: RoleId,
    /// Assigned role name
    pub role_name: String,
}
