//! Read seam between the ability resolver and the data service

use crate::core::models::{IdentityId, RoleAssignment, RoleId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Row-oriented reads the ability resolver needs from the data service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// `personnel[identity].role`, `None` when the row or the role is missing
    async fn find_role_assignment(&self, identity: IdentityId) -> Result<Option<RoleAssignment>>;

    /// `role_permissions[role] -> permissions.name`, one entry per grant row
    async fn role_permission_names(&self, role: RoleId) -> Result<Vec<Option<String>>>;

    /// Every permission name in the universe
    async fn all_permission_names(&self) -> Result<Vec<String>>;
}
