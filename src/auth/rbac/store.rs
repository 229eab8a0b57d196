//! Write seam used by role-grant administration

use crate::core::models::{
    IdentityId, Permission, PermissionId, PermissionKey, Personnel, Role, RoleId,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Administrative reads and writes over roles, permissions and grants
#[async_trait]
pub trait GrantStore: Send + Sync {
    /// All roles ordered by name
    async fn list_roles(&self) -> Result<Vec<Role>>;

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>>;

    /// Return the role named `name`, creating it when missing
    async fn ensure_role(&self, name: &str, description: Option<&str>) -> Result<Role>;

    /// The permission universe ordered by name
    async fn list_permissions(&self) -> Result<Vec<Permission>>;

    /// Return the permission keyed `key`, creating it when missing
    async fn ensure_permission(
        &self,
        key: &PermissionKey,
        description: Option<&str>,
    ) -> Result<Permission>;

    /// Permission ids currently granted to `role`
    async fn grants_for_role(&self, role: RoleId) -> Result<Vec<PermissionId>>;

    /// Replace the complete grant set of `role` atomically
    async fn replace_role_permissions(
        &self,
        role: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()>;

    async fn find_personnel(&self, id: IdentityId) -> Result<Option<Personnel>>;

    async fn upsert_personnel(&self, record: &Personnel) -> Result<()>;
}
