//! Store trait implementations for the SeaORM database

use crate::auth::ability::PermissionStore;
use crate::auth::rbac::GrantStore;
use crate::core::models::{
    IdentityId, Permission, PermissionId, PermissionKey, Personnel, Role, RoleAssignment, RoleId,
};
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl PermissionStore for SeaOrmDatabase {
    async fn find_role_assignment(&self, identity: IdentityId) -> Result<Option<RoleAssignment>> {
        SeaOrmDatabase::find_role_assignment(self, identity).await
    }

    async fn role_permission_names(&self, role: RoleId) -> Result<Vec<Option<String>>> {
        SeaOrmDatabase::role_permission_names(self, role).await
    }

    async fn all_permission_names(&self) -> Result<Vec<String>> {
        SeaOrmDatabase::all_permission_names(self).await
    }
}

#[async_trait]
impl GrantStore for SeaOrmDatabase {
    async fn list_roles(&self) -> Result<Vec<Role>> {
        SeaOrmDatabase::list_roles(self).await
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        SeaOrmDatabase::find_role_by_name(self, name).await
    }

    async fn ensure_role(&self, name: &str, description: Option<&str>) -> Result<Role> {
        SeaOrmDatabase::ensure_role(self, name, description).await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        SeaOrmDatabase::list_permissions(self).await
    }

    async fn ensure_permission(
        &self,
        key: &PermissionKey,
        description: Option<&str>,
    ) -> Result<Permission> {
        SeaOrmDatabase::ensure_permission(self, key, description).await
    }

    async fn grants_for_role(&self, role: RoleId) -> Result<Vec<PermissionId>> {
        SeaOrmDatabase::grants_for_role(self, role).await
    }

    async fn replace_role_permissions(
        &self,
        role: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        SeaOrmDatabase::replace_role_permissions(self, role, permission_ids).await
    }

    async fn find_personnel(&self, id: IdentityId) -> Result<Option<Personnel>> {
        SeaOrmDatabase::find_personnel(self, id).await
    }

    async fn upsert_personnel(&self, record: &Personnel) -> Result<()> {
        SeaOrmDatabase::upsert_personnel(self, record).await
    }
}
