use crate::core::models::{Permission, PermissionId, PermissionKey, RoleId};
use crate::utils::error::{AccessError, Result};
use sea_orm::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::super::entities::{self, permission, role_permission};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// List the permission universe ordered by name
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        debug!("Listing permissions");

        let models = entities::Permission::find()
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// Names of every permission
    pub async fn all_permission_names(&self) -> Result<Vec<String>> {
        Ok(self
            .list_permissions()
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect())
    }

    /// Find permission by name
    pub async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        let model = entities::Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Return the permission keyed `key`, creating it when missing
    pub async fn ensure_permission(
        &self,
        key: &PermissionKey,
        description: Option<&str>,
    ) -> Result<Permission> {
        if let Some(existing) = self.find_permission_by_name(key.as_str()).await? {
            return Ok(existing);
        }

        debug!("Creating permission: {}", key);
        let model = permission::ActiveModel {
            name: Set(key.to_string()),
            description: Set(description.map(String::from)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(AccessError::Database)?;

        Ok(model.to_domain())
    }

    /// Permission names granted to a role, projected through the junction table
    ///
    /// A grant whose permission row is gone projects to `None`.
    pub async fn role_permission_names(&self, role_id: RoleId) -> Result<Vec<Option<String>>> {
        debug!("Loading permission names for role: {}", role_id);

        let rows = entities::RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id.0))
            .find_also_related(entities::Permission)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(_, permission)| permission.map(|p| p.name))
            .collect())
    }

    /// Permission ids granted to a role
    pub async fn grants_for_role(&self, role_id: RoleId) -> Result<Vec<PermissionId>> {
        let rows = entities::RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id.0))
            .order_by_asc(role_permission::Column::PermissionId)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(rows.into_iter().map(|row| row.permission_id).collect())
    }

    /// Replace the complete grant set of a role
    ///
    /// Delete-then-insert runs in one transaction: a failed insert leaves the previous
    /// grants in place. Duplicate ids collapse; unknown roles or permissions are rejected
    /// before anything is deleted.
    pub async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        let unique: BTreeSet<PermissionId> = permission_ids.iter().copied().collect();
        debug!(
            "Replacing grants of role {} with {} permissions",
            role_id,
            unique.len()
        );

        let txn = self.db.begin().await.map_err(AccessError::Database)?;

        if entities::Role::find_by_id(role_id.0)
            .one(&txn)
            .await
            .map_err(AccessError::Database)?
            .is_none()
        {
            return Err(AccessError::not_found(format!("Role not found: {}", role_id)));
        }

        if !unique.is_empty() {
            let known = entities::Permission::find()
                .filter(permission::Column::Id.is_in(unique.iter().copied()))
                .count(&txn)
                .await
                .map_err(AccessError::Database)?;

            if known != unique.len() as u64 {
                return Err(AccessError::validation(format!(
                    "Unknown permission ids in grant set for role {}",
                    role_id
                )));
            }
        }

        entities::RolePermission::delete_many()
            .filter(role_permission::Column::RoleId.eq(role_id.0))
            .exec(&txn)
            .await
            .map_err(AccessError::Database)?;

        if !unique.is_empty() {
            let rows = unique.iter().map(|permission_id| role_permission::ActiveModel {
                role_id: Set(role_id.0),
                permission_id: Set(*permission_id),
            });

            entities::RolePermission::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(AccessError::Database)?;
        }

        txn.commit().await.map_err(AccessError::Database)?;

        info!("Saved {} grants for role {}", unique.len(), role_id);
        Ok(())
    }
}
