use crate::core::models::{Role, RoleId};
use crate::utils::error::{AccessError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// List all roles ordered by name
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        debug!("Listing roles");

        let models = entities::Role::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    /// Find role by ID
    pub async fn find_role_by_id(&self, role_id: RoleId) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", role_id);

        let model = entities::Role::find_by_id(role_id.0)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find role by name
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        debug!("Finding role by name: {}", name);

        let model = entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Create a new role
    pub async fn create_role(&self, name: &str, description: Option<&str>) -> Result<Role> {
        debug!("Creating role: {}", name);

        if self.find_role_by_name(name).await?.is_some() {
            return Err(AccessError::conflict(format!("Role already exists: {}", name)));
        }

        let model = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(String::from)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(AccessError::Database)?;

        Ok(model.to_domain())
    }

    /// Return the role named `name`, creating it when missing
    pub async fn ensure_role(&self, name: &str, description: Option<&str>) -> Result<Role> {
        match self.find_role_by_name(name).await? {
            Some(role) => Ok(role),
            None => self.create_role(name, description).await,
        }
    }

    /// Delete a role; its grants cascade and its personnel lose the assignment
    pub async fn delete_role(&self, role_id: RoleId) -> Result<()> {
        debug!("Deleting role: {}", role_id);

        let result = entities::Role::delete_by_id(role_id.0)
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;

        if result.rows_affected == 0 {
            return Err(AccessError::not_found(format!("Role not found: {}", role_id)));
        }

        Ok(())
    }
}
