//! In-memory role/permission store
//!
//! Used when the database is disabled. Mirrors the database semantics: unique names,
//! unique (role, permission) grants, and grant replacement that is rejected as a whole
//! when it names an unknown role or permission.

use crate::auth::ability::PermissionStore;
use crate::auth::rbac::GrantStore;
use crate::core::models::{
    IdentityId, Permission, PermissionId, PermissionKey, Personnel, Role, RoleAssignment, RoleId,
};
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Tables {
    roles: BTreeMap<i32, Role>,
    permissions: BTreeMap<PermissionId, Permission>,
    personnel: HashMap<IdentityId, Personnel>,
    // (role id, permission id)
    grants: BTreeSet<(i32, PermissionId)>,
    next_role_id: i32,
    next_permission_id: PermissionId,
}

/// Process-local store behind the same traits as the database
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of grant rows across all roles
    pub fn grant_count(&self) -> usize {
        self.tables.read().grants.len()
    }

    /// Delete a role; its grants go with it and its personnel lose the assignment
    pub fn delete_role(&self, role: RoleId) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.roles.remove(&role.0).is_none() {
            return Err(AccessError::not_found(format!("Role not found: {}", role)));
        }
        tables.grants.retain(|(r, _)| *r != role.0);
        for record in tables.personnel.values_mut() {
            if record.role_id == Some(role) {
                record.role_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PermissionStore for MemoryStore {
    async fn find_role_assignment(&self, identity: IdentityId) -> Result<Option<RoleAssignment>> {
        let tables = self.tables.read();
        let assignment = tables
            .personnel
            .get(&identity)
            .and_then(|p| p.role_id)
            .and_then(|role_id| tables.roles.get(&role_id.0))
            .map(|role| RoleAssignment {
                role_id: role.id,
                role_name: role.name.clone(),
            });
        Ok(assignment)
    }

    async fn role_permission_names(&self, role: RoleId) -> Result<Vec<Option<String>>> {
        let tables = self.tables.read();
        Ok(tables
            .grants
            .iter()
            .filter(|(r, _)| *r == role.0)
            .map(|(_, p)| tables.permissions.get(p).map(|perm| perm.name.clone()))
            .collect())
    }

    async fn all_permission_names(&self) -> Result<Vec<String>> {
        let tables = self.tables.read();
        let mut names: Vec<String> = tables.permissions.values().map(|p| p.name.clone()).collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl GrantStore for MemoryStore {
    async fn list_roles(&self) -> Result<Vec<Role>> {
        let mut roles: Vec<Role> = self.tables.read().roles.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        Ok(self
            .tables
            .read()
            .roles
            .values()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn ensure_role(&self, name: &str, description: Option<&str>) -> Result<Role> {
        let mut tables = self.tables.write();
        if let Some(existing) = tables.roles.values().find(|r| r.name == name) {
            return Ok(existing.clone());
        }

        tables.next_role_id += 1;
        let role = Role {
            id: RoleId(tables.next_role_id),
            name: name.to_string(),
            description: description.map(String::from),
        };
        debug!("Created role: {} ({})", role.name, role.id);
        tables.roles.insert(role.id.0, role.clone());
        Ok(role)
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let mut permissions: Vec<Permission> =
            self.tables.read().permissions.values().cloned().collect();
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }

    async fn ensure_permission(
        &self,
        key: &PermissionKey,
        description: Option<&str>,
    ) -> Result<Permission> {
        let mut tables = self.tables.write();
        if let Some(existing) = tables
            .permissions
            .values()
            .find(|p| p.name == key.as_str())
        {
            return Ok(existing.clone());
        }

        tables.next_permission_id += 1;
        let permission = Permission {
            id: tables.next_permission_id,
            name: key.to_string(),
            description: description.map(String::from),
        };
        debug!("Created permission: {}", permission.name);
        tables.permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    async fn grants_for_role(&self, role: RoleId) -> Result<Vec<PermissionId>> {
        Ok(self
            .tables
            .read()
            .grants
            .iter()
            .filter(|(r, _)| *r == role.0)
            .map(|(_, p)| *p)
            .collect())
    }

    async fn replace_role_permissions(
        &self,
        role: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        let unique: BTreeSet<PermissionId> = permission_ids.iter().copied().collect();
        let mut tables = self.tables.write();

        if !tables.roles.contains_key(&role.0) {
            return Err(AccessError::not_found(format!("Role not found: {}", role)));
        }
        if let Some(unknown) = unique.iter().find(|id| !tables.permissions.contains_key(id)) {
            return Err(AccessError::validation(format!(
                "Unknown permission id {} in grant set for role {}",
                unknown, role
            )));
        }

        tables.grants.retain(|(r, _)| *r != role.0);
        tables
            .grants
            .extend(unique.iter().map(|permission_id| (role.0, *permission_id)));

        info!("Saved {} grants for role {}", unique.len(), role);
        Ok(())
    }

    async fn find_personnel(&self, id: IdentityId) -> Result<Option<Personnel>> {
        Ok(self.tables.read().personnel.get(&id).cloned())
    }

    async fn upsert_personnel(&self, record: &Personnel) -> Result<()> {
        let mut tables = self.tables.write();
        if let Some(role_id) = record.role_id {
            if !tables.roles.contains_key(&role_id.0) {
                return Err(AccessError::validation(format!(
                    "Unknown role {} for personnel {}",
                    role_id, record.id
                )));
            }
        }
        if tables
            .personnel
            .values()
            .any(|p| p.email == record.email && p.id != record.id)
        {
            return Err(AccessError::conflict(format!(
                "Email already in use: {}",
                record.email
            )));
        }

        tables.personnel.insert(record.id, record.clone());
        Ok(())
    }
}
