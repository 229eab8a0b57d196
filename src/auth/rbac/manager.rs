//! Role-grant administration

use super::store::GrantStore;
use super::types::{PermissionGroup, RoleGrants};
use crate::core::models::{Permission, PermissionId, PermissionKey, Role};
use crate::utils::error::{AccessError, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Reads and replaces role grant sets by name
#[derive(Clone)]
pub struct RoleGrantManager {
    store: Arc<dyn GrantStore>,
}

impl std::fmt::Debug for RoleGrantManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGrantManager").finish_non_exhaustive()
    }
}

impl RoleGrantManager {
    pub fn new(store: Arc<dyn GrantStore>) -> Self {
        Self { store }
    }

    /// All roles ordered by name
    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.store.list_roles().await
    }

    /// The permission universe ordered by name
    pub async fn permissions(&self) -> Result<Vec<Permission>> {
        self.store.list_permissions().await
    }

    /// The permission universe grouped by module, modules in lexical order
    pub async fn grouped_permissions(&self) -> Result<Vec<PermissionGroup>> {
        let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
        for permission in self.store.list_permissions().await? {
            groups
                .entry(permission.module().to_string())
                .or_default()
                .push(permission);
        }

        Ok(groups
            .into_iter()
            .map(|(module, mut permissions)| {
                permissions.sort_by(|a, b| a.name.cmp(&b.name));
                PermissionGroup {
                    module,
                    permissions,
                }
            })
            .collect())
    }

    /// Current grant set of the role named `role_name`
    pub async fn grants(&self, role_name: &str) -> Result<RoleGrants> {
        let role = self.require_role(role_name).await?;
        self.load_grants(role).await
    }

    /// Set the complete grant set of `role_name` to `permission_names`
    ///
    /// Every name must be a well-formed key of an existing permission; nothing is
    /// written otherwise. Returns the grant set as stored after the save.
    pub async fn replace_grants<S: AsRef<str>>(
        &self,
        role_name: &str,
        permission_names: &[S],
    ) -> Result<RoleGrants> {
        let role = self.require_role(role_name).await?;

        let by_name: HashMap<String, PermissionId> = self
            .store
            .list_permissions()
            .await?
            .into_iter()
            .map(|p| (p.name, p.id))
            .collect();

        let mut ids = Vec::with_capacity(permission_names.len());
        let mut seen = HashSet::new();
        for name in permission_names {
            let key = PermissionKey::parse(name.as_ref())?;
            let id = by_name.get(key.as_str()).copied().ok_or_else(|| {
                AccessError::validation(format!("Unknown permission: {}", key))
            })?;
            if seen.insert(id) {
                ids.push(id);
            }
        }

        debug!(
            "Replacing grants of role '{}' with {} permissions",
            role.name,
            ids.len()
        );
        self.store.replace_role_permissions(role.id, &ids).await?;
        info!("Grants of role '{}' replaced", role.name);

        self.load_grants(role).await
    }

    async fn require_role(&self, role_name: &str) -> Result<Role> {
        self.store
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| AccessError::not_found(format!("Role not found: {}", role_name)))
    }

    async fn load_grants(&self, role: Role) -> Result<RoleGrants> {
        let granted: HashSet<PermissionId> =
            self.store.grants_for_role(role.id).await?.into_iter().collect();

        let permissions = self
            .store
            .list_permissions()
            .await?
            .into_iter()
            .filter(|p| granted.contains(&p.id))
            .collect();

        Ok(RoleGrants { role, permissions })
    }
}
