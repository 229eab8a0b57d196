//! Default CRM permission catalog

use super::store::GrantStore;
use super::types::SeedReport;
use crate::core::models::{PermissionId, PermissionKey};
use crate::utils::error::Result;
use std::collections::HashMap;
use tracing::{debug, info};

/// Catalog permission
#[derive(Debug, Clone, Copy)]
pub struct CatalogPermission {
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog role and its default grants
#[derive(Debug, Clone, Copy)]
pub struct CatalogRole {
    pub name: &'static str,
    pub description: &'static str,
    pub grants: &'static [&'static str],
}

const fn permission(name: &'static str, description: &'static str) -> CatalogPermission {
    CatalogPermission { name, description }
}

/// Permissions used by the CRM screens
pub const DEFAULT_PERMISSIONS: &[CatalogPermission] = &[
    permission("dashboard.view", "View the dashboard"),
    permission("clients.view", "View clients"),
    permission("clients.create", "Create clients"),
    permission("clients.edit", "Edit clients"),
    permission("clients.delete", "Delete clients"),
    permission("projects.view", "View projects"),
    permission("projects.create", "Create projects"),
    permission("projects.edit", "Edit projects"),
    permission("projects.delete", "Delete projects"),
    permission("leads.view", "View sales leads"),
    permission("leads.create", "Create sales leads"),
    permission("leads.edit", "Edit sales leads"),
    permission("leads.delete", "Delete sales leads"),
    permission("intern_tasks.view", "View intern tasks"),
    permission("intern_tasks.create", "Assign intern tasks"),
    permission("intern_tasks.edit", "Edit intern tasks"),
    permission("tasks.view", "View tasks"),
    permission("tasks.create", "Create tasks"),
    permission("tasks.edit", "Edit tasks"),
    permission("tasks.delete", "Delete tasks"),
    permission("hr.view", "View personnel"),
    permission("hr.create", "Create personnel"),
    permission("hr.edit", "Edit personnel"),
    permission("hr.delete", "Delete personnel"),
    permission("permissions.view", "Manage role permissions"),
    permission("reports.sales.view", "View sales reports"),
    permission("reports.projects.view", "View project reports"),
    permission("reports.interns.view", "View intern reports"),
    permission("reports.clients.view", "View client reports"),
];

const MANAGER_GRANTS: &[&str] = &[
    "dashboard.view",
    "clients.view",
    "clients.create",
    "clients.edit",
    "projects.view",
    "projects.create",
    "projects.edit",
    "leads.view",
    "leads.create",
    "leads.edit",
    "intern_tasks.view",
    "intern_tasks.create",
    "intern_tasks.edit",
    "tasks.view",
    "tasks.create",
    "tasks.edit",
    "hr.view",
    "reports.sales.view",
    "reports.projects.view",
    "reports.interns.view",
    "reports.clients.view",
];

const STAFF_GRANTS: &[&str] = &[
    "dashboard.view",
    "clients.view",
    "projects.view",
    "leads.view",
    "leads.create",
    "leads.edit",
    "tasks.view",
    "tasks.edit",
];

const INTERN_GRANTS: &[&str] = &["intern_tasks.view"];

/// Default roles; the board role is granted the whole catalog
pub const DEFAULT_ROLES: &[CatalogRole] = &[
    CatalogRole {
        name: "BOD",
        description: "Board of directors",
        grants: &[],
    },
    CatalogRole {
        name: "Quản lý",
        description: "Manager",
        grants: MANAGER_GRANTS,
    },
    CatalogRole {
        name: "Nhân viên",
        description: "Staff",
        grants: STAFF_GRANTS,
    },
    CatalogRole {
        name: "Thực tập",
        description: "Intern",
        grants: INTERN_GRANTS,
    },
];

const FULL_ACCESS_ROLE: &str = "BOD";

/// Insert missing catalog permissions and roles
///
/// Grants are only written for roles that currently have none, so administrator edits
/// survive a re-seed.
pub async fn seed_catalog(store: &dyn GrantStore) -> Result<SeedReport> {
    info!("Seeding permission catalog");

    let mut ids: HashMap<&'static str, PermissionId> = HashMap::new();
    for entry in DEFAULT_PERMISSIONS {
        let key = PermissionKey::parse(entry.name)?;
        let permission = store.ensure_permission(&key, Some(entry.description)).await?;
        ids.insert(entry.name, permission.id);
    }

    let mut report = SeedReport {
        permissions: DEFAULT_PERMISSIONS.len(),
        ..Default::default()
    };

    for entry in DEFAULT_ROLES {
        let role = store.ensure_role(entry.name, Some(entry.description)).await?;
        report.roles += 1;

        if !store.grants_for_role(role.id).await?.is_empty() {
            debug!("Role '{}' already has grants, leaving them", role.name);
            continue;
        }

        let grants: Vec<PermissionId> = if entry.name == FULL_ACCESS_ROLE {
            ids.values().copied().collect()
        } else {
            entry.grants.iter().filter_map(|name| ids.get(name).copied()).collect()
        };

        store.replace_role_permissions(role.id, &grants).await?;
        report.roles_granted += 1;
        debug!("Granted {} permissions to role '{}'", grants.len(), role.name);
    }

    info!(
        "Catalog seeded: {} permissions, {} roles ({} granted)",
        report.permissions, report.roles, report.roles_granted
    );
    Ok(report)
}
