//! Role/permission resolution configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Roles granted the whole permission universe
    #[serde(default)]
    pub admin_roles: Vec<String>,
    /// How long a resolved ability set stays fresh (0 = never stale)
    #[serde(default = "default_ability_ttl_secs")]
    pub ability_ttl_secs: u64,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            admin_roles: Vec::new(),
            ability_ttl_secs: default_ability_ttl_secs(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.admin_roles.is_empty() {
            self.admin_roles = other.admin_roles;
        }
        if other.ability_ttl_secs != default_ability_ttl_secs() {
            self.ability_ttl_secs = other.ability_ttl_secs;
        }
        self
    }

    /// Whether `role_name` is configured as an administrator role
    pub fn is_admin_role(&self, role_name: &str) -> bool {
        self.admin_roles.iter().any(|r| r == role_name)
    }

    /// Staleness window, `None` when expiry is disabled
    pub fn ability_ttl(&self) -> Option<Duration> {
        (self.ability_ttl_secs > 0).then(|| Duration::from_secs(self.ability_ttl_secs))
    }
}

/// Warn about configurations that widen access
pub fn warn_broad_access(config: &RbacConfig) {
    if !config.admin_roles.is_empty() {
        warn!(
            "Roles {:?} are granted every permission regardless of their role grants",
            config.admin_roles
        );
    }
}
