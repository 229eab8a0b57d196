//! RBAC configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if self.admin_roles.iter().any(|r| r.trim().is_empty()) {
            return Err("Admin role names cannot be empty".to_string());
        }

        if self.ability_ttl_secs > 86400 {
            return Err("Ability TTL should not exceed 24 hours".to_string());
        }

        Ok(())
    }
}
