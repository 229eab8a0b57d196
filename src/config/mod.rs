//! Configuration management for the access-control core
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Access-control configuration
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let access: AccessConfig = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { access };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut access = AccessConfig::default();

        if let Ok(url) = env::var("CRM_DATABASE_URL").or_else(|_| env::var("DATABASE_URL")) {
            access.storage.database.url = url;
            access.storage.database.enabled = true;
        }
        if let Ok(max_conn) = env::var("CRM_DATABASE_MAX_CONNECTIONS") {
            access.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid max connections: {}", e)))?;
        }
        if let Ok(roles) = env::var("CRM_ADMIN_ROLES") {
            access.rbac.admin_roles = roles
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(ttl) = env::var("CRM_ABILITY_TTL_SECS") {
            access.rbac.ability_ttl_secs = ttl
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid ability TTL: {}", e)))?;
        }
        if let Ok(route) = env::var("CRM_LOGIN_ROUTE") {
            access.gate.login_route = route;
        }
        if let Ok(route) = env::var("CRM_NO_ACCESS_ROUTE") {
            access.gate.no_access_route = route;
        }
        if let Ok(level) = env::var("CRM_LOG_LEVEL") {
            access.logging.level = level;
        }
        if let Ok(json) = env::var("CRM_LOG_JSON") {
            access.logging.json = json
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid CRM_LOG_JSON flag: {}", e)))?;
        }

        let config = Self { access };
        config.validate()?;
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.access.storage
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.access.rbac
    }

    /// Get gate configuration
    pub fn gate(&self) -> &GateConfig {
        &self.access.gate
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.access.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .storage
            .validate()
            .map_err(|e| AccessError::Config(format!("Storage config error: {}", e)))?;

        self.access
            .rbac
            .validate()
            .map_err(|e| AccessError::Config(format!("RBAC config error: {}", e)))?;

        self.access
            .gate
            .validate()
            .map_err(|e| AccessError::Config(format!("Gate config error: {}", e)))?;

        self.access
            .logging
            .validate()
            .map_err(|e| AccessError::Config(format!("Logging config error: {}", e)))?;

        crate::config::models::auth::warn_broad_access(&self.access.rbac);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.access)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.access)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
