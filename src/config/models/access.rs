//! Root configuration of the access-control core

use super::*;
use serde::{Deserialize, Serialize};

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Role/permission resolution configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Route gate configuration
    #[serde(default)]
    pub gate: GateConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AccessConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.storage = self.storage.merge(other.storage);
        self.rbac = self.rbac.merge(other.rbac);
        self.gate = self.gate.merge(other.gate);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
