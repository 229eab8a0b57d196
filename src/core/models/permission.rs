//! Permission types

use crate::utils::error::{AccessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission row id
pub type PermissionId = i32;

// Lowercase `module.action` with optional deeper segments (`reports.sales.view`)
static PERMISSION_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_]+(\.[a-z0-9_]+)+$").unwrap_or_else(|e| {
        tracing::error!("Failed to compile permission key regex: {}", e);
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// A validated dot-namespaced permission key (`<module>.<action>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionKey(String);

impl PermissionKey {
    /// Parse and validate a permission key
    pub fn parse(key: &str) -> Result<Self> {
        if PERMISSION_KEY_PATTERN.is_match(key) {
            Ok(Self(key.to_string()))
        } else {
            Err(AccessError::validation(format!(
                "Invalid permission key '{}': expected <module>.<action>",
                key
            )))
        }
    }

    /// The module segment (`hr` in `hr.edit`)
    pub fn module(&self) -> &str {
        self.0.split_once('.').map(|(module, _)| module).unwrap_or(&self.0)
    }

    /// The action part (`edit` in `hr.edit`, `sales.view` in `reports.sales.view`)
    pub fn action(&self) -> &str {
        self.0.split_once('.').map(|(_, action)| action).unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PermissionKey {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PermissionKey {
    type Error = AccessError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PermissionKey> for String {
    fn from(key: PermissionKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PermissionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Permission definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission row id
    pub id: PermissionId,
    /// Permission key
    pub name: String,
    /// Permission description
    pub description: Option<String>,
}

impl Permission {
    /// Module segment of the permission name
    pub fn module(&self) -> &str {
        self.name.split_once('.').map(|(module, _)| module).unwrap_or(&self.name)
    }
}
