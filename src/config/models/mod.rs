//! Configuration data models
//!
//! This module defines all configuration structures used by the access-control core.

#![allow(missing_docs)]

pub mod access;
pub mod auth;
pub mod gate;
pub mod logging;
pub mod storage;

// Re-export all configuration types
pub use access::*;
pub use auth::*;
pub use gate::*;
pub use logging::*;
pub use storage::*;

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default ability staleness window in seconds
pub fn default_ability_ttl_secs() -> u64 {
    300 // 5 minutes
}

pub fn default_login_route() -> String {
    "/login".to_string()
}

pub fn default_no_access_route() -> String {
    "/no-access".to_string()
}

pub fn default_route() -> String {
    "/".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
