//! Role-Based Access Control (RBAC) administration
//!
//! This module provides the permission catalog and the role-grant management used by
//! administrators.

pub mod catalog;
mod manager;
mod store;
mod types;

// Re-export public types and structs
pub use catalog::seed_catalog;
pub use manager::RoleGrantManager;
pub use store::GrantStore;
pub use types::{PermissionGroup, RoleGrants, SeedReport};
