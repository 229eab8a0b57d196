//! Core data models for the access-control core
//!
//! This module defines the identity, role, permission and ability types shared by the
//! resolvers, the gate and the storage layer.

pub mod ability;
pub mod identity;
pub mod permission;
pub mod personnel;
pub mod role;

// Re-export commonly used types
pub use ability::{AbilityKey, AbilitySet};
pub use identity::{Identity, IdentityId};
pub use permission::{Permission, PermissionId, PermissionKey};
pub use personnel::Personnel;
pub use role::{Role, RoleAssignment, RoleId};
