//! Ability resolution
//!
//! Maps the current identity to its role and the role to a set of permission keys, and
//! answers `can(key)` synchronously from that set.

mod resolver;
mod store;

pub use resolver::{AbilityResolver, ResolveOutcome, ResolveTicket};
pub use store::PermissionStore;

#[cfg(test)]
pub use store::MockPermissionStore;

use crate::core::models::AbilitySet;

/// Permission check surface shared by the gate and the render guard
pub trait Ability {
    /// Whether the current identity holds `permission`; false while unresolved
    fn can(&self, permission: &str) -> bool;

    /// Whether resolution is still in flight
    fn loading(&self) -> bool;
}

impl Ability for AbilitySet {
    fn can(&self, permission: &str) -> bool {
        self.contains(permission)
    }

    fn loading(&self) -> bool {
        false
    }
}

impl<T: Ability + ?Sized> Ability for std::sync::Arc<T> {
    fn can(&self, permission: &str) -> bool {
        (**self).can(permission)
    }

    fn loading(&self) -> bool {
        (**self).loading()
    }
}
