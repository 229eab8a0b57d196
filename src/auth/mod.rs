//! Authentication state and authorization
//!
//! This module provides session resolution, ability resolution, the route gate, the
//! conditional render guard and role-grant administration.

pub mod ability;
pub mod gate;
pub mod guard;
pub mod rbac;
pub mod session;
mod system;

// Re-export commonly used types
pub use ability::{Ability, AbilityResolver, PermissionStore, ResolveOutcome};
pub use gate::{AccessGate, GateDecision, GateState};
pub use guard::Can;
pub use rbac::{GrantStore, RoleGrantManager};
pub use session::{AuthEvent, MemorySessionProvider, SessionProvider, SessionResolver, SessionState};
pub use system::AccessControl;
