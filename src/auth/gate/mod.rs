//! Access gate (route guard)
//!
//! Redirects unauthenticated callers to login and authenticated callers without the
//! default route's permission to their first permitted route.

mod gate;
mod types;

pub use gate::AccessGate;
pub use types::{GateDecision, GateState};
