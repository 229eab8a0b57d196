//! Session resolution
//!
//! Exposes the currently authenticated identity and whether it is still being
//! determined.

mod provider;
mod resolver;
mod types;

pub use provider::{MemorySessionProvider, SessionProvider};
pub use resolver::SessionResolver;
pub use types::{AuthEvent, SessionState};
