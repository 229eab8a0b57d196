//! # crm-access
//!
//! Access-control core for the agency CRM: who is signed in, what their role lets them
//! do, where the route gate sends them, and which fragments they may see.
//!
//! ## Features
//!
//! - **Session Resolver**: tracks the current identity through the provider's sign-in and
//!   sign-out events
//! - **Ability Resolver**: identity -> role -> permission set, fail-closed, with a
//!   generation guard against stale in-flight results
//! - **Access Gate**: login redirect and first-permitted-route fallback
//! - **Render Guard**: `Can` wrapper over a permission key
//! - **Storage**: SQLite/PostgreSQL through SeaORM, or in-memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crm_access::auth::{AccessControl, MemorySessionProvider};
//! use crm_access::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/crm-access.yaml").await?;
//!     let provider = Arc::new(MemorySessionProvider::new());
//!     let control = AccessControl::new(&config, provider).await?;
//!
//!     println!("{:?}", control.decide_settled("/").await);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{
    Ability, AbilityResolver, AccessControl, AccessGate, Can, GateDecision, GateState,
    RoleGrantManager, SessionResolver, SessionState,
};
pub use config::Config;
pub use core::models::{AbilitySet, Identity, IdentityId, PermissionKey};
pub use utils::error::{AccessError, Result};
