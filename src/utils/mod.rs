//! Utility modules for the access-control core
//!
//! - **error**: Error type and result alias
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use logging::init_tracing;
