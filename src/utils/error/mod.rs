//! Error handling utilities
//!
//! This module provides the crate error type and the `Result` alias used everywhere.

pub mod error;

// Re-export commonly used types
pub use error::*;
