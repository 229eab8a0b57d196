//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `access_validators`: Root and logging validators
//! - `auth_validators`: RBAC validators
//! - `gate_validators`: Route gate validators
//! - `storage_validators`: Storage validators
//! - `tests`: Test suite for all validators

mod access_validators;
mod auth_validators;
mod gate_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
