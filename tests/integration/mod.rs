//! Integration tests for crm-access
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior against an in-memory SQLite database.

pub mod ability_tests;
pub mod config_validation_tests;
pub mod gate_tests;
pub mod role_grant_tests;
