//! Core functionality for the access-control core
//!
//! This module contains the shared data structures.

pub mod models;
