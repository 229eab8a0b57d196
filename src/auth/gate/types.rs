//! Gate type definitions

use serde::{Deserialize, Serialize};

/// Gate state derived from the session and ability resolvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Session or abilities still loading
    Pending,
    /// Both resolved, no identity
    Unauthenticated,
    /// Both resolved, identity present
    Authenticated,
}

/// What the caller should do for a requested path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "route", rename_all = "snake_case")]
pub enum GateDecision {
    /// Show the loading placeholder; render nothing gated
    Loading,
    /// Redirect to the login surface
    RedirectToLogin(String),
    /// Redirect to another route (first permitted route or the no-access surface)
    Redirect(String),
    /// Render the requested route
    Render,
}

impl GateDecision {
    /// Redirect target, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::RedirectToLogin(route) | Self::Redirect(route) => Some(route),
            Self::Loading | Self::Render => None,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}
