//! Session type definitions

use crate::core::models::Identity;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Snapshot published by the session resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current identity; absent when signed out or expired
    pub identity: Option<Identity>,
    /// True until the initial session fetch completes
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the first fetch completes
    pub fn pending() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    /// Resolved state with no identity
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    /// Resolved state for `identity`
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    /// Resolved state from an optional identity, dropping unauthenticated or expired ones
    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            identity: identity.filter(|i| i.authenticated && i.is_valid()),
            loading: false,
        }
    }

    /// Same state with an identity whose expiry has passed reported as absent
    pub fn current(&self) -> Self {
        let now = Utc::now();
        Self {
            identity: self
                .identity
                .clone()
                .filter(|i| i.authenticated && i.is_valid_at(now)),
            loading: self.loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Authentication-state change emitted by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "identity", rename_all = "snake_case")]
pub enum AuthEvent {
    /// A caller signed in
    SignedIn(Identity),
    /// The caller signed out
    SignedOut,
    /// The provider refreshed the session token; the identity is unchanged
    TokenRefreshed(Identity),
}
