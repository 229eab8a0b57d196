//! Authenticated caller identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of an authenticated caller
///
/// The same id keys the caller's personnel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a fresh random identity id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IdentityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for IdentityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// The authenticated caller's session reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Identity id
    pub id: IdentityId,
    /// Whether the authentication flow accepted this session
    pub authenticated: bool,
    /// Session expiry (none means the provider did not report one)
    pub expires_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Create an authenticated identity without expiry
    pub fn new(id: IdentityId) -> Self {
        Self {
            id,
            authenticated: true,
            expires_at: None,
        }
    }

    /// Create an authenticated identity expiring at `expires_at`
    pub fn with_expiry(id: IdentityId, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            authenticated: true,
            expires_at: Some(expires_at),
        }
    }

    /// Whether the identity is usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.authenticated && self.expires_at.is_none_or(|expiry| expiry > now)
    }

    /// Whether the identity is usable right now
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
