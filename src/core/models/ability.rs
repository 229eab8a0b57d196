//! Derived per-identity ability set

use super::identity::IdentityId;
use super::role::RoleId;
use std::collections::{BTreeSet, HashSet};

/// Permission keys available to the current identity
///
/// Derived, never persisted. Empty (not absent) when there is no identity, no role,
/// no grant, or when resolution failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    keys: HashSet<String>,
}

impl AbilitySet {
    /// The empty ability set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Materialize a set from projected permission names, dropping missing projections
    pub fn from_projection<I>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            keys: names.into_iter().flatten().filter(|n| !n.is_empty()).collect(),
        }
    }

    /// Pure set membership
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in lexical order
    pub fn sorted(&self) -> Vec<&str> {
        let ordered: BTreeSet<&str> = self.keys.iter().map(String::as_str).collect();
        ordered.into_iter().collect()
    }

    /// Whether every key belongs to `universe`
    pub fn is_subset_of<'a, I>(&self, universe: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let universe: HashSet<&str> = universe.into_iter().collect();
        self.keys.iter().all(|k| universe.contains(k.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for AbilitySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cache key of a resolved ability set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbilityKey {
    /// Identity the set was resolved for
    pub identity: IdentityId,
    /// Role the set was resolved from (none when no role is assigned)
    pub role: Option<RoleId>,
}
