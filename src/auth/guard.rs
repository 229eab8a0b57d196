//! Conditional render guard
//!
//! Wraps content behind a permission check; composes with any content type instead of
//! being a base type that gated components inherit from.

use super::ability::Ability;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Requirement {
    One(String),
    Any(Vec<String>),
}

/// Renders content only when the current ability set allows it
///
/// Stateless: every call re-reads `can`, so content follows ability changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Can {
    requirement: Requirement,
}

impl Can {
    /// Require a single permission key
    pub fn new(permission: impl Into<String>) -> Self {
        Self {
            requirement: Requirement::One(permission.into()),
        }
    }

    /// Require any one of several keys (an empty list allows nothing)
    pub fn any<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requirement: Requirement::Any(permissions.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether the content would be rendered right now
    pub fn allows(&self, ability: &dyn Ability) -> bool {
        match &self.requirement {
            Requirement::One(permission) => ability.can(permission),
            Requirement::Any(permissions) => permissions.iter().any(|p| ability.can(p)),
        }
    }

    /// Produce the content when allowed, nothing otherwise
    pub fn render<T, F>(&self, ability: &dyn Ability, content: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        self.allows(ability).then(content)
    }

    /// Keep only the items whose guard allows them, preserving order
    pub fn filter<'a, T: 'a>(
        ability: &'a dyn Ability,
        items: impl IntoIterator<Item = (Can, T)> + 'a,
    ) -> impl Iterator<Item = T> + 'a {
        items
            .into_iter()
            .filter_map(move |(guard, item)| guard.allows(ability).then_some(item))
    }
}
