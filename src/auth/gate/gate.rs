//! Route gate

use super::types::{GateDecision, GateState};
use crate::auth::ability::Ability;
use crate::auth::session::SessionState;
use crate::config::{GateConfig, RouteRule};
use tracing::debug;

/// Route guard over the session and ability resolvers
///
/// Holds no state of its own; every decision is a function of the inputs.
#[derive(Debug, Clone)]
pub struct AccessGate {
    config: GateConfig,
}

impl AccessGate {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Ordered fallback list
    pub fn routes(&self) -> &[RouteRule] {
        &self.config.routes
    }

    /// Current gate state
    ///
    /// Pending until both resolvers have finished loading.
    pub fn state(&self, session: &SessionState, ability: &dyn Ability) -> GateState {
        if session.loading || ability.loading() {
            GateState::Pending
        } else if session.identity.is_none() {
            GateState::Unauthenticated
        } else {
            GateState::Authenticated
        }
    }

    /// Decide what to do for a request to `path`
    pub fn evaluate(
        &self,
        session: &SessionState,
        ability: &dyn Ability,
        path: &str,
    ) -> GateDecision {
        match self.state(session, ability) {
            GateState::Pending => GateDecision::Loading,
            GateState::Unauthenticated => {
                debug!("No identity, redirecting to {}", self.config.login_route);
                GateDecision::RedirectToLogin(self.config.login_route.clone())
            }
            GateState::Authenticated => {
                if normalize_path(path) != normalize_path(&self.config.default_route) {
                    return GateDecision::Render;
                }

                match self.default_route_permission() {
                    Some(permission) if !ability.can(permission) => {
                        let target = self.landing_route(ability);
                        debug!(
                            "Caller lacks '{}', redirecting from {} to {}",
                            permission, path, target
                        );
                        GateDecision::Redirect(target.to_string())
                    }
                    _ => GateDecision::Render,
                }
            }
        }
    }

    /// First route (top to bottom) whose permission the caller holds, else no-access
    pub fn landing_route(&self, ability: &dyn Ability) -> &str {
        self.config
            .routes
            .iter()
            .find(|rule| ability.can(&rule.permission))
            .map(|rule| rule.route.as_str())
            .unwrap_or(self.config.no_access_route.as_str())
    }

    /// Permission guarding the default route, if a rule targets it
    pub fn default_route_permission(&self) -> Option<&str> {
        let default_route = normalize_path(&self.config.default_route);
        self.config
            .routes
            .iter()
            .find(|rule| normalize_path(&rule.route) == default_route)
            .map(|rule| rule.permission.as_str())
    }
}

// Drop query, fragment and trailing slash ("/" stays "/")
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
