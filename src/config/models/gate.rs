//! Route gate configuration

use super::*;
use serde::{Deserialize, Serialize};

/// One entry of the ordered permission-to-route fallback list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Permission key required for the route
    pub permission: String,
    /// Target route
    pub route: String,
}

impl RouteRule {
    pub fn new(permission: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            permission: permission.into(),
            route: route.into(),
        }
    }
}

/// Access gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Login surface for unauthenticated callers
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Surface for callers holding none of the listed permissions
    #[serde(default = "default_no_access_route")]
    pub no_access_route: String,
    /// Root/default route
    #[serde(default = "default_route")]
    pub default_route: String,
    /// Ordered fallback list, evaluated top to bottom
    #[serde(default = "default_route_rules")]
    pub routes: Vec<RouteRule>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            login_route: default_login_route(),
            no_access_route: default_no_access_route(),
            default_route: default_route(),
            routes: default_route_rules(),
        }
    }
}

impl GateConfig {
    /// Merge gate configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.login_route != default_login_route() {
            self.login_route = other.login_route;
        }
        if other.no_access_route != default_no_access_route() {
            self.no_access_route = other.no_access_route;
        }
        if other.default_route != default_route() {
            self.default_route = other.default_route;
        }
        if other.routes != default_route_rules() {
            self.routes = other.routes;
        }
        self
    }
}

/// CRM navigation order
pub fn default_route_rules() -> Vec<RouteRule> {
    vec![
        RouteRule::new("dashboard.view", "/"),
        RouteRule::new("clients.view", "/clients"),
        RouteRule::new("projects.view", "/projects"),
        RouteRule::new("leads.view", "/sales/leads"),
        RouteRule::new("intern_tasks.view", "/interns"),
        RouteRule::new("tasks.view", "/task-management"),
        RouteRule::new("hr.view", "/hr"),
    ]
}
