//! Route gate configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::models::PermissionKey;
use tracing::debug;

fn validate_route(name: &str, route: &str) -> Result<(), String> {
    if !route.starts_with('/') {
        return Err(format!("{} '{}' must start with '/'", name, route));
    }
    Ok(())
}

impl Validate for GateConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gate configuration");

        validate_route("Login route", &self.login_route)?;
        validate_route("No-access route", &self.no_access_route)?;
        validate_route("Default route", &self.default_route)?;

        if self.login_route == self.no_access_route {
            return Err("Login route and no-access route must differ".to_string());
        }

        for rule in &self.routes {
            rule.validate()?;
        }

        Ok(())
    }
}

impl Validate for RouteRule {
    fn validate(&self) -> Result<(), String> {
        PermissionKey::parse(&self.permission).map_err(|e| e.to_string())?;
        validate_route("Route", &self.route)
    }
}
