//! Configuration validation integration tests
//!
//! Tests for configuration validation across all config components.
//! These tests verify that configuration validates correctly and fails
//! appropriately for invalid configurations.

#[cfg(test)]
mod tests {
    use crm_access::config::models::{
        AccessConfig, DatabaseConfig, GateConfig, LoggingConfig, RbacConfig, RouteRule,
        StorageConfig,
    };
    use crm_access::config::{Config, Validate};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== AccessConfig Validation ====================

    /// Test that the default config passes validation
    #[test]
    fn test_default_access_config() {
        let config = AccessConfig::default();
        assert!(config.validate().is_ok());
    }

    /// Test that a fully populated config passes validation
    #[test]
    fn test_valid_access_config() {
        let config = create_valid_access_config();
        assert!(config.validate().is_ok());
    }

    /// Test that a nested error surfaces from the root
    #[test]
    fn test_access_config_propagates_gate_error() {
        let mut config = create_valid_access_config();
        config.gate.login_route = "login".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must start with '/'"));
    }

    // ==================== GateConfig Validation ====================

    /// Test that login and no-access routes must differ
    #[test]
    fn test_gate_config_same_surfaces() {
        let config = GateConfig {
            no_access_route: "/login".to_string(),
            ..GateConfig::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must differ"));
    }

    /// Test that malformed permission keys in route rules fail
    #[test]
    fn test_gate_config_bad_permission_key() {
        let mut config = GateConfig::default();
        config.routes.push(RouteRule::new("Dashboard", "/"));

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid permission key"));
    }

    /// Test that relative rule routes fail
    #[test]
    fn test_gate_config_relative_rule_route() {
        let config = GateConfig {
            routes: vec![RouteRule::new("hr.view", "hr")],
            ..GateConfig::default()
        };

        assert!(config.validate().is_err());
    }

    /// Test that an empty route list is allowed
    #[test]
    fn test_gate_config_empty_routes() {
        let config = GateConfig {
            routes: Vec::new(),
            ..GateConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    // ==================== RbacConfig Validation ====================

    /// Test that blank admin role names fail
    #[test]
    fn test_rbac_config_blank_admin_role() {
        let config = RbacConfig {
            admin_roles: vec!["BOD".to_string(), "  ".to_string()],
            ..RbacConfig::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Admin role"));
    }

    /// Test the TTL upper bound
    #[test]
    fn test_rbac_config_ttl_bounds() {
        let mut config = RbacConfig::default();
        config.ability_ttl_secs = 0;
        assert!(config.validate().is_ok());

        config.ability_ttl_secs = 86400;
        assert!(config.validate().is_ok());

        config.ability_ttl_secs = 86401;
        assert!(config.validate().is_err());
    }

    // ==================== StorageConfig Validation ====================

    /// Test that a disabled database skips URL checks
    #[test]
    fn test_disabled_database_not_checked() {
        let config = DatabaseConfig {
            url: String::new(),
            enabled: false,
            ..DatabaseConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    /// Test that unsupported database schemes fail
    #[test]
    fn test_unsupported_database_url() {
        let config = StorageConfig {
            database: DatabaseConfig {
                url: "mysql://localhost/crm".to_string(),
                ..DatabaseConfig::in_memory()
            },
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("SQLite and PostgreSQL"));
    }

    /// Test that zero connections fail
    #[test]
    fn test_database_zero_connections() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..DatabaseConfig::in_memory()
        };

        assert!(config.validate().is_err());
    }

    // ==================== LoggingConfig Validation ====================

    /// Test log level names
    #[test]
    fn test_logging_levels() {
        for level in ["trace", "DEBUG", "info", "warn", "error", "off"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..LoggingConfig::default()
            };
            assert!(config.validate().is_ok(), "level {} should be valid", level);
        }

        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // ==================== File Loading ====================

    /// Test that an invalid file is rejected on load
    #[tokio::test]
    async fn test_config_file_with_invalid_gate() {
        let content = r#"
gate:
  login_route: "/login"
  no_access_route: "/login"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Gate config error"));
    }

    /// Test that a missing file is a configuration error
    #[tokio::test]
    async fn test_config_file_missing() {
        let result = Config::from_file("/nonexistent/crm-access.yaml").await;
        assert!(result.is_err());
    }

    /// Test that config serializes back to YAML that loads again
    #[tokio::test]
    async fn test_config_yaml_reload() {
        let config = Config {
            access: create_valid_access_config(),
        };
        let yaml = config.to_yaml().unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = Config::from_file(file.path()).await.unwrap();
        assert_eq!(loaded.rbac().admin_roles, vec!["BOD".to_string()]);
        assert_eq!(loaded.gate().routes, config.gate().routes);
        assert_eq!(loaded.storage().database.url, "sqlite::memory:");
    }

    // ==================== Helper Functions ====================

    fn create_valid_access_config() -> AccessConfig {
        AccessConfig {
            storage: StorageConfig {
                database: DatabaseConfig::in_memory(),
            },
            rbac: RbacConfig {
                admin_roles: vec!["BOD".to_string()],
                ability_ttl_secs: 120,
            },
            gate: GateConfig {
                routes: vec![
                    RouteRule::new("dashboard.view", "/"),
                    RouteRule::new("reports.sales.view", "/reports/sales"),
                ],
                ..GateConfig::default()
            },
            logging: LoggingConfig::default(),
        }
    }
}
