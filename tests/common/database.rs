//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use crm_access::auth::rbac::seed_catalog;
use crm_access::config::DatabaseConfig;
use crm_access::storage::StorageLayer;
use crm_access::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory test database
    ///
    /// Each call creates a completely isolated database instance.
    pub async fn new() -> Self {
        let db = create_test_db().await;
        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database holding the default permission catalog
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        seed_catalog(db.db())
            .await
            .expect("Failed to seed permission catalog");
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }

    /// Storage layer sharing this database connection
    pub fn storage(&self) -> StorageLayer {
        // In-memory SQLite lives on one connection, so hand out a fresh handle to it
        StorageLayer::from_database(Database::from_connection(self.inner.connection().clone()))
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig::in_memory()
}

/// Create a standalone test database (convenience function)
pub async fn create_test_db() -> Database {
    let config = test_db_config();
    let db = Database::new(&config)
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_database() {
        let db = TestDatabase::seeded().await;
        assert!(!db.db().list_roles().await.unwrap().is_empty());
    }
}
