//! Storage layer for the access-control core
//!
//! This module provides the role/permission persistence behind the store traits.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::auth::ability::PermissionStore;
use crate::auth::rbac::GrantStore;
use crate::config::StorageConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use memory::MemoryStore;

/// Backend selected by the storage configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// SeaORM database (SQLite or PostgreSQL)
    Database(Arc<database::Database>),
    /// Process-local tables
    Memory(Arc<MemoryStore>),
}

/// Main storage layer that hands out the store trait objects
#[derive(Debug, Clone)]
pub struct StorageLayer {
    backend: StorageBackend,
}

/// Storage health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageHealthStatus {
    /// Backend name ("database" or "memory")
    pub backend: String,
    /// Whether the backend answered
    pub healthy: bool,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if !config.database.enabled {
            debug!("Database disabled, using in-memory storage");
            return Ok(Self::in_memory());
        }

        debug!("Connecting to database");
        let database = database::Database::new(&config.database).await?;

        info!("Storage layer initialized successfully");
        Ok(Self::from_database(database))
    }

    /// Storage layer over an empty in-memory store
    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::Memory(Arc::new(MemoryStore::new())),
        }
    }

    /// Storage layer over an existing database connection
    pub fn from_database(database: database::Database) -> Self {
        Self {
            backend: StorageBackend::Database(Arc::new(database)),
        }
    }

    /// Selected backend
    pub fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    /// Read seam for the ability resolver
    pub fn permission_store(&self) -> Arc<dyn PermissionStore> {
        match &self.backend {
            StorageBackend::Database(db) => db.clone(),
            StorageBackend::Memory(store) => store.clone(),
        }
    }

    /// Write seam for role-grant administration
    pub fn grant_store(&self) -> Arc<dyn GrantStore> {
        match &self.backend {
            StorageBackend::Database(db) => db.clone(),
            StorageBackend::Memory(store) => store.clone(),
        }
    }

    /// Run database migrations (no-op for in-memory storage)
    pub async fn migrate(&self) -> Result<()> {
        match &self.backend {
            StorageBackend::Database(db) => {
                info!("Running database migrations");
                db.migrate().await?;
                info!("Database migrations completed");
            }
            StorageBackend::Memory(_) => debug!("In-memory storage needs no migrations"),
        }
        Ok(())
    }

    /// Health check for the selected backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        match &self.backend {
            StorageBackend::Database(db) => {
                let healthy = match db.health_check().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Database health check failed: {}", e);
                        false
                    }
                };
                StorageHealthStatus {
                    backend: "database".to_string(),
                    healthy,
                }
            }
            StorageBackend::Memory(_) => StorageHealthStatus {
                backend: "memory".to_string(),
                healthy: true,
            },
        }
    }

    /// Get the database, when that is the selected backend
    pub fn db(&self) -> Option<&database::Database> {
        match &self.backend {
            StorageBackend::Database(db) => Some(db),
            StorageBackend::Memory(_) => None,
        }
    }
}
