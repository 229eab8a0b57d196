// Module declarations
mod connection;
mod permission_ops;
mod personnel_ops;
mod role_ops;
mod store;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
