//! Test fixtures and data factories
//!
//! Provides factory methods for creating personnel bound to catalog roles.
//! All factories write real rows, not mocks.

use crm_access::auth::GrantStore;
use crm_access::core::models::{Identity, IdentityId, Personnel};

/// Factory for creating personnel records
pub struct PersonnelFactory;

impl PersonnelFactory {
    /// Create a personnel record without a role
    pub fn create() -> Personnel {
        let id = IdentityId::new();
        let short = &id.to_string()[..8];
        Personnel::new(
            id,
            format!("Staff {}", short),
            format!("staff-{}@example.com", short),
        )
    }

    /// Create an inactive personnel record
    pub fn inactive() -> Personnel {
        let mut record = Self::create();
        record.status = "Inactive".to_string();
        record
    }

    /// Create a personnel record with a specific email
    pub fn with_email(email: &str) -> Personnel {
        let mut record = Self::create();
        record.email = email.to_string();
        record
    }
}

/// Insert a personnel row assigned to `role_name` and return its identity
pub async fn enroll(store: &dyn GrantStore, role_name: &str) -> Identity {
    let role = store
        .find_role_by_name(role_name)
        .await
        .expect("Failed to look up role")
        .unwrap_or_else(|| panic!("Role '{}' is not seeded", role_name));

    let record = PersonnelFactory::create().with_role(role.id);
    store
        .upsert_personnel(&record)
        .await
        .expect("Failed to insert personnel");

    Identity::new(record.id)
}

/// Insert a personnel row with no role and return its identity
pub async fn enroll_without_role(store: &dyn GrantStore) -> Identity {
    let record = PersonnelFactory::create();
    store
        .upsert_personnel(&record)
        .await
        .expect("Failed to insert personnel");

    Identity::new(record.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personnel_factory() {
        let record = PersonnelFactory::create();
        assert!(record.email.ends_with("@example.com"));
        assert_eq!(record.status, "Active");
        assert!(record.role_id.is_none());
    }

    #[test]
    fn test_inactive_personnel() {
        assert_eq!(PersonnelFactory::inactive().status, "Inactive");
    }

    #[test]
    fn test_unique_emails() {
        assert_ne!(
            PersonnelFactory::create().email,
            PersonnelFactory::create().email
        );
    }
}
