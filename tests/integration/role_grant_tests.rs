//! Role-grant administration integration tests
//!
//! Seeds the default catalog into SQLite and edits role grants by name.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::{assert_err, assert_ok};
    use crm_access::auth::RoleGrantManager;
    use crm_access::auth::rbac::catalog::{DEFAULT_PERMISSIONS, DEFAULT_ROLES};
    use crm_access::auth::rbac::seed_catalog;
    use crm_access::utils::error::AccessError;

    fn manager(db: &TestDatabase) -> RoleGrantManager {
        RoleGrantManager::new(db.db_arc())
    }

    /// Seeding creates the full catalog once
    #[tokio::test]
    async fn test_seed_catalog() {
        let db = TestDatabase::new().await;

        let report = assert_ok!(seed_catalog(db.db()).await);
        assert_eq!(report.permissions, DEFAULT_PERMISSIONS.len());
        assert_eq!(report.roles, DEFAULT_ROLES.len());
        assert_eq!(report.roles_granted, DEFAULT_ROLES.len());

        let again = assert_ok!(seed_catalog(db.db()).await);
        assert_eq!(again.roles_granted, 0);
        assert_eq!(
            assert_ok!(db.db().list_permissions().await).len(),
            DEFAULT_PERMISSIONS.len()
        );
        assert_eq!(
            assert_ok!(db.db().list_roles().await).len(),
            DEFAULT_ROLES.len()
        );
    }

    /// Reseeding leaves edited grants alone
    #[tokio::test]
    async fn test_reseed_keeps_edits() {
        let db = TestDatabase::seeded().await;
        let grants = manager(&db);

        assert_ok!(grants.replace_grants("Thực tập", &["tasks.view"]).await);
        assert_ok!(seed_catalog(db.db()).await);

        let saved = assert_ok!(grants.grants("Thực tập").await);
        assert_eq!(saved.names(), vec!["tasks.view"]);
    }

    /// Replaced grants round-trip through the database
    #[tokio::test]
    async fn test_replace_grants_round_trip() {
        let db = TestDatabase::seeded().await;
        let grants = manager(&db);

        let saved = assert_ok!(
            grants
                .replace_grants("Nhân viên", &["leads.view", "clients.view", "leads.view"])
                .await
        );
        assert_eq!(saved.names(), vec!["clients.view", "leads.view"]);

        let loaded = assert_ok!(grants.grants("Nhân viên").await);
        assert_eq!(loaded, saved);
    }

    /// Unknown or malformed keys are rejected and nothing changes
    #[tokio::test]
    async fn test_replace_grants_rejects_bad_keys() {
        let db = TestDatabase::seeded().await;
        let grants = manager(&db);
        let before = assert_ok!(grants.grants("Thực tập").await);

        let err = assert_err!(
            grants
                .replace_grants("Thực tập", &["intern_tasks.view", "payroll.view"])
                .await
        );
        assert!(matches!(err, AccessError::Validation(_)));

        let err = assert_err!(grants.replace_grants("Thực tập", &["not a key"]).await);
        assert!(matches!(err, AccessError::Validation(_)));

        assert_eq!(assert_ok!(grants.grants("Thực tập").await), before);
    }

    /// Unknown roles are reported as not found
    #[tokio::test]
    async fn test_unknown_role() {
        let db = TestDatabase::seeded().await;
        let err = assert_err!(manager(&db).grants("Ghost").await);
        assert!(matches!(err, AccessError::NotFound(_)));
    }

    /// Permissions group by module in lexical order
    #[tokio::test]
    async fn test_grouped_permissions() {
        let db = TestDatabase::seeded().await;
        let groups = assert_ok!(manager(&db).grouped_permissions().await);

        let modules: Vec<_> = groups.iter().map(|g| g.module.as_str()).collect();
        let mut sorted = modules.clone();
        sorted.sort();
        assert_eq!(modules, sorted);

        let reports = groups.iter().find(|g| g.module == "reports").unwrap();
        assert_eq!(reports.permissions.len(), 4);
        assert_eq!(
            groups.iter().map(|g| g.permissions.len()).sum::<usize>(),
            DEFAULT_PERMISSIONS.len()
        );
    }
}
