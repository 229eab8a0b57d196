//! Ability resolution integration tests
//!
//! Resolves abilities against a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::{PersonnelFactory, enroll, enroll_without_role};
    use crm_access::auth::{Ability, AbilityResolver, ResolveOutcome, SessionState};
    use crm_access::config::RbacConfig;
    use crm_access::core::models::Identity;

    fn resolver(db: &TestDatabase, config: &RbacConfig) -> AbilityResolver {
        AbilityResolver::new(config, db.db_arc())
    }

    /// An intern holds exactly the intern board permission
    #[tokio::test]
    async fn test_intern_abilities() {
        let db = TestDatabase::seeded().await;
        let intern = enroll(db.db(), "Thực tập").await;
        let abilities = resolver(&db, &RbacConfig::default());

        let outcome = abilities.resolve(&SessionState::authenticated(intern)).await;
        assert_eq!(outcome, ResolveOutcome::Applied);
        assert!(!abilities.loading());

        assert!(abilities.can("intern_tasks.view"));
        for denied in ["dashboard.view", "clients.view", "hr.view", "tasks.view"] {
            assert!(!abilities.can(denied), "intern should not hold {}", denied);
        }
        assert_eq!(abilities.abilities().sorted(), vec!["intern_tasks.view"]);
    }

    /// Resolved abilities are a subset of the permission universe
    #[tokio::test]
    async fn test_abilities_within_universe() {
        let db = TestDatabase::seeded().await;
        let universe = db.db().all_permission_names().await.unwrap();
        let abilities = resolver(&db, &RbacConfig::default());

        for role in ["BOD", "Quản lý", "Nhân viên", "Thực tập"] {
            let identity = enroll(db.db(), role).await;
            abilities.resolve(&SessionState::authenticated(identity)).await;
            assert!(abilities.abilities().is_subset_of(universe.iter().map(String::as_str)));
            assert!(!abilities.abilities().is_empty(), "{} should hold grants", role);
        }
    }

    /// Personnel without a role, or without a row, resolve to nothing
    #[tokio::test]
    async fn test_missing_role_or_personnel_denies() {
        let db = TestDatabase::seeded().await;
        let abilities = resolver(&db, &RbacConfig::default());

        let unassigned = enroll_without_role(db.db()).await;
        abilities.resolve(&SessionState::authenticated(unassigned)).await;
        assert!(abilities.abilities().is_empty());
        assert!(!abilities.loading());

        let stranger = Identity::new(PersonnelFactory::create().id);
        abilities.resolve(&SessionState::authenticated(stranger)).await;
        assert!(abilities.abilities().is_empty());
        assert!(!abilities.can("dashboard.view"));
    }

    /// No identity resolves to an empty, loaded set
    #[tokio::test]
    async fn test_signed_out_denies() {
        let db = TestDatabase::seeded().await;
        let abilities = resolver(&db, &RbacConfig::default());

        abilities.resolve(&SessionState::anonymous()).await;
        assert!(abilities.abilities().is_empty());
        assert!(!abilities.loading());
    }

    /// Configured admin roles hold every permission
    #[tokio::test]
    async fn test_admin_role_holds_universe() {
        let db = TestDatabase::seeded().await;
        let staff = enroll(db.db(), "Nhân viên").await;
        let config = RbacConfig {
            admin_roles: vec!["Nhân viên".to_string()],
            ..RbacConfig::default()
        };
        let abilities = resolver(&db, &config);

        abilities.resolve(&SessionState::authenticated(staff)).await;

        let universe = db.db().all_permission_names().await.unwrap();
        assert_eq!(abilities.abilities().len(), universe.len());
        assert!(abilities.can("hr.delete"));
    }

    /// Saved grants are visible after the next resolution
    #[tokio::test]
    async fn test_resolution_follows_saved_grants() {
        let db = TestDatabase::seeded().await;
        let intern = enroll(db.db(), "Thực tập").await;
        let session = SessionState::authenticated(intern);
        let abilities = resolver(&db, &RbacConfig::default());
        abilities.resolve(&session).await;
        assert!(!abilities.can("hr.view"));
        assert_eq!(abilities.ensure_fresh(&session).await, ResolveOutcome::Fresh);

        let role = db.db().find_role_by_name("Thực tập").await.unwrap().unwrap();
        let hr = db.db().find_permission_by_name("hr.view").await.unwrap().unwrap();
        db.db().replace_role_permissions(role.id, &[hr.id]).await.unwrap();

        abilities.invalidate();
        assert!(abilities.is_stale());
        assert_eq!(abilities.ensure_fresh(&session).await, ResolveOutcome::Applied);
        assert!(abilities.can("hr.view"));
        assert!(!abilities.can("intern_tasks.view"));
    }

    /// Only the newest of two overlapping resolutions is applied
    #[tokio::test]
    async fn test_overlapping_resolutions() {
        let db = TestDatabase::seeded().await;
        let intern = enroll(db.db(), "Thực tập").await;
        let manager = enroll(db.db(), "Quản lý").await;
        let abilities = resolver(&db, &RbacConfig::default());

        let first = abilities.begin(&SessionState::authenticated(intern));
        let second = abilities.begin(&SessionState::authenticated(manager.clone()));
        assert!(second.generation() > first.generation());

        assert_eq!(abilities.finish(second).await, ResolveOutcome::Applied);
        assert_eq!(abilities.finish(first).await, ResolveOutcome::Superseded);

        assert_eq!(abilities.key().map(|k| k.identity), Some(manager.id));
        assert!(abilities.can("dashboard.view"));
    }
}
