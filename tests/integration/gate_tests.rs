//! Route gate integration tests
//!
//! Drives the access-control facade end to end over an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::enroll;
    use crm_access::auth::{
        AccessControl, Can, GateDecision, GateState, MemorySessionProvider, SessionProvider,
    };
    use crm_access::config::{Config, RouteRule};
    use std::sync::Arc;
    use std::time::Duration;

    fn open_control(
        db: &TestDatabase,
        config: &Config,
        provider: Arc<dyn SessionProvider>,
    ) -> AccessControl {
        AccessControl::with_storage(config, db.storage(), provider)
    }

    async fn settled(control: &AccessControl, path: &str) -> GateDecision {
        tokio::time::timeout(Duration::from_secs(5), control.decide_settled(path))
            .await
            .expect("access control did not settle")
    }

    /// Each catalog role lands where the navigation order sends it
    #[tokio::test]
    async fn test_landing_per_role() {
        let db = TestDatabase::seeded().await;
        let cases = [
            ("BOD", GateDecision::Render),
            ("Quản lý", GateDecision::Render),
            ("Nhân viên", GateDecision::Render),
            ("Thực tập", GateDecision::Redirect("/interns".to_string())),
        ];

        for (role, expected) in cases {
            let identity = enroll(db.db(), role).await;
            let provider = Arc::new(MemorySessionProvider::with_session(identity));
            let control = open_control(&db, &Config::default(), provider);
            assert_eq!(settled(&control, "/").await, expected, "role {}", role);
        }
    }

    /// A caller whose role lost every grant ends on the no-access surface
    #[tokio::test]
    async fn test_no_grants_lands_on_no_access() {
        let db = TestDatabase::seeded().await;
        let identity = enroll(db.db(), "Nhân viên").await;
        let role = db.db().find_role_by_name("Nhân viên").await.unwrap().unwrap();
        db.db().replace_role_permissions(role.id, &[]).await.unwrap();

        let provider = Arc::new(MemorySessionProvider::with_session(identity));
        let control = open_control(&db, &Config::default(), provider);

        assert_eq!(
            settled(&control, "/").await,
            GateDecision::Redirect("/no-access".to_string())
        );
        // Non-default routes are left to their own guards
        assert_eq!(control.decide("/clients"), GateDecision::Render);
    }

    /// Signed-out callers are sent to login from any path
    #[tokio::test]
    async fn test_signed_out_redirects_to_login() {
        let db = TestDatabase::seeded().await;
        let provider = Arc::new(MemorySessionProvider::new());
        let control = open_control(&db, &Config::default(), provider);

        for path in ["/", "/hr", "/interns"] {
            assert_eq!(
                settled(&control, path).await,
                GateDecision::RedirectToLogin("/login".to_string())
            );
        }
        assert_eq!(control.state(), GateState::Unauthenticated);
    }

    /// The route list comes from configuration
    #[tokio::test]
    async fn test_configured_route_order() {
        let db = TestDatabase::seeded().await;
        let staff = enroll(db.db(), "Nhân viên").await;

        let mut config = Config::default();
        config.access.gate.routes = vec![
            RouteRule::new("hr.view", "/"),
            RouteRule::new("tasks.view", "/task-management"),
            RouteRule::new("leads.view", "/sales/leads"),
        ];
        let provider = Arc::new(MemorySessionProvider::with_session(staff));
        let control = open_control(&db, &config, provider);

        assert_eq!(
            settled(&control, "/").await,
            GateDecision::Redirect("/task-management".to_string())
        );
    }

    /// Guards follow the abilities the facade resolved
    #[tokio::test]
    async fn test_guards_follow_resolved_abilities() {
        let db = TestDatabase::seeded().await;
        let intern = enroll(db.db(), "Thực tập").await;
        let provider = Arc::new(MemorySessionProvider::with_session(intern));
        let control = open_control(&db, &Config::default(), provider);
        settled(&control, "/").await;

        let menu = [
            (Can::new("dashboard.view"), "Dashboard"),
            (Can::new("intern_tasks.view"), "Interns"),
            (Can::any(["hr.view", "hr.edit"]), "HR"),
        ];
        let visible: Vec<_> = Can::filter(control.ability(), menu).collect();
        assert_eq!(visible, vec!["Interns"]);

        let button = Can::new("intern_tasks.create").render(control.ability(), || "New task");
        assert!(button.is_none());
    }

    /// Sign-in and sign-out flow through to the gate
    #[tokio::test]
    async fn test_session_changes_reach_the_gate() {
        let db = TestDatabase::seeded().await;
        let intern = enroll(db.db(), "Thực tập").await;
        let provider = Arc::new(MemorySessionProvider::new());
        let control = open_control(&db, &Config::default(), provider.clone());
        settled(&control, "/").await;

        provider.sign_in(intern.clone());
        let mut session_rx = control.session().subscribe();
        tokio::time::timeout(
            Duration::from_secs(5),
            session_rx.wait_for(|s| s.identity.as_ref().map(|i| i.id) == Some(intern.id)),
        )
        .await
        .expect("session did not follow sign-in")
        .unwrap();
        assert_eq!(
            settled(&control, "/").await,
            GateDecision::Redirect("/interns".to_string())
        );

        provider.sign_out();
        tokio::time::timeout(
            Duration::from_secs(5),
            session_rx.wait_for(|s| s.identity.is_none()),
        )
        .await
        .expect("session did not follow sign-out")
        .unwrap();
        assert_eq!(
            settled(&control, "/").await,
            GateDecision::RedirectToLogin("/login".to_string())
        );
        assert!(!control.can("intern_tasks.view"));
    }
}
