//! Ability resolution: identity -> role -> permission set

use super::Ability;
use super::store::PermissionStore;
use crate::auth::session::SessionState;
use crate::config::RbacConfig;
use crate::core::models::{AbilityKey, AbilitySet, IdentityId, RoleId};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Outcome of one resolution request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The computed set was published
    Applied,
    /// The cached set was already current; nothing was computed
    Fresh,
    /// A newer request started first; the result was dropped
    Superseded,
    /// The session is still loading; nothing was computed
    Pending,
}

/// A started resolution request
#[derive(Debug, Clone)]
pub struct ResolveTicket {
    generation: u64,
    session: SessionState,
}

impl ResolveTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct AbilityState {
    abilities: Arc<AbilitySet>,
    key: Option<AbilityKey>,
    loading: bool,
    resolved_at: Option<Instant>,
    // Latest request generation; only its result is applied
    generation: u64,
}

impl Default for AbilityState {
    fn default() -> Self {
        Self {
            abilities: Arc::new(AbilitySet::empty()),
            key: None,
            loading: true,
            resolved_at: None,
            generation: 0,
        }
    }
}

/// Single-writer ability cache for the current identity
///
/// `can` is a synchronous read of the last applied set. Resolution failures collapse to
/// the empty set; they are logged, never returned.
#[derive(Clone)]
pub struct AbilityResolver {
    config: Arc<RbacConfig>,
    store: Arc<dyn PermissionStore>,
    state: Arc<RwLock<AbilityState>>,
}

impl std::fmt::Debug for AbilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("AbilityResolver")
            .field("key", &state.key)
            .field("loading", &state.loading)
            .field("abilities", &state.abilities.len())
            .finish()
    }
}

impl AbilityResolver {
    /// Create a resolver; it reports `loading` until the first resolution completes
    pub fn new(config: &RbacConfig, store: Arc<dyn PermissionStore>) -> Self {
        Self {
            config: Arc::new(config.clone()),
            store,
            state: Arc::new(RwLock::new(AbilityState::default())),
        }
    }

    /// Resolve the ability set for `session` and publish it if still current
    pub async fn resolve(&self, session: &SessionState) -> ResolveOutcome {
        let ticket = self.begin(session);
        self.finish(ticket).await
    }

    /// Start a request: bumps the generation, so any in-flight request becomes stale
    pub fn begin(&self, session: &SessionState) -> ResolveTicket {
        let mut state = self.state.write();
        state.generation += 1;
        state.loading = true;

        let identity = session.identity.as_ref().map(|i| i.id);
        if state.key.map(|k| k.identity) != identity {
            // Identity changed: never serve the previous identity's set
            state.abilities = Arc::new(AbilitySet::empty());
            state.key = None;
            state.resolved_at = None;
        }

        ResolveTicket {
            generation: state.generation,
            session: session.clone(),
        }
    }

    /// Complete a request started with [`begin`](Self::begin)
    pub async fn finish(&self, ticket: ResolveTicket) -> ResolveOutcome {
        if ticket.session.loading {
            debug!("Session still loading, deferring ability resolution");
            return ResolveOutcome::Pending;
        }

        let Some(identity) = ticket.session.identity.as_ref() else {
            debug!("No identity, ability set is empty");
            return self.apply(ticket.generation, None, AbilitySet::empty());
        };

        let (role, abilities) = match self.load(identity.id).await {
            Ok(resolved) => resolved,
            Err(e) if e.is_transport() => {
                warn!(
                    "Data service unavailable while resolving {}, denying all: {}",
                    identity.id, e
                );
                (None, AbilitySet::empty())
            }
            Err(e) => {
                error!(
                    "Failed to resolve permissions for {}, denying all: {}",
                    identity.id, e
                );
                (None, AbilitySet::empty())
            }
        };

        let key = AbilityKey {
            identity: identity.id,
            role,
        };
        self.apply(ticket.generation, Some(key), abilities)
    }

    async fn load(&self, identity: IdentityId) -> Result<(Option<RoleId>, AbilitySet)> {
        debug!("Resolving role for identity: {}", identity);

        let Some(assignment) = self.store.find_role_assignment(identity).await? else {
            debug!("Identity {} has no role assigned", identity);
            return Ok((None, AbilitySet::empty()));
        };

        if self.config.is_admin_role(&assignment.role_name) {
            debug!(
                "Role '{}' is an administrator role, granting the full universe",
                assignment.role_name
            );
            let names = self.store.all_permission_names().await?;
            return Ok((Some(assignment.role_id), names.into_iter().collect()));
        }

        let names = self
            .store
            .role_permission_names(assignment.role_id)
            .await?;
        debug!(
            "Role '{}' has {} grant rows",
            assignment.role_name,
            names.len()
        );

        Ok((
            Some(assignment.role_id),
            AbilitySet::from_projection(names),
        ))
    }

    fn apply(
        &self,
        generation: u64,
        key: Option<AbilityKey>,
        abilities: AbilitySet,
    ) -> ResolveOutcome {
        let mut state = self.state.write();
        if state.generation != generation {
            debug!(
                "Discarding stale ability result (generation {}, current {})",
                generation, state.generation
            );
            return ResolveOutcome::Superseded;
        }

        state.abilities = Arc::new(abilities);
        state.key = key;
        state.loading = false;
        state.resolved_at = Some(Instant::now());
        ResolveOutcome::Applied
    }

    /// Re-run resolution on every session state change
    ///
    /// Each change starts a request immediately and completes it on its own task, so a
    /// slow lookup for a previous identity never delays the current one.
    pub fn bind(&self, mut session_rx: watch::Receiver<SessionState>) -> JoinHandle<()> {
        let resolver = self.clone();
        tokio::spawn(async move {
            loop {
                let session = session_rx.borrow_and_update().clone();
                let ticket = resolver.begin(&session);
                let worker = resolver.clone();
                tokio::spawn(async move {
                    worker.finish(ticket).await;
                });

                if session_rx.changed().await.is_err() {
                    info!("Session channel closed, ability binding stopped");
                    break;
                }
            }
        })
    }

    /// Mark the cached set stale; `can` keeps answering from it until refreshed
    pub fn invalidate(&self) {
        self.state.write().resolved_at = None;
    }

    /// Whether the cached set is older than the staleness window (or was invalidated)
    pub fn is_stale(&self) -> bool {
        let state = self.state.read();
        match (state.resolved_at, self.config.ability_ttl()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(at), Some(ttl)) => at.elapsed() >= ttl,
        }
    }

    /// Resolve again when the cached set is stale or belongs to another identity
    pub async fn ensure_fresh(&self, session: &SessionState) -> ResolveOutcome {
        let current = self.key().map(|k| k.identity);
        let wanted = session.identity.as_ref().map(|i| i.id);
        if !self.loading() && current == wanted && !self.is_stale() {
            return ResolveOutcome::Fresh;
        }
        self.resolve(session).await
    }

    /// Snapshot of the current ability set
    pub fn abilities(&self) -> Arc<AbilitySet> {
        Arc::clone(&self.state.read().abilities)
    }

    /// Key of the current ability set
    pub fn key(&self) -> Option<AbilityKey> {
        self.state.read().key
    }
}

impl Ability for AbilityResolver {
    fn can(&self, permission: &str) -> bool {
        self.state.read().abilities.contains(permission)
    }

    fn loading(&self) -> bool {
        self.state.read().loading
    }
}
