//! Access-control facade wiring the resolvers and the gate

use super::ability::{Ability, AbilityResolver, ResolveOutcome};
use super::gate::{AccessGate, GateDecision, GateState};
use super::rbac::RoleGrantManager;
use super::session::{SessionProvider, SessionResolver, SessionState};
use crate::config::Config;
use crate::core::models::AbilitySet;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Access-control core for one application session
///
/// Owns the session resolver, the ability resolver bound to it, and the route gate.
pub struct AccessControl {
    /// Storage layer for roles and grants
    storage: StorageLayer,
    /// Session resolver
    session: SessionResolver,
    /// Ability resolver
    ability: AbilityResolver,
    /// Route gate
    gate: AccessGate,
    /// Task re-resolving abilities on session changes
    binding: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for AccessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControl")
            .field("session", &self.session)
            .field("ability", &self.ability)
            .field("gate", &self.gate)
            .finish()
    }
}

impl AccessControl {
    /// Create the access-control core, connecting storage from the configuration
    pub async fn new(config: &Config, provider: Arc<dyn SessionProvider>) -> Result<Self> {
        info!("Initializing access control");

        let storage = StorageLayer::new(config.storage()).await?;
        Ok(Self::with_storage(config, storage, provider))
    }

    /// Create the access-control core over an existing storage layer
    ///
    /// Must be called inside a tokio runtime.
    pub fn with_storage(
        config: &Config,
        storage: StorageLayer,
        provider: Arc<dyn SessionProvider>,
    ) -> Self {
        let session = SessionResolver::start(provider);
        let ability = AbilityResolver::new(config.rbac(), storage.permission_store());
        let binding = ability.bind(session.subscribe());
        let gate = AccessGate::new(config.gate());

        info!("Access control initialized");
        Self {
            storage,
            session,
            ability,
            gate,
            binding: Some(binding),
        }
    }

    pub fn session(&self) -> &SessionResolver {
        &self.session
    }

    pub fn ability(&self) -> &AbilityResolver {
        &self.ability
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn storage(&self) -> &StorageLayer {
        &self.storage
    }

    /// Role-grant administration over the same storage
    pub fn grants(&self) -> RoleGrantManager {
        RoleGrantManager::new(self.storage.grant_store())
    }

    /// Whether the current identity holds `permission`
    ///
    /// False without an identity, and while the resolved set belongs to another one.
    pub fn can(&self, permission: &str) -> bool {
        let session = self.session.state();
        session.is_authenticated() && self.in_sync(&session) && self.ability.can(permission)
    }

    /// Current gate state
    pub fn state(&self) -> GateState {
        let session = self.session.state();
        if is_signed_out(&session) {
            return self.gate.state(&session, &AbilitySet::empty());
        }
        if !self.in_sync(&session) {
            return GateState::Pending;
        }
        self.gate.state(&session, &self.ability)
    }

    /// Decision for `path` from the current snapshots, without waiting
    pub fn decide(&self, path: &str) -> GateDecision {
        let session = self.session.state();
        if is_signed_out(&session) {
            // Abilities play no part once the identity is gone
            return self.gate.evaluate(&session, &AbilitySet::empty(), path);
        }
        if !self.in_sync(&session) {
            // Abilities still belong to a previous identity
            return GateDecision::Loading;
        }
        self.gate.evaluate(&session, &self.ability, path)
    }

    /// Wait for both resolvers to settle, then decide for `path`
    pub async fn decide_settled(&self, path: &str) -> GateDecision {
        self.settle().await;
        self.decide(path)
    }

    /// Wait for the session, then make sure abilities match it
    ///
    /// Retries while a concurrent resolution (from the session binding) supersedes ours.
    pub async fn settle(&self) -> GateState {
        loop {
            let session = self.session.ready().await;
            if self.ability.ensure_fresh(&session).await != ResolveOutcome::Superseded {
                let state = self.state();
                if state != GateState::Pending {
                    return state;
                }
            }
            tokio::task::yield_now().await;
        }
    }

    /// Re-resolve abilities now, e.g. after grants were saved
    pub async fn refresh(&self) -> ResolveOutcome {
        debug!("Refreshing abilities");
        self.ability.invalidate();
        self.ability.resolve(&self.session.state()).await
    }

    /// Stop the session listener and the ability binding
    pub fn shutdown(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.abort();
        }
        self.session.shutdown();
        info!("Access control stopped");
    }

    fn in_sync(&self, session: &SessionState) -> bool {
        session.loading
            || self.ability.key().map(|k| k.identity) == session.identity.as_ref().map(|i| i.id)
    }
}

fn is_signed_out(session: &SessionState) -> bool {
    !session.loading && session.identity.is_none()
}

impl Drop for AccessControl {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.abort();
        }
    }
}
