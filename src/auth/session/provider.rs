//! Authentication provider seam

use super::types::AuthEvent;
use crate::core::models::Identity;
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the in-memory provider's event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// External authentication provider
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Fetch the current session, `None` when signed out
    async fn current_session(&self) -> Result<Option<Identity>>;

    /// Subscribe to authentication-state changes
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// Process-local provider, used by the admin CLI and tests
#[derive(Debug)]
pub struct MemorySessionProvider {
    current: RwLock<Option<Identity>>,
    event_sender: broadcast::Sender<AuthEvent>,
}

impl MemorySessionProvider {
    /// Create a provider with no session
    pub fn new() -> Self {
        let (event_sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            current: RwLock::new(None),
            event_sender,
        }
    }

    /// Create a provider already holding `identity`
    pub fn with_session(identity: Identity) -> Self {
        let provider = Self::new();
        *provider.current.write() = Some(identity);
        provider
    }

    /// Sign `identity` in and notify subscribers
    pub fn sign_in(&self, identity: Identity) {
        debug!("Signing in identity: {}", identity.id);
        *self.current.write() = Some(identity.clone());
        self.emit(AuthEvent::SignedIn(identity));
    }

    /// Sign the current identity out and notify subscribers
    pub fn sign_out(&self) {
        debug!("Signing out");
        *self.current.write() = None;
        self.emit(AuthEvent::SignedOut);
    }

    /// Refresh the session token of `identity`
    pub fn refresh(&self, identity: Identity) {
        *self.current.write() = Some(identity.clone());
        self.emit(AuthEvent::TokenRefreshed(identity));
    }

    fn emit(&self, event: AuthEvent) {
        // No receivers is not an error
        let _ = self.event_sender.send(event);
    }
}

impl Default for MemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for MemorySessionProvider {
    async fn current_session(&self) -> Result<Option<Identity>> {
        Ok(self.current.read().clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.event_sender.subscribe()
    }
}
