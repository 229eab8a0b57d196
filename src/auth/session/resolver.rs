//! Session resolver: tracks the current identity through the provider's event stream

use super::provider::SessionProvider;
use super::types::{AuthEvent, SessionState};
use crate::core::models::Identity;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Publishes the current [`SessionState`] and keeps it in sync with the provider
///
/// Reads never block: `state()` returns the last published snapshot. The background
/// listener publishes a signed-out state when the current identity expires, and is
/// aborted on [`shutdown`](Self::shutdown) or drop.
#[derive(Debug)]
pub struct SessionResolver {
    state_rx: watch::Receiver<SessionState>,
    listener: Option<JoinHandle<()>>,
}

impl SessionResolver {
    /// Start resolving; must be called inside a tokio runtime
    ///
    /// The returned resolver reports `loading` until the initial fetch completes.
    pub fn start(provider: Arc<dyn SessionProvider>) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionState::pending());

        // Subscribe before fetching so no change between the two is lost
        let events = provider.subscribe();
        let listener = tokio::spawn(run_listener(provider, state_tx, events));

        Self {
            state_rx,
            listener: Some(listener),
        }
    }

    /// Current snapshot; an identity past its expiry is reported as absent
    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().current()
    }

    /// Current identity, if any
    pub fn identity(&self) -> Option<Identity> {
        self.state().identity
    }

    /// Whether the initial fetch is still in flight
    pub fn loading(&self) -> bool {
        self.state_rx.borrow().loading
    }

    /// Receiver notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }

    /// Wait until the initial fetch has completed
    pub async fn ready(&self) -> SessionState {
        let mut rx = self.state_rx.clone();
        match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.current(),
            // Listener gone: report whatever was published last
            Err(_) => self.state(),
        }
    }

    /// Stop listening to the provider
    pub fn shutdown(&mut self) {
        if let Some(listener) = self.listener.take() {
            info!("Stopping session listener");
            listener.abort();
        }
    }
}

impl Drop for SessionResolver {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}

async fn run_listener(
    provider: Arc<dyn SessionProvider>,
    state_tx: watch::Sender<SessionState>,
    mut events: broadcast::Receiver<AuthEvent>,
) {
    publish(&state_tx, fetch_state(provider.as_ref()).await);

    loop {
        let expiry = expiry_deadline(&state_tx.borrow());

        tokio::select! {
            event = events.recv() => match event {
                Ok(AuthEvent::SignedIn(identity)) => {
                    debug!("Session event: signed in as {}", identity.id);
                    publish(&state_tx, SessionState::resolved(Some(identity)));
                }
                Ok(AuthEvent::SignedOut) => {
                    debug!("Session event: signed out");
                    publish(&state_tx, SessionState::anonymous());
                }
                Ok(AuthEvent::TokenRefreshed(_)) => {
                    debug!("Session event: token refreshed, ignored");
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(
                        "Session listener lagged by {} events, re-fetching session",
                        skipped
                    );
                    publish(&state_tx, fetch_state(provider.as_ref()).await);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("Session provider closed its event stream");
                    break;
                }
            },

            _ = sleep_until_expiry(expiry) => {
                info!("Session expired, treating as signed out");
                publish(&state_tx, SessionState::anonymous());
            }
        }
    }
}

/// Instant at which the published identity expires, if it carries an expiry
fn expiry_deadline(state: &SessionState) -> Option<Instant> {
    let expires_at = state.identity.as_ref()?.expires_at?;
    let remaining = (expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
    Some(Instant::now() + remaining)
}

async fn sleep_until_expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn fetch_state(provider: &dyn SessionProvider) -> SessionState {
    match provider.current_session().await {
        Ok(identity) => SessionState::resolved(identity),
        Err(e) => {
            warn!("Failed to fetch current session, treating as signed out: {}", e);
            SessionState::anonymous()
        }
    }
}

fn publish(state_tx: &watch::Sender<SessionState>, next: SessionState) {
    state_tx.send_if_modified(|state| {
        if *state == next {
            return false;
        }
        *state = next;
        true
    });
}
