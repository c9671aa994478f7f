use std::sync::Arc;

use metrics::{counter, gauge};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::session::state::{DEFAULT_OWNER_ROLE, OwnerState, SessionSnapshot, keys};
use crate::storage::KeyValueStore;

/// Result of the startup read of the persisted identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A saved owner was found and is now logged in
    Restored,
    /// The store held no owner name
    NoSavedSession,
    /// A restore already ran, or `login`/`logout` got there first
    Skipped,
}

struct Inner {
    state: OwnerState,
    /// Set once the store has been consulted or a mutation has happened
    settled: bool,
}

/// Single source of truth for the logged-in owner.
///
/// The context starts unauthenticated. `restore` copies a previously saved
/// identity out of the store; `login` and `logout` update memory and the store
/// together under the write lock.
pub struct SessionContext {
    inner: RwLock<Inner>,
    store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
    /// Create an unauthenticated context over `store` without reading it
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: OwnerState::Unauthenticated,
                settled: false,
            }),
            store,
        }
    }

    /// Create a context and immediately restore any saved identity
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let context = Self::new(store);
        context.restore().await;
        context
    }

    /// Restore the owner saved in the store.
    ///
    /// Runs at most once and never overrides a `login` or `logout` that
    /// happened first. Store read failures count as an absent entry.
    pub async fn restore(&self) -> RestoreOutcome {
        let mut inner = self.inner.write().await;
        if inner.settled {
            debug!("Session restore skipped, state already settled");
            return RestoreOutcome::Skipped;
        }
        inner.settled = true;
        counter!("roomdesk_session_restores_total").increment(1);

        let Some(name) = self.read_slot(keys::OWNER_NAME) else {
            debug!("No saved owner in store");
            gauge!("roomdesk_session_authenticated").set(0.0);
            return RestoreOutcome::NoSavedSession;
        };
        let role = self
            .read_slot(keys::OWNER_ROLE)
            .unwrap_or_else(|| DEFAULT_OWNER_ROLE.to_string());

        info!("Restored session for owner {} ({})", name, role);
        inner.state = OwnerState::authenticated(name, role);
        gauge!("roomdesk_session_authenticated").set(1.0);
        RestoreOutcome::Restored
    }

    /// Log in as `name`, with `role` defaulting to `"owner"`.
    ///
    /// Any previous identity is replaced. No validation is applied: the caller
    /// is trusted to have authenticated the owner already.
    pub async fn login(&self, name: impl Into<String>, role: Option<&str>) -> SessionSnapshot {
        let name = name.into();
        let role = role.unwrap_or(DEFAULT_OWNER_ROLE).to_string();

        let mut inner = self.inner.write().await;
        self.write_slot(keys::OWNER_NAME, &name);
        self.write_slot(keys::OWNER_ROLE, &role);

        info!("Owner {} logged in as {}", name, role);
        inner.state = OwnerState::authenticated(name, role);
        inner.settled = true;

        counter!("roomdesk_logins_total").increment(1);
        gauge!("roomdesk_session_authenticated").set(1.0);
        inner.state.snapshot()
    }

    /// Log out and clear the persisted identity. Calling it twice is harmless.
    pub async fn logout(&self) -> SessionSnapshot {
        let mut inner = self.inner.write().await;
        self.remove_slot(keys::OWNER_NAME);
        self.remove_slot(keys::OWNER_ROLE);

        if let Some(name) = inner.state.owner_name() {
            info!("Owner {} logged out", name);
        }
        inner.state = OwnerState::Unauthenticated;
        inner.settled = true;

        counter!("roomdesk_logouts_total").increment(1);
        gauge!("roomdesk_session_authenticated").set(0.0);
        inner.state.snapshot()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().await.state.snapshot()
    }

    pub async fn state(&self) -> OwnerState {
        self.inner.read().await.state.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.state.is_authenticated()
    }

    /// Whether the startup restore has run (or been superseded)
    pub async fn is_settled(&self) -> bool {
        self.inner.read().await.settled
    }

    fn read_slot(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                counter!("roomdesk_storage_errors_total").increment(1);
                warn!("Failed to read {} from store, treating as absent: {}", key, e);
                None
            }
        }
    }

    fn write_slot(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            counter!("roomdesk_storage_errors_total").increment(1);
            warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn remove_slot(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            counter!("roomdesk_storage_errors_total").increment(1);
            warn!("Failed to remove {} from store: {}", key, e);
        }
    }
}
