use crate::hydration::{Record, parse_record};
use crate::{
    Authenticator, Hydration, SessionError, SessionOptions, SessionResult, SessionSnapshot,
    SessionStatus,
};

use std::future::Future;
use std::sync::Arc;

use am_core::{ProfileUpdate, UserIdentity};
use am_storage::KeyValueStore;
use log::{debug, info, warn};
use tokio::sync::{broadcast, watch};
use tracing::{Instrument, info_span};

/// Single source of truth for the signed-in member.
///
/// State changes are published through a `watch` channel; every mutation is
/// applied in one step, so subscribers never see a half-updated session.
/// Authenticator calls run outside that step and can be cancelled with
/// [`cancel_pending`](Self::cancel_pending).
#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    authenticator: Arc<dyn Authenticator>,
    options: SessionOptions,
    state_tx: watch::Sender<SessionSnapshot>,
    cancel_tx: broadcast::Sender<()>,
}

impl SessionStore {
    /// Create a store in the loading state. Call [`hydrate`](Self::hydrate)
    /// before serving requests.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        options: SessionOptions,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionSnapshot::initial());
        let (cancel_tx, _) = broadcast::channel(1);

        Self {
            storage,
            authenticator,
            options,
            state_tx,
            cancel_tx,
        }
    }

    /// Create and hydrate in one go.
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        options: SessionOptions,
    ) -> Self {
        let store = Self::new(storage, authenticator, options);
        store.hydrate();
        store
    }

    // =========================================================================
    // Hydration
    // =========================================================================

    /// Restore the session from storage.
    ///
    /// Never fails: anything unusable in the slot is removed and the store
    /// ends up unauthenticated.
    pub fn hydrate(&self) -> Hydration {
        let key = self.options.key.as_str();

        let (user, outcome) = match self.storage.get(key) {
            Ok(None) => (None, Hydration::Empty),
            Ok(Some(raw)) => match parse_record(&raw) {
                Record::Blank => (None, Hydration::Empty),
                Record::Valid(user) => {
                    let outcome = Hydration::Restored {
                        id: user.id.clone(),
                    };
                    (Some(user), outcome)
                }
                Record::Corrupt(reason) => (None, self.discard(reason)),
            },
            Err(e) => (None, self.discard(format!("unreadable: {e}"))),
        };

        match outcome {
            Hydration::Restored { ref id } => info!("Restored session for user {id}"),
            Hydration::Empty => info!("No stored session under '{key}'"),
            Hydration::Discarded { .. } => {}
        }

        self.state_tx.send_modify(|state| {
            state.loading = false;
            state.user = user;
        });

        outcome
    }

    fn discard(&self, reason: String) -> Hydration {
        let key = self.options.key.as_str();
        warn!("Discarding corrupted session record '{key}': {reason}");

        if self.options.backup_corrupted {
            match self.storage.backup_corrupted(key) {
                Ok(Some(backup)) => info!("Corrupted session kept at {backup}"),
                Ok(None) => {}
                Err(e) => warn!("{e}"),
            }
        }

        if let Err(e) = self.storage.remove(key) {
            warn!("Failed to remove corrupted session record '{key}': {e}");
        }

        Hydration::Discarded { reason }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state_tx.borrow().status()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state_tx.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    /// Name to stamp on authored content, if anyone is signed in.
    pub fn display_name(&self) -> Option<String> {
        self.state_tx
            .borrow()
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
    }

    /// Receive every subsequent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state_tx.subscribe()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Sign in with email and password. The password is not checked.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<UserIdentity> {
        let user = self
            .authenticate("sign-in", self.authenticator.sign_in(email, password))
            .instrument(info_span!("sign_in", email))
            .await?;

        self.establish(user)
    }

    /// Sign in through a third-party provider such as `google`.
    pub async fn sign_in_with_provider(&self, provider: &str) -> SessionResult<UserIdentity> {
        let user = self
            .authenticate(
                "provider sign-in",
                self.authenticator.sign_in_with_provider(provider),
            )
            .instrument(info_span!("sign_in_with_provider", provider))
            .await?;

        self.establish(user)
    }

    /// Register and sign in. Blank name or email get placeholders.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> SessionResult<UserIdentity> {
        let user = self
            .authenticate("sign-up", self.authenticator.sign_up(name, email, password))
            .instrument(info_span!("sign_up", email))
            .await?;

        self.establish(user)
    }

    /// Forget the signed-in member and erase the durable record.
    ///
    /// Signing out while signed out touches nothing. The in-memory session is
    /// cleared even when erasing the record fails; the error is returned so
    /// the caller can report the stale record.
    pub fn sign_out(&self) -> SessionResult<()> {
        let Some(user) = self.current_user() else {
            debug!("Sign-out ignored: nobody is signed in");
            return Ok(());
        };

        let removed = self.storage.remove(&self.options.key);

        self.state_tx.send_modify(|state| state.user = None);
        info!("Signed out user {}", user.id);

        removed.map_err(SessionError::from)
    }

    /// Merge `update` into the signed-in member's profile.
    ///
    /// Returns `Ok(None)` without doing anything when nobody is signed in.
    pub fn update_profile(&self, update: ProfileUpdate) -> SessionResult<Option<UserIdentity>> {
        let Some(mut user) = self.current_user() else {
            debug!("Profile update ignored: nobody is signed in");
            return Ok(None);
        };

        user.apply(update);
        self.persist(&user)?;

        let updated = user.clone();
        self.state_tx.send_modify(|state| state.user = Some(user));
        info!("Updated profile of user {}", updated.id);

        Ok(Some(updated))
    }

    /// Abort every authenticator call in flight. Returns how many were
    /// cancelled.
    pub fn cancel_pending(&self) -> usize {
        let cancelled = self.cancel_tx.send(()).unwrap_or(0);
        if cancelled > 0 {
            info!("Cancelled {cancelled} pending authentication call(s)");
        }
        cancelled
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn authenticate<F>(&self, operation: &'static str, call: F) -> SessionResult<UserIdentity>
    where
        F: Future<Output = crate::AuthResult<UserIdentity>>,
    {
        let mut cancel_rx = self.cancel_tx.subscribe();
        let _pending = PendingGuard::enter(&self.state_tx);

        tokio::select! {
            result = call => result.map_err(|e| {
                warn!("{operation} failed: {e}");
                SessionError::from(e)
            }),
            _ = cancel_rx.recv() => {
                info!("{operation} cancelled");
                Err(SessionError::cancelled(operation))
            }
        }
    }

    fn establish(&self, user: UserIdentity) -> SessionResult<UserIdentity> {
        self.persist(&user)?;

        let established = user.clone();
        self.state_tx.send_modify(|state| state.user = Some(user));
        info!("Signed in user {}", established.id);

        Ok(established)
    }

    fn persist(&self, user: &UserIdentity) -> SessionResult<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set(&self.options.key, &json)?;
        Ok(())
    }
}

/// Counts an authenticator call as pending for as long as it lives, including
/// when the call's future is dropped midway.
struct PendingGuard<'a> {
    state_tx: &'a watch::Sender<SessionSnapshot>,
}

impl<'a> PendingGuard<'a> {
    fn enter(state_tx: &'a watch::Sender<SessionSnapshot>) -> Self {
        state_tx.send_modify(|state| state.pending += 1);
        Self { state_tx }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state_tx
            .send_modify(|state| state.pending = state.pending.saturating_sub(1));
    }
}
