use crate::{AuthDelays, AuthError, AuthResult, Authenticator};

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use am_core::UserIdentity;
use async_trait::async_trait;
use log::debug;

/// Accepts every credential after a fixed delay.
///
/// Passwords are never checked. [`fail_next`](Self::fail_next) arms a number
/// of rejections so callers can exercise the failure path.
#[derive(Debug)]
pub struct SimulatedAuthenticator {
    delays: AuthDelays,
    failures_armed: AtomicU32,
    attempts: AtomicU64,
}

impl SimulatedAuthenticator {
    pub fn new(delays: AuthDelays) -> Self {
        Self {
            delays,
            failures_armed: AtomicU32::new(0),
            attempts: AtomicU64::new(0),
        }
    }

    pub fn delays(&self) -> AuthDelays {
        self.delays
    }

    /// Reject the next `count` calls, whichever operation they are.
    pub fn fail_next(&self, count: u32) {
        self.failures_armed.store(count, Ordering::SeqCst);
    }

    /// Calls started so far, including rejected and cancelled ones.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn take_failure(&self) -> bool {
        self.failures_armed
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |armed| {
                armed.checked_sub(1)
            })
            .is_ok()
    }

    async fn respond<F>(
        &self,
        operation: &'static str,
        delay: Duration,
        fabricate: F,
    ) -> AuthResult<UserIdentity>
    where
        F: FnOnce() -> UserIdentity + Send,
    {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(delay).await;

        if self.take_failure() {
            debug!("Simulated {operation} rejected");
            return Err(AuthError::rejected(operation, "simulated failure"));
        }

        Ok(fabricate())
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(AuthDelays::default())
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self, email: &str, _password: &str) -> AuthResult<UserIdentity> {
        self.respond("sign-in", self.delays.sign_in, || UserIdentity::demo(email))
            .await
    }

    async fn sign_in_with_provider(&self, provider: &str) -> AuthResult<UserIdentity> {
        self.respond("provider sign-in", self.delays.provider, || {
            UserIdentity::from_provider(provider)
        })
        .await
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> AuthResult<UserIdentity> {
        self.respond("sign-up", self.delays.sign_up, || {
            let id = chrono::Utc::now().timestamp_millis().to_string();
            UserIdentity::registered(id, name, email)
        })
        .await
    }
}
