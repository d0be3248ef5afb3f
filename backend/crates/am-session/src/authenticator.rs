use crate::AuthResult;

use std::fmt::Debug;

use am_core::UserIdentity;
use async_trait::async_trait;

/// The network boundary of sign-in.
///
/// Implementations return the identity to establish; they never touch the
/// session state or storage themselves.
#[async_trait]
pub trait Authenticator: Send + Sync + Debug {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<UserIdentity>;

    async fn sign_in_with_provider(&self, provider: &str) -> AuthResult<UserIdentity>;

    async fn sign_up(&self, name: &str, email: &str, password: &str)
    -> AuthResult<UserIdentity>;
}
