//! Who is signed in.
//!
//! [`SessionStore`] owns the current [`UserIdentity`](am_core::UserIdentity),
//! persists it under a single storage key and restores it at startup.
//! Authentication itself sits behind the [`Authenticator`] trait; the shipped
//! [`SimulatedAuthenticator`] fabricates identities after a fixed delay.

mod auth_delays;
mod auth_error;
mod authenticator;
mod error;
mod hydration;
mod session_options;
mod session_snapshot;
mod session_status;
mod session_store;
mod simulated_authenticator;


pub use auth_delays::AuthDelays;
pub use auth_error::{AuthError, Result as AuthResult};
pub use authenticator::Authenticator;
pub use error::{Result as SessionResult, SessionError};
pub use hydration::Hydration;
pub use session_options::SessionOptions;
pub use session_snapshot::SessionSnapshot;
pub use session_status::SessionStatus;
pub use session_store::SessionStore;
pub use simulated_authenticator::SimulatedAuthenticator;

/// Storage key of the session record unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "fouram:auth:user";
