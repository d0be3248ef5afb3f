use crate::SessionStatus;

use am_core::UserIdentity;
use serde::Serialize;

/// What subscribers see after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// True until hydration finishes
    pub loading: bool,
    pub user: Option<UserIdentity>,
    /// Authenticator calls in flight
    pub pending: u32,
}

impl SessionSnapshot {
    pub(crate) fn initial() -> Self {
        Self {
            loading: true,
            user: None,
            pending: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match (self.loading, &self.user) {
            (true, _) => SessionStatus::Loading,
            (false, Some(_)) => SessionStatus::Authenticated,
            (false, None) => SessionStatus::Unauthenticated,
        }
    }
}
