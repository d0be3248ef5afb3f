use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Simulated authentication latency
pub const MIN_DELAY_MS: u64 = 0;
pub const MAX_DELAY_MS: u64 = 30_000;
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 800;
pub const DEFAULT_PROVIDER_DELAY_MS: u64 = 1500;
pub const DEFAULT_SIGN_UP_DELAY_MS: u64 = 1000;

/// Latency of the simulated authenticator.
///
/// Provider sign-in models a slower external round trip, so its delay may
/// not be shorter than the plain sign-in delay.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub sign_in_delay_ms: u64,
    pub provider_delay_ms: u64,
    pub sign_up_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
            provider_delay_ms: DEFAULT_PROVIDER_DELAY_MS,
            sign_up_delay_ms: DEFAULT_SIGN_UP_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("session.sign_in_delay_ms", self.sign_in_delay_ms),
            ("session.provider_delay_ms", self.provider_delay_ms),
            ("session.sign_up_delay_ms", self.sign_up_delay_ms),
        ] {
            if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&value) {
                return Err(ConfigError::session(format!(
                    "{name} must be {MIN_DELAY_MS}-{MAX_DELAY_MS}, got {value}"
                )));
            }
        }

        if self.provider_delay_ms < self.sign_in_delay_ms {
            return Err(ConfigError::session(format!(
                "session.provider_delay_ms ({}) must not be shorter than session.sign_in_delay_ms ({})",
                self.provider_delay_ms, self.sign_in_delay_ms
            )));
        }

        Ok(())
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn provider_delay(&self) -> Duration {
        Duration::from_millis(self.provider_delay_ms)
    }

    pub fn sign_up_delay(&self) -> Duration {
        Duration::from_millis(self.sign_up_delay_ms)
    }
}
