use std::time::Duration;

/// How long each simulated round trip takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthDelays {
    pub sign_in: Duration,
    pub provider: Duration,
    pub sign_up: Duration,
}

impl AuthDelays {
    /// Resolve immediately (after one scheduler yield).
    pub fn none() -> Self {
        Self {
            sign_in: Duration::ZERO,
            provider: Duration::ZERO,
            sign_up: Duration::ZERO,
        }
    }
}

impl Default for AuthDelays {
    fn default() -> Self {
        Self {
            sign_in: Duration::from_millis(800),
            provider: Duration::from_millis(1500),
            sign_up: Duration::from_millis(1000),
        }
    }
}
