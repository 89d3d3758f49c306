//! Cascade engine configuration.

use std::time::Duration;

use tracing::warn;

/// Environment variable holding the per-node step delay in milliseconds.
pub const STEP_DELAY_ENV: &str = "SWARM_SYNC_STEP_DELAY_MS";

/// Configuration for a [`CascadeEngine`](crate::CascadeEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncConfig {
    /// Pause after each node update.
    ///
    /// Zero means a plain cooperative yield; anything else sleeps, which
    /// simulates propagation delay.
    pub step_delay: Duration,
}

impl SyncConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let step_delay = match lookup(STEP_DELAY_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid {}", STEP_DELAY_ENV);
                    Duration::ZERO
                }
            },
            None => Duration::ZERO,
        };

        Self { step_delay }
    }

    /// Set the per-node step delay.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}
