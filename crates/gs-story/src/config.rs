//! Configuration for a play session.

/// Default pause before a check result is revealed, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// How long a front end pauses before revealing a check result.
    ///
    /// The session itself never waits.
    pub reveal_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    pub fn with_reveal_delay(mut self, millis: u64) -> Self {
        self.reveal_delay_ms = millis;
        self
    }

    /// The reveal delay as a [`std::time::Duration`].
    pub fn reveal_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reveal_delay_ms)
    }
}
