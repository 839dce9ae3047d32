// nfcbeam/src/device/config.rs

//! Beam session configuration

use std::time::Duration;

use crate::constants::{
    DEFAULT_MAX_ALLOWED_SIZE, DEFAULT_MAX_FRAGMENT_RETRIES, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_TIMEOUT_MS,
};
use crate::{Error, Result};

/// Timeouts and limits supplied at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeamConfig {
    /// How long `start()` waits for a target, in milliseconds.
    pub timeout_ms: u64,
    /// Largest SNEP message accepted, in bytes.
    pub max_allowed_size: usize,
    /// Pause between target probes, in milliseconds.
    pub poll_interval_ms: u64,
    /// Consecutive non-fragment replies tolerated while reassembling.
    pub max_fragment_retries: u32,
}

impl BeamConfig {
    pub fn new(timeout_ms: u64, max_allowed_size: usize) -> Self {
        Self {
            timeout_ms,
            max_allowed_size,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_allowed_size(mut self, max_allowed_size: usize) -> Self {
        self.max_allowed_size = max_allowed_size;
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub fn with_max_fragment_retries(mut self, retries: u32) -> Self {
        self.max_fragment_retries = retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Reject settings that would make the handshake spin or refuse
    /// every message.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::Initialization("timeout must be positive".into()));
        }
        if self.max_allowed_size == 0 {
            return Err(Error::Initialization(
                "max_allowed_size must be positive".into(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Initialization(
                "poll interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_allowed_size: DEFAULT_MAX_ALLOWED_SIZE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_fragment_retries: DEFAULT_MAX_FRAGMENT_RETRIES,
        }
    }
}
