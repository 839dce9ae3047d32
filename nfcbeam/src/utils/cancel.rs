//! Cooperative cancellation for a blocking `start()`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag checked once per poll iteration. Clone it, hand the clone
/// to another thread and call [`CancelToken::cancel`] to abort a wait.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Clear a previous cancellation so the token can guard another wait.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}
