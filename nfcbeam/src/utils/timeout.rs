//! Time helpers: the clock abstraction the poll loop sleeps on and a
//! deadline built from it.
//!
//! The handshake never calls `std::thread::sleep` or `Instant::now`
//! directly; it goes through [`Clock`] so tests can drive it with
//! [`MockClock`] and finish instantly.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Monotonic time source with a blocking sleep.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `Instant` and `std::thread::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Simulated clock: `sleep` advances virtual time and returns at once.
/// Clones share the same time line, so a test can keep one handle while
/// the device owns another.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    elapsed: Rc<Cell<Duration>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Point in time, on a given clock, after which a wait gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Duration,
}

impl Deadline {
    pub fn after(clock: &dyn Clock, timeout: Duration) -> Self {
        Self {
            at: clock.now().saturating_add(timeout),
        }
    }

    /// Strictly past the deadline; reaching it exactly still counts as in time.
    pub fn expired(&self, clock: &dyn Clock) -> bool {
        clock.now() > self.at
    }
}
