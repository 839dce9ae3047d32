//! Utilities for nfcbeam: small helpers shared by the protocol layers.
//!
//! Hex formatting for frame traces, the clock/deadline abstraction used by
//! the target poll loop, and the cancellation token.

pub mod cancel;
pub mod hex;
pub mod timeout;

pub use cancel::CancelToken;
pub use hex::*;
pub use timeout::*;
