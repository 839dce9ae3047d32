// nfcbeam/src/lib.rs

//! nfcbeam
//!
//! Receive Android Beam pushes through an ACR122 (PN532) contactless
//! reader: frame codec, LLCP/SNEP handshake and NDEF decoding.
#![warn(missing_docs)]

pub mod beam;
pub mod channel;
pub mod constants;
pub mod device;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod utils;

// Re-export common types at crate root so `crate::Error` and
// `crate::Result` are available for consumers and for the `prelude`.
pub use crate::error::*;

pub use prelude::*;
