// nfcbeam/src/prelude.rs

pub use crate::beam::{HandshakeState, Phase};
pub use crate::channel::Channel;
#[cfg(feature = "pcsc")]
pub use crate::channel::PcscChannel;
pub use crate::device::{BeamConfig, Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::ndef::{NdefMessage, NdefRecord, RecordFlags, TextRecord, Tnf, UriRecord};
pub use crate::{Error, ErrorKind, Result, TransportErrorKind};

// Re-export small utilities for convenience
pub use crate::utils::{CancelToken, bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
