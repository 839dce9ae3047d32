// nfcbeam/src/protocol/status.rs

//! Status word interpretation for ACR122 replies.

use crate::TransportErrorKind;
use crate::constants::{SW_SUCCESS, SW1_ERROR, SW2_BAD_COMMAND, SW2_CHECKSUM};

/// Classify SW1/SW2. `90 00` is the only success.
pub fn classify(sw1: u8, sw2: u8) -> Result<(), TransportErrorKind> {
    match (sw1, sw2) {
        s if s == SW_SUCCESS => Ok(()),
        (SW1_ERROR, SW2_CHECKSUM) => Err(TransportErrorKind::Checksum),
        (SW1_ERROR, SW2_BAD_COMMAND) => Err(TransportErrorKind::UnsupportedCommand),
        (sw1, sw2) => Err(TransportErrorKind::Status { sw1, sw2 }),
    }
}
