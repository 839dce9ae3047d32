// nfcbeam/src/protocol/llcp.rs

//! LLCP PDUs exchanged with the Android SNEP server through
//! InDataExchange. Every payload starts with the PN532 target number (01);
//! our service access point is 0x20, the SNEP server's is 4.

use crate::constants::{
    DATA_EXCHANGE_REPLY_HEADER_LEN, LLCP_CONNECT_MARKER, LLCP_HEADER_LEN,
    LLCP_INFORMATION_MARKER,
};
use crate::Result;

use super::frame::ResponseFrame;
use super::parser;

/// PN532 logical target number used for every data exchange.
pub const TARGET: u8 = 0x01;

/// N(S)/N(R) counters of the LLCP data link. Each is a 4-bit modulo-16
/// sequence number; the I-PDU sequence byte is N(S) in the high nibble and
/// N(R) in the low nibble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceNumbers {
    pub sent: u32,
    pub received: u32,
}

impl SequenceNumbers {
    pub fn byte(&self) -> u8 {
        (((self.sent & 0x0F) << 4) | (self.received & 0x0F)) as u8
    }
}

/// Probe sent while waiting for the target's CONNECT.
pub fn target_probe() -> [u8; 4] {
    [TARGET, 0x01, 0x04, 0x20]
}

/// CC PDU accepting the SNEP connection (DSAP 0x20, SSAP 4).
pub fn connection_complete() -> [u8; 3] {
    [TARGET, 0x81, 0x84]
}

/// I-PDU carrying SNEP "Continue": send me the remaining fragments.
pub fn snep_continue(seq: SequenceNumbers) -> [u8; 6] {
    [TARGET, 0x83, 0x04, seq.byte(), 0x10, 0x80]
}

/// I-PDU carrying SNEP "Success": nothing more to receive.
pub fn snep_success(seq: SequenceNumbers) -> [u8; 6] {
    [TARGET, 0x83, 0x04, seq.byte(), 0x10, 0x81]
}

/// I-PDU carrying an empty SNEP PUT. Used as acknowledgement after a
/// complete message and as the poll that pulls further fragments.
pub fn snep_empty_put(seq: SequenceNumbers) -> [u8; 10] {
    [
        TARGET,
        0x83,
        0x04,
        seq.byte(),
        0x10,
        0x02,
        0x00,
        0x00,
        0x00,
        0x00,
    ]
}

/// DM PDU closing the data link.
pub fn disconnect() -> [u8; 4] {
    [TARGET, 0x81, 0xC4, 0x00]
}

/// InRelease payload for the target.
pub fn release_target() -> [u8; 1] {
    [TARGET]
}

/// The target answered a probe with an LLCP CONNECT.
pub fn is_connect(response: &ResponseFrame) -> bool {
    response.byte_at(3) == Some(LLCP_CONNECT_MARKER)
}

/// The reply carries an I-PDU from the SNEP server.
pub fn is_information(response: &ResponseFrame) -> bool {
    response.byte_at(3) == Some(LLCP_INFORMATION_MARKER[0])
        && response.byte_at(4) == Some(LLCP_INFORMATION_MARKER[1])
}

/// SNEP bytes carried by an InDataExchange reply: drop the D5 41 <status>
/// reply header and the status word, then the LLCP I-PDU header.
pub fn extract_snep(response: &ResponseFrame) -> Result<&[u8]> {
    let llcp = parser::tail_from(
        response.data(),
        DATA_EXCHANGE_REPLY_HEADER_LEN,
        "data exchange reply",
    )?;
    parser::tail_from(llcp, LLCP_HEADER_LEN, "llcp pdu")
}
