// nfcbeam/src/protocol/codec.rs

use crate::channel::Channel;
use crate::utils::HexDump;
use crate::{Error, Result, TransportErrorKind};

use super::frame::{CommandFrame, ResponseFrame};
use super::status;

/// Transmit a command and validate the reply status word. Every frame in
/// both directions is traced.
pub fn send(channel: &mut dyn Channel, frame: &CommandFrame) -> Result<ResponseFrame> {
    log::trace!("-> {}", HexDump(frame.as_bytes()));
    let raw = channel.transmit(frame.as_bytes())?;
    log::trace!("<- {}", HexDump(&raw));

    let response = ResponseFrame::new(raw);
    check_status(&response)?;
    Ok(response)
}

/// Build and send a PN532 instruction in one step.
pub fn exchange(channel: &mut dyn Channel, opcode: u8, payload: &[u8]) -> Result<ResponseFrame> {
    let frame = CommandFrame::build(opcode, payload)?;
    send(channel, &frame)
}

/// Map the reply status word to a transport error. A reply too short to
/// carry a status word is reported as a general status failure.
pub fn check_status(response: &ResponseFrame) -> Result<()> {
    let Some((sw1, sw2)) = response.status_word() else {
        return Err(Error::transport(TransportErrorKind::Status {
            sw1: response.byte_at(0).unwrap_or(0),
            sw2: 0,
        }));
    };
    status::classify(sw1, sw2).map_err(Error::transport)
}
