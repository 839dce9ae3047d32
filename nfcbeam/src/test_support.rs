//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the reader replies a beam handshake expects so
//! tests across the crate and the tests/ directory script the same
//! conversation.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::channel::{Channel, MockChannel};
use crate::constants::{LLCP_CONNECT_MARKER, LLCP_INFORMATION_MARKER};
use crate::device::{BeamConfig, Device, Initialized};
use crate::ndef::{RecordFlags, Tnf};
use crate::utils::MockClock;
use crate::Result;

/// Encode a single NDEF record with MB and ME set. SR is used when the
/// payload fits in one length byte.
#[doc(hidden)]
pub fn encode_record(tnf: Tnf, record_type: &[u8], id: Option<&[u8]>, payload: &[u8]) -> Vec<u8> {
    let short = payload.len() <= u8::MAX as usize;
    let mut header = RecordFlags::MB | RecordFlags::ME | tnf.as_u8();
    if short {
        header |= RecordFlags::SR;
    }
    if id.is_some() {
        header |= RecordFlags::IL;
    }

    let mut out = vec![header, record_type.len() as u8];
    if short {
        out.push(payload.len() as u8);
    } else {
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    }
    if let Some(id) = id {
        out.push(id.len() as u8);
    }
    out.extend_from_slice(record_type);
    if let Some(id) = id {
        out.extend_from_slice(id);
    }
    out.extend_from_slice(payload);
    out
}

/// Generic successful reply: D5 41 00 + 90 00.
#[doc(hidden)]
pub fn ok_response() -> Vec<u8> {
    vec![0xD5, 0x41, 0x00, 0x90, 0x00]
}

/// Probe reply while no phone is in the field.
#[doc(hidden)]
pub fn no_target_response() -> Vec<u8> {
    vec![0xD5, 0x41, 0x01, 0x90, 0x00]
}

/// Probe reply carrying the phone's LLCP CONNECT.
#[doc(hidden)]
pub fn connect_response() -> Vec<u8> {
    vec![0xD5, 0x41, 0x00, LLCP_CONNECT_MARKER, 0x20, 0x02, 0x90, 0x00]
}

/// I-PDU from the SNEP server carrying `snep` bytes.
#[doc(hidden)]
pub fn information_response(snep: &[u8]) -> Vec<u8> {
    let mut out = vec![0xD5, 0x41, 0x00];
    out.extend_from_slice(&LLCP_INFORMATION_MARKER);
    out.push(0x00);
    out.extend_from_slice(snep);
    out.extend_from_slice(&[0x90, 0x00]);
    out
}

/// First SNEP fragment: PUT header declaring `size`, followed by `ndef`.
#[doc(hidden)]
pub fn snep_response(size: u32, ndef: &[u8]) -> Vec<u8> {
    let mut snep = vec![0x10, 0x02];
    snep.extend_from_slice(&size.to_be_bytes());
    snep.extend_from_slice(ndef);
    information_response(&snep)
}

/// MockChannel scripted for a complete beam of `ndef`, split into chunks
/// of the given lengths. The last chunk takes whatever remains.
#[doc(hidden)]
pub fn scripted_fragmented_beam(ndef: &[u8], chunks: &[usize]) -> MockChannel {
    let mut mock = MockChannel::new();
    // antenna, jump for DEP, CONNECT, CC
    mock.push_response(ok_response());
    mock.push_response(ok_response());
    mock.push_response(connect_response());
    mock.push_response(ok_response());

    let mut pieces: Vec<&[u8]> = Vec::new();
    let mut rest = ndef;
    for &len in chunks {
        let (chunk, tail) = rest.split_at(len.min(rest.len()));
        pieces.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() || pieces.is_empty() {
        pieces.push(rest);
    }

    mock.push_response(snep_response(ndef.len() as u32, pieces[0]));
    for piece in &pieces[1..] {
        mock.push_response(information_response(piece));
    }
    if pieces.len() == 1 {
        // acknowledgement of a single-fragment message
        mock.push_response(ok_response());
    }

    // success, DM, release
    for _ in 0..3 {
        mock.push_response(ok_response());
    }
    mock
}

/// MockChannel scripted for a single-fragment beam of `ndef`.
#[doc(hidden)]
pub fn scripted_beam(ndef: &[u8]) -> MockChannel {
    scripted_fragmented_beam(ndef, &[ndef.len()])
}

/// Channel sharing a MockChannel so a test can inspect sent commands after
/// a Device took ownership.
#[doc(hidden)]
#[derive(Clone)]
pub struct SharedChannel {
    inner: Rc<RefCell<MockChannel>>,
}

impl SharedChannel {
    pub fn new(mock: MockChannel) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    pub fn inner(&self) -> &Rc<RefCell<MockChannel>> {
        &self.inner
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn sent_with_opcode(&self, opcode: u8) -> Vec<Vec<u8>> {
        self.inner
            .borrow()
            .sent_with_opcode(opcode)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Channel for SharedChannel {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transmit(command)
    }

    fn reader_name(&self) -> Option<&str> {
        Some("mock reader")
    }

    fn disconnect(&mut self) -> Result<()> {
        self.inner.borrow_mut().disconnect()
    }
}

/// Convenience: an initialized Device on a simulated clock, backed by the
/// given channel.
#[doc(hidden)]
pub fn initialized_mock_device(
    channel: impl Channel + 'static,
    config: BeamConfig,
) -> Result<Device<Initialized>> {
    Device::new_with_channel(Box::new(channel))
        .with_clock(Box::new(MockClock::new()))
        .initialize(config)
}
