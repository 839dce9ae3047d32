// nfcbeam/src/protocol/frame.rs

use crate::constants::{
    ACR122_HEADER, MAX_COMMAND_PAYLOAD_LEN, PN532_CMD_PREFIX_HOST, STATUS_WORD_LEN,
};
use crate::{Error, Result};

/// ACR122 pass-through command carrying one PN532 instruction.
/// Format: [FF 00 00 00] [Len(1)] [D4] [Opcode(1)] [Payload(n)]
/// where Len counts the two instruction bytes plus the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: Vec<u8>,
}

impl CommandFrame {
    /// Build a PN532 instruction wrapped in the ACR122 header.
    pub fn build(opcode: u8, payload: &[u8]) -> Result<Self> {
        if payload.len() > MAX_COMMAND_PAYLOAD_LEN {
            return Err(Error::Protocol(format!(
                "command payload of {} bytes exceeds {} bytes",
                payload.len(),
                MAX_COMMAND_PAYLOAD_LEN
            )));
        }

        let len = (2 + payload.len()) as u8;
        let mut bytes = Vec::with_capacity(ACR122_HEADER.len() + 1 + 2 + payload.len());
        bytes.extend_from_slice(&ACR122_HEADER);
        bytes.push(len);
        bytes.push(PN532_CMD_PREFIX_HOST);
        bytes.push(opcode);
        bytes.extend_from_slice(payload);
        Ok(Self { bytes })
    }

    /// Reader-level pseudo-APDU sent as-is (no PN532 instruction inside).
    pub fn raw(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// PN532 opcode, `None` for raw pseudo-APDUs.
    pub fn opcode(&self) -> Option<u8> {
        match self.bytes.get(5) {
            Some(&PN532_CMD_PREFIX_HOST) => self.bytes.get(6).copied(),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Shorthand for [`CommandFrame::build`].
pub fn build_command(opcode: u8, payload: &[u8]) -> Result<CommandFrame> {
    CommandFrame::build(opcode, payload)
}

/// Raw reply from the channel. The last two bytes are SW1/SW2; everything
/// before them is the PN532 reply (D5 <opcode+1> ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    bytes: Vec<u8>,
}

impl ResponseFrame {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// (SW1, SW2) if the reply is long enough to carry a status word.
    pub fn status_word(&self) -> Option<(u8, u8)> {
        let n = self.bytes.len();
        if n < STATUS_WORD_LEN {
            return None;
        }
        Some((self.bytes[n - 2], self.bytes[n - 1]))
    }

    pub fn sw1(&self) -> Option<u8> {
        self.status_word().map(|(sw1, _)| sw1)
    }

    pub fn sw2(&self) -> Option<u8> {
        self.status_word().map(|(_, sw2)| sw2)
    }

    /// Reply body without the status word.
    pub fn data(&self) -> &[u8] {
        let end = self.bytes.len().saturating_sub(STATUS_WORD_LEN);
        &self.bytes[..end]
    }

    /// Byte at `idx` of the full reply (status word included).
    pub fn byte_at(&self, idx: usize) -> Option<u8> {
        self.bytes.get(idx).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
