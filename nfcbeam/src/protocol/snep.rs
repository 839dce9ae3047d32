// nfcbeam/src/protocol/snep.rs

//! SNEP message header and the fragment accumulator.

use crate::Result;
use crate::constants::SNEP_HEADER_LEN;

use super::parser;

/// Header of the first SNEP fragment: version, request code and the
/// declared length of the NDEF message that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnepHeader {
    pub version: u8,
    pub code: u8,
    pub length: u32,
}

impl SnepHeader {
    pub fn parse(snep: &[u8]) -> Result<Self> {
        parser::ensure_len(snep, SNEP_HEADER_LEN, "snep header")?;
        Ok(Self {
            version: snep[0],
            code: snep[1],
            length: parser::be_u32_at(snep, 2, "snep header")?,
        })
    }
}

/// Append-only accumulator for one SNEP message. Holds the raw SNEP bytes
/// (header included) in arrival order.
#[derive(Debug, Clone)]
pub struct SnepBuffer {
    header: SnepHeader,
    bytes: Vec<u8>,
}

impl SnepBuffer {
    /// Start a message from its first fragment.
    pub fn start(first: &[u8]) -> Result<Self> {
        let header = SnepHeader::parse(first)?;
        Ok(Self {
            header,
            bytes: first.to_vec(),
        })
    }

    pub fn header(&self) -> SnepHeader {
        self.header
    }

    /// Declared NDEF message size.
    pub fn declared_size(&self) -> usize {
        self.header.length as usize
    }

    /// Append a continuation fragment; returns its length.
    pub fn push(&mut self, fragment: &[u8]) -> usize {
        self.bytes.extend_from_slice(fragment);
        fragment.len()
    }

    /// NDEF bytes received so far (SNEP header excluded).
    pub fn received_bytes(&self) -> usize {
        self.bytes.len() - SNEP_HEADER_LEN
    }

    pub fn is_complete(&self) -> bool {
        self.received_bytes() >= self.declared_size()
    }

    /// The reassembled NDEF message, cut at the declared size.
    pub fn ndef_bytes(&self) -> &[u8] {
        let end = SNEP_HEADER_LEN + self.received_bytes().min(self.declared_size());
        &self.bytes[SNEP_HEADER_LEN..end]
    }

    /// Raw SNEP bytes as accumulated.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
