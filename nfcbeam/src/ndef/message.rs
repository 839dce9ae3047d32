// nfcbeam/src/ndef/message.rs

use crate::{Error, Result};

use super::record::NdefRecord;

/// Sequence of records as pushed by the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Decode consecutive records until the one flagged ME or the end of
    /// the buffer. Chunked records are returned as they appear; they are
    /// not joined.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::Format("empty ndef message".into()));
        }

        let mut records = Vec::new();
        let mut offset = 0usize;
        while offset < data.len() {
            let record = NdefRecord::decode(&data[offset..])?;
            offset += record.length();
            let last = record.flags().message_end;
            records.push(record);
            if last {
                break;
            }
        }

        if offset < data.len() {
            log::warn!(
                "ignoring {} bytes after the last ndef record",
                data.len() - offset
            );
        }
        if let Some(first) = records.first() {
            if !first.flags().message_begin {
                log::debug!("first ndef record does not carry the MB flag");
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&NdefRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.records
    }
}

impl IntoIterator for NdefMessage {
    type Item = NdefRecord;
    type IntoIter = std::vec::IntoIter<NdefRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
