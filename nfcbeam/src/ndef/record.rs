// nfcbeam/src/ndef/record.rs

use crate::{Error, Result};

use super::tnf::{RecordFlags, Tnf};

/// One decoded NDEF record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefRecord {
    tnf: Tnf,
    flags: RecordFlags,
    record_type: Vec<u8>,
    id: Vec<u8>,
    payload: Vec<u8>,
    length: usize,
}

impl NdefRecord {
    /// Decode exactly one record starting at offset 0. Bytes past the
    /// record are left alone; see [`NdefRecord::length`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut r = Reader::new(data);

        let header = r.u8("record header")?;
        let flags = RecordFlags::from_header(header);
        let tnf = Tnf::from_header(header);
        let type_length = r.u8("type length")? as usize;

        let payload_length = if flags.short_record {
            r.u8("short payload length")? as usize
        } else {
            r.be_u32("payload length")? as usize
        };

        let id_length = if flags.id_length_present {
            r.u8("id length")? as usize
        } else {
            0
        };

        let header_size = r.position();
        let record_type = r.take(type_length, "type")?.to_vec();
        let id = r.take(id_length, "id")?.to_vec();
        let payload = r.take(payload_length, "payload")?.to_vec();
        let length = r.position();

        log::debug!(
            "ndef record: {} {} header={} type={} id={} payload={} total={}",
            if flags.short_record { "short" } else { "long" },
            tnf,
            header_size,
            type_length,
            id_length,
            payload_length,
            length
        );

        Ok(Self {
            tnf,
            flags,
            record_type,
            id,
            payload,
            length,
        })
    }

    pub fn tnf(&self) -> Tnf {
        self.tnf
    }

    pub fn flags(&self) -> RecordFlags {
        self.flags
    }

    pub fn record_type(&self) -> &[u8] {
        &self.record_type
    }

    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Bytes consumed from the source buffer, header included.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Forward-only cursor whose every read is bounds checked and fails with
/// a format error naming the field that ran past the end.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                Error::Format(format!(
                    "buffer too short for {}: need {} bytes at offset {}, {} available",
                    field,
                    len,
                    self.pos,
                    self.data.len().saturating_sub(self.pos)
                ))
            })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }

    fn be_u32(&mut self, field: &str) -> Result<u32> {
        let b = self.take(4, field)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
