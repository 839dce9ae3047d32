// nfcbeam/src/ndef/well_known.rs

//! Decoders for the NFC Forum well-known Text ("T") and URI ("U") records,
//! the two types Android Beam pushes most often.

use crate::{Error, Result};

use super::record::NdefRecord;
use super::tnf::Tnf;

/// URI identifier codes 0x00..=0x23. Codes past the table are reserved and
/// expand to nothing.
const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// RTD Text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub language: String,
    pub text: String,
}

impl TextRecord {
    pub fn from_record(record: &NdefRecord) -> Result<Self> {
        expect_well_known(record, b"T")?;
        let payload = record.payload();
        let (&status, rest) = payload
            .split_first()
            .ok_or_else(|| Error::Format("text record without status byte".into()))?;

        let utf16 = status & 0x80 != 0;
        let lang_len = (status & 0x3F) as usize;
        if lang_len > rest.len() {
            return Err(Error::Format(format!(
                "text record language code of {} bytes exceeds payload",
                lang_len
            )));
        }
        let (lang, body) = rest.split_at(lang_len);
        let language = String::from_utf8(lang.to_vec())
            .map_err(|_| Error::Format("text record language is not ascii".into()))?;
        let text = if utf16 {
            decode_utf16(body)?
        } else {
            String::from_utf8(body.to_vec())
                .map_err(|e| Error::Format(format!("text record is not utf-8: {}", e)))?
        };
        Ok(Self { language, text })
    }
}

/// RTD URI record, abbreviation expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriRecord {
    pub uri: String,
}

impl UriRecord {
    pub fn from_record(record: &NdefRecord) -> Result<Self> {
        expect_well_known(record, b"U")?;
        let (&code, rest) = record
            .payload()
            .split_first()
            .ok_or_else(|| Error::Format("uri record without identifier code".into()))?;
        let prefix = URI_PREFIXES.get(code as usize).copied().unwrap_or("");
        let suffix = std::str::from_utf8(rest)
            .map_err(|e| Error::Format(format!("uri record is not utf-8: {}", e)))?;
        Ok(Self {
            uri: format!("{}{}", prefix, suffix),
        })
    }
}

fn expect_well_known(record: &NdefRecord, rtd: &[u8]) -> Result<()> {
    if record.tnf() != Tnf::WellKnown || record.record_type() != rtd {
        return Err(Error::Format(format!(
            "expected well-known record {:?}, got {} {:?}",
            String::from_utf8_lossy(rtd),
            record.tnf(),
            String::from_utf8_lossy(record.record_type())
        )));
    }
    Ok(())
}

fn decode_utf16(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::Format("utf-16 text has odd length".into()));
    }
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    // Big endian unless a byte order mark says otherwise.
    match units.first() {
        Some(0xFEFF) => {
            units.remove(0);
        }
        Some(0xFFFE) => {
            units.remove(0);
            for u in units.iter_mut() {
                *u = u.swap_bytes();
            }
        }
        _ => {}
    }
    String::from_utf16(&units).map_err(|e| Error::Format(format!("invalid utf-16 text: {}", e)))
}
