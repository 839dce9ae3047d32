// nfcbeam/src/ndef/mod.rs

//! NDEF decoding: single records, whole messages and the well-known
//! Text/URI payloads.

pub mod message;
pub mod record;
pub mod tnf;
pub mod well_known;

pub use message::NdefMessage;
pub use record::NdefRecord;
pub use tnf::{RecordFlags, Tnf};
pub use well_known::{TextRecord, UriRecord};

/// Decode one record from the start of `data`.
pub fn decode(data: &[u8]) -> crate::Result<NdefRecord> {
    NdefRecord::decode(data)
}
