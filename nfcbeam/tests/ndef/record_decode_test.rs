#[path = "../common/mod.rs"]
mod common;

use nfcbeam::ndef::{self, NdefMessage, NdefRecord, Tnf};
use nfcbeam::{Error, ErrorKind};
use proptest::prelude::*;

#[test]
fn captured_text_record() {
    let record = ndef::decode(&common::fixtures::text_hello()).unwrap();
    assert_eq!(record.tnf(), Tnf::WellKnown);
    assert_eq!(record.tnf().to_string(), "TNF_WELL_KNOWN");
    assert_eq!(record.record_type(), b"T");
    assert!(record.id().is_empty());
    assert_eq!(record.length(), 12);
    let flags = record.flags();
    assert!(flags.message_begin && flags.message_end && flags.short_record);
}

#[test]
fn long_record_with_id() {
    let bytes = common::fixtures::long_external_record(300);
    let record = NdefRecord::decode(&bytes).unwrap();
    assert_eq!(record.tnf(), Tnf::ExternalType);
    assert_eq!(record.id(), b"7");
    assert_eq!(record.payload().len(), 300);
    // 6-byte header + IL byte + type + id + payload
    assert_eq!(record.length(), 7 + 15 + 1 + 300);
    assert!(!record.flags().short_record);
}

#[test]
fn declared_payload_beyond_buffer() {
    let mut bytes = common::fixtures::text_hello();
    bytes.truncate(bytes.len() - 3);
    let err = NdefRecord::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn message_walks_to_message_end() {
    let mut bytes = common::fixtures::text_hello();
    bytes[0] &= !0x40;
    let mut uri = common::fixtures::uri_example();
    uri[0] &= !0x80;
    bytes.extend_from_slice(&uri);

    let message = NdefMessage::decode(&bytes).unwrap();
    let types: Vec<&[u8]> = message.records().iter().map(|r| r.record_type()).collect();
    assert_eq!(types, vec![&b"T"[..], &b"U"[..]]);
}

#[test]
fn empty_message_is_format_error() {
    assert!(matches!(NdefMessage::decode(&[]), Err(Error::Format(_))));
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = NdefRecord::decode(&bytes);
        let _ = NdefMessage::decode(&bytes);
    }

    #[test]
    fn truncated_records_fail_cleanly(payload_len in 0usize..100, cut in 1usize..20) {
        let bytes = common::fixtures::mime_record_of_len(payload_len + 6);
        let keep = bytes.len().saturating_sub(cut);
        let err = NdefRecord::decode(&bytes[..keep]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
    }
}
