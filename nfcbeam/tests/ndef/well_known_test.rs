#[path = "../common/mod.rs"]
mod common;

use nfcbeam::ndef::{NdefRecord, TextRecord, Tnf, UriRecord};
use nfcbeam::test_support::encode_record;

#[test]
fn text_from_captured_record() {
    let record = NdefRecord::decode(&common::fixtures::text_hello()).unwrap();
    let text = TextRecord::from_record(&record).unwrap();
    assert_eq!(text.language, "en");
    assert_eq!(text.text, "hello");
}

#[test]
fn uri_prefix_is_expanded() {
    let record = NdefRecord::decode(&common::fixtures::uri_example()).unwrap();
    let uri = UriRecord::from_record(&record).unwrap();
    assert_eq!(uri.uri, "https://www.example.com");
}

#[test]
fn uri_helper_rejects_text_record() {
    let record = NdefRecord::decode(&common::fixtures::text_hello()).unwrap();
    assert!(UriRecord::from_record(&record).is_err());
}

#[test]
fn mime_record_is_not_well_known() {
    let bytes = encode_record(Tnf::MimeMedia, b"text/plain", None, b"hi");
    let record = NdefRecord::decode(&bytes).unwrap();
    assert!(TextRecord::from_record(&record).is_err());
}
