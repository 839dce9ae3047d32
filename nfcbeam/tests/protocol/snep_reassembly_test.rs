#[path = "../common/mod.rs"]
mod common;

use nfcbeam::ndef::NdefRecord;
use nfcbeam::protocol::SnepBuffer;
use proptest::prelude::*;

fn snep_message(ndef: &[u8]) -> Vec<u8> {
    let mut v = vec![0x10, 0x02];
    v.extend_from_slice(&(ndef.len() as u32).to_be_bytes());
    v.extend_from_slice(ndef);
    v
}

#[test]
fn twenty_fifteen_five_split() {
    let ndef = common::fixtures::mime_record_of_len(40);
    let snep = snep_message(&ndef);

    let mut buffer = SnepBuffer::start(&snep[..26]).unwrap();
    assert_eq!(buffer.received_bytes(), 20);
    assert!(!buffer.is_complete());
    buffer.push(&snep[26..41]);
    buffer.push(&snep[41..]);
    assert!(buffer.is_complete());

    let record = NdefRecord::decode(buffer.ndef_bytes()).unwrap();
    assert_eq!(record.length(), 40);
}

proptest! {
    #[test]
    fn record_survives_any_split(payload_len in 0usize..200, cuts in proptest::collection::vec(1usize..32, 0..8)) {
        let ndef = common::fixtures::mime_record_of_len(payload_len + 6);
        let snep = snep_message(&ndef);

        let first = (6 + cuts.first().copied().unwrap_or(snep.len())).min(snep.len());
        let mut buffer = SnepBuffer::start(&snep[..first]).unwrap();
        let mut offset = first;
        for &cut in cuts.iter().skip(1) {
            let end = (offset + cut).min(snep.len());
            buffer.push(&snep[offset..end]);
            offset = end;
        }
        buffer.push(&snep[offset..]);

        prop_assert!(buffer.is_complete());
        let record = NdefRecord::decode(buffer.ndef_bytes()).unwrap();
        prop_assert_eq!(record.payload().len(), payload_len);
    }
}
