#[path = "../common/mod.rs"]
mod common;

use nfcbeam::constants::{INITIATOR_PAYLOAD, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_JUMP_FOR_DEP};
use nfcbeam::protocol::{CommandFrame, ResponseFrame, llcp};
use nfcbeam::{Error, utils};

#[test]
fn jump_for_dep_frame_matches_reader_trace() {
    let frame = CommandFrame::build(PN532_CMD_IN_JUMP_FOR_DEP, &INITIATOR_PAYLOAD).unwrap();
    let expected = utils::parse_hex(
        "FF 00 00 00 17 D4 56 00 02 05 00 FF FF 00 00 46 66 6D 01 01 10 03 02 00 13 04 01 96",
    )
    .unwrap();
    assert_eq!(frame.as_bytes(), expected.as_slice());
}

#[test]
fn probe_frame_matches_reader_trace() {
    let frame = CommandFrame::build(PN532_CMD_IN_DATA_EXCHANGE, &llcp::target_probe()).unwrap();
    assert_eq!(
        utils::bytes_to_hex_spaced(frame.as_bytes()),
        "ff 00 00 00 06 d4 40 01 01 04 20"
    );
}

#[test]
fn oversized_payload_is_rejected() {
    let payload = vec![0u8; 254];
    let err = CommandFrame::build(PN532_CMD_IN_DATA_EXCHANGE, &payload).unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[test]
fn snep_bytes_from_captured_reply() {
    let reply = ResponseFrame::new(common::fixtures::text_hello_reply());
    assert!(llcp::is_information(&reply));
    let snep = llcp::extract_snep(&reply).unwrap();
    assert_eq!(&snep[..2], &[0x10, 0x02]);
    assert_eq!(&snep[6..], common::fixtures::text_hello().as_slice());
}
