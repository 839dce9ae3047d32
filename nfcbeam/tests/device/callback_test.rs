#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use nfcbeam::constants::PN532_CMD_IN_RELEASE;
use nfcbeam::device::BeamConfig;
use nfcbeam::ndef::{NdefRecord, UriRecord};
use nfcbeam::{Error, TransportErrorKind};

#[test]
fn callback_gets_record_after_release() {
    common::init_logger();
    let shared = common::SharedChannel::new(common::scripted_beam(&common::fixtures::uri_example()));
    let mut device =
        common::initialized_mock_device(shared.clone(), BeamConfig::default()).unwrap();

    let received: Rc<RefCell<Vec<NdefRecord>>> = Rc::default();
    let observed_release = Rc::new(RefCell::new(false));
    let (sink, probe, seen) = (received.clone(), shared.clone(), observed_release.clone());
    device.on_beam_received(move |record| {
        *seen.borrow_mut() = !probe.sent_with_opcode(PN532_CMD_IN_RELEASE).is_empty();
        sink.borrow_mut().push(record);
    });

    device.start().unwrap();
    assert!(*observed_release.borrow());
    let records = received.borrow();
    assert_eq!(records.len(), 1);
    assert_eq!(
        UriRecord::from_record(&records[0]).unwrap().uri,
        "https://www.example.com"
    );
}

#[test]
fn second_start_needs_a_second_beam() {
    let mut mock = common::scripted_beam(&common::fixtures::text_hello());
    for resp in [common::ok_response(), common::ok_response()] {
        mock.push_response(resp);
    }
    mock.set_fallback(common::no_target_response());
    let mut device = common::initialized_mock_device(mock, BeamConfig::new(450, 2048)).unwrap();

    let count = Rc::new(RefCell::new(0u32));
    let counter = count.clone();
    device.on_beam_received(move |_| *counter.borrow_mut() += 1);

    device.start().unwrap();
    let err = device.start().unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 450 }));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn failure_is_returned_and_callback_skipped() {
    let mut mock = nfcbeam::channel::MockChannel::new();
    mock.push_response(common::ok_response());
    mock.push_response(vec![0x63, 0x7F]);
    let mut device = common::initialized_mock_device(mock, BeamConfig::default()).unwrap();

    let called = Rc::new(RefCell::new(false));
    let flag = called.clone();
    device.on_beam_received(move |_| *flag.borrow_mut() = true);

    let err = device.start().unwrap_err();
    assert_eq!(
        err.transport_kind(),
        Some(TransportErrorKind::UnsupportedCommand)
    );
    assert!(!*called.borrow());
}

#[test]
fn start_without_callback_still_completes() {
    let mock = common::scripted_beam(&common::fixtures::text_hello());
    let mut device = common::initialized_mock_device(mock, BeamConfig::default()).unwrap();
    device.start().unwrap();
    assert!(device.last_teardown_errors().is_empty());
}

#[test]
fn receive_returns_record_directly() {
    let mock = common::scripted_beam(&common::fixtures::text_hello());
    let mut device = common::initialized_mock_device(mock, BeamConfig::default()).unwrap();
    let record = device.receive().unwrap();
    assert_eq!(record.payload()[1..3], *b"en");
}
