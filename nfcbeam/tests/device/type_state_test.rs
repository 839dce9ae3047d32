#[path = "../common/mod.rs"]
mod common;

use nfcbeam::channel::MockChannel;
use nfcbeam::device::{BeamConfig, Device};
use nfcbeam::ErrorKind;

#[test]
fn initialize_transitions_and_keeps_config() {
    let device = Device::new_with_channel(Box::new(MockChannel::new()));
    assert_eq!(device.reader_name(), Some("mock reader"));

    let initialized = device
        .initialize(BeamConfig::new(1200, 4096))
        .unwrap_or_else(|e| panic!("initialize failed: {e}"));
    assert_eq!(initialized.config().timeout_ms, 1200);
    assert_eq!(initialized.config().max_allowed_size, 4096);
    assert!(initialized.last_handshake().is_none());
    assert!(initialized.last_teardown_errors().is_empty());
}

#[test]
fn defaults_match_reader_defaults() {
    let device = Device::new_with_channel(Box::new(MockChannel::new()))
        .initialize_with_defaults()
        .unwrap_or_else(|e| panic!("initialize failed: {e}"));
    assert_eq!(*device.config(), BeamConfig::default());
    assert_eq!(device.config().timeout_ms, 3500);
    assert_eq!(device.config().max_allowed_size, 2048);
}

#[test]
fn zero_size_limit_is_rejected() {
    let result = Device::new_with_channel(Box::new(MockChannel::new()))
        .initialize(BeamConfig::new(3500, 0));
    match result {
        Err(e) => assert_eq!(e.kind(), ErrorKind::Initialization),
        Ok(_) => panic!("zero max_allowed_size accepted"),
    }
}
