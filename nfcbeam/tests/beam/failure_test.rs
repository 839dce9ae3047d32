#[path = "../common/mod.rs"]
mod common;

use nfcbeam::beam::{BeamHandshake, Phase};
use nfcbeam::channel::MockChannel;
use nfcbeam::constants::{PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_RELEASE};
use nfcbeam::device::BeamConfig;
use nfcbeam::utils::{CancelToken, Clock, MockClock, ms};
use nfcbeam::{Error, ErrorKind, TransportErrorKind};

fn link_up() -> MockChannel {
    let mut mock = MockChannel::new();
    mock.push_response(common::ok_response());
    mock.push_response(common::ok_response());
    mock.push_response(common::connect_response());
    mock.push_response(common::ok_response());
    mock
}

#[test]
fn size_limit_sends_exactly_the_closing_frames() {
    let mut mock = link_up();
    mock.push_response(common::snep_response(4096, &[0xD1; 32]));
    mock.set_fallback(common::ok_response());

    let config = BeamConfig::default();
    let clock = MockClock::new();
    let cancel = CancelToken::new();
    let mut handshake = BeamHandshake::new(&mut mock, &config, &clock, &cancel);
    let err = handshake.run().unwrap_err();
    assert!(matches!(err, Error::SizeLimit { size: 4096, max: 2048 }));
    drop(handshake);

    let tail: Vec<Vec<u8>> = mock.sent[mock.sent.len() - 3..].to_vec();
    assert_eq!(tail[0][5..], [0xD4, 0x40, 0x01, 0x83, 0x04, 0x01, 0x10, 0x81]);
    assert_eq!(tail[1][5..], [0xD4, 0x40, 0x01, 0x81, 0xC4, 0x00]);
    assert_eq!(tail[2][5..], [0xD4, PN532_CMD_IN_RELEASE, 0x01]);
    // nothing between the first fragment and the closing frames
    assert_eq!(mock.sent_with_opcode(PN532_CMD_IN_DATA_EXCHANGE).len(), 5);
}

#[test]
fn timeout_on_simulated_clock() {
    let mut mock = MockChannel::new();
    mock.push_response(common::ok_response());
    mock.push_response(common::ok_response());
    mock.set_fallback(common::no_target_response());

    let config = BeamConfig::default();
    let clock = MockClock::new();
    let cancel = CancelToken::new();
    let mut handshake = BeamHandshake::new(&mut mock, &config, &clock, &cancel);
    let err = handshake.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(clock.now() > ms(3500));
    assert!(clock.now() <= ms(3650));
    assert_eq!(handshake.state().phase(), Phase::Failed);
    drop(handshake);

    // antenna, jump, then probes only: no teardown without a target
    assert!(mock.sent_with_opcode(PN532_CMD_IN_RELEASE).is_empty());
    assert!(mock.sent[2..].iter().all(|c| c[7..] == [0x01, 0x01, 0x04, 0x20]));
}

#[test]
fn checksum_error_at_every_step() {
    // number of scripted ok replies before the failing one
    for ok_before in 0..6 {
        let script = [
            common::ok_response(),
            common::ok_response(),
            common::connect_response(),
            common::ok_response(),
            common::snep_response(40, &[0xD1; 20]),
            common::information_response(&[0u8; 10]),
        ];
        let mut mock = MockChannel::new();
        for resp in script.iter().take(ok_before) {
            mock.push_response(resp.clone());
        }
        mock.push_response(vec![0x63, 0x27]);
        mock.set_fallback(common::ok_response());

        let config = BeamConfig::default();
        let clock = MockClock::new();
        let cancel = CancelToken::new();
        let mut handshake = BeamHandshake::new(&mut mock, &config, &clock, &cancel);
        let err = handshake.run().unwrap_err();
        assert_eq!(
            err.transport_kind(),
            Some(TransportErrorKind::Checksum),
            "step {}",
            ok_before
        );
        let connected = handshake.state().history().contains(&Phase::Connected);
        drop(handshake);
        let released = !mock.sent_with_opcode(PN532_CMD_IN_RELEASE).is_empty();
        assert_eq!(connected, released, "step {}", ok_before);
    }
}

#[test]
fn cancelled_while_waiting() {
    let mut mock = MockChannel::new();
    mock.push_response(common::ok_response());
    mock.push_response(common::ok_response());
    mock.set_fallback(common::no_target_response());

    let config = BeamConfig::default();
    let clock = MockClock::new();
    let cancel = CancelToken::new();
    cancel.cancel();
    let mut handshake = BeamHandshake::new(&mut mock, &config, &clock, &cancel);
    assert!(matches!(handshake.run(), Err(Error::Interrupted)));
}

#[test]
fn channel_failure_during_teardown_is_recorded() {
    let ndef = common::fixtures::text_hello();
    let mut mock = link_up();
    mock.push_response(common::snep_response(ndef.len() as u32, &ndef));
    mock.push_response(common::ok_response());
    // success gets a checksum error, DM and release find no reply
    mock.push_response(vec![0x63, 0x27]);

    let config = BeamConfig::default();
    let clock = MockClock::new();
    let cancel = CancelToken::new();
    let mut handshake = BeamHandshake::new(&mut mock, &config, &clock, &cancel);
    let record = handshake.run().unwrap();
    assert_eq!(record.record_type(), b"T");

    let errors = handshake.state().teardown_errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].transport_kind(), Some(TransportErrorKind::Checksum));
    assert_eq!(errors[2].transport_kind(), Some(TransportErrorKind::Channel));
}
