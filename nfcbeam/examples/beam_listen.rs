//! Wait for Android Beam pushes on the first PC/SC reader and print them.
//!
//! Usage:
//!   RUST_LOG=nfcbeam=debug cargo run -p nfcbeam --example beam_listen --features pcsc
//!
//! Optional arguments: timeout in ms, max message size in bytes.

use anyhow::Context;
use nfcbeam::prelude::*;
use nfcbeam::utils::HexDump;

fn describe(record: &NdefRecord) -> String {
    if let Ok(text) = TextRecord::from_record(record) {
        return format!("text [{}]: {}", text.language, text.text);
    }
    if let Ok(uri) = UriRecord::from_record(record) {
        return format!("uri: {}", uri.uri);
    }
    format!(
        "{} type={} payload={}",
        record.tnf(),
        String::from_utf8_lossy(record.record_type()),
        HexDump(record.payload())
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let timeout_ms: u64 = match args.next() {
        Some(arg) => arg.parse().context("timeout must be a number of milliseconds")?,
        None => 10_000,
    };
    let max_allowed_size: usize = match args.next() {
        Some(arg) => arg.parse().context("size must be a number of bytes")?,
        None => 2048,
    };

    let device = Device::open().context("opening the first PC/SC reader")?;
    println!("Opened reader: {}", device.reader_name().unwrap_or("<unnamed>"));

    let mut device = device.initialize(BeamConfig::new(timeout_ms, max_allowed_size))?;
    match device.firmware_version() {
        Ok(firmware) => println!("Firmware: {}", firmware),
        Err(e) => println!("Firmware query failed (non-fatal): {}", e),
    }

    device.on_beam_received(|record| println!("Beam received: {}", describe(&record)));

    loop {
        println!("Waiting {} ms for a beam...", timeout_ms);
        match device.start() {
            Ok(()) => {
                for e in device.last_teardown_errors() {
                    println!("teardown warning: {}", e);
                }
            }
            Err(Error::Timeout { .. }) => println!("No phone detected"),
            Err(e) => {
                println!("Beam failed: {}", e);
                if e.kind() == ErrorKind::Transport {
                    break;
                }
            }
        }
    }

    device.close()?;
    Ok(())
}
