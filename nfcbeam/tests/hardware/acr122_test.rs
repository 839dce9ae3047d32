#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use nfcbeam::Result;

// This integration test requires a real ACR122 connected. It is marked
// `#[ignore]` so CI does not attempt to run it. Run manually with:
//
// cargo test -p nfcbeam --test hardware --features pcsc -- --ignored
//

#[test]
#[ignore]
fn open_and_read_firmware() -> Result<()> {
    if let Some(mut device) = common::open_and_initialize_device()? {
        let firmware = device.firmware_version()?;
        assert!(firmware.starts_with("ACR122"), "firmware: {}", firmware);
        device.close()?;
    }
    Ok(())
}

// Hold an Android phone with a beamable page open against the reader.
#[test]
#[ignore]
fn receive_one_beam() -> Result<()> {
    if let Some(mut device) = common::open_and_initialize_device()? {
        let record = device.receive()?;
        assert!(record.length() > 0);
    }
    Ok(())
}
