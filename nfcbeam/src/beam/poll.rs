// nfcbeam/src/beam/poll.rs

//! Blocking wait for an Android device to present itself as target.

use std::time::Duration;

use crate::channel::Channel;
use crate::constants::PN532_CMD_IN_DATA_EXCHANGE;
use crate::protocol::{codec, llcp};
use crate::utils::{CancelToken, Clock, Deadline};
use crate::{Error, Result};

/// Probe every `interval` until the target answers with an LLCP CONNECT.
/// Each round sleeps first, then checks `cancel`, then probes; the deadline
/// is checked after a probe so the last round still gets its answer.
/// Returns the number of probes sent.
pub fn await_target(
    channel: &mut dyn Channel,
    clock: &dyn Clock,
    cancel: &CancelToken,
    interval: Duration,
    timeout: Duration,
) -> Result<u32> {
    let deadline = Deadline::after(clock, timeout);
    let mut probes = 0u32;
    loop {
        clock.sleep(interval);
        if cancel.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let response = codec::exchange(channel, PN532_CMD_IN_DATA_EXCHANGE, &llcp::target_probe())?;
        probes += 1;
        if llcp::is_connect(&response) {
            log::info!("beam received after {} probes, starting handshake", probes);
            return Ok(probes);
        }

        if deadline.expired(clock) {
            return Err(Error::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            });
        }
    }
}
