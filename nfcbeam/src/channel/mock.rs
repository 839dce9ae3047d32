// nfcbeam/src/channel/mock.rs

use std::collections::VecDeque;

use crate::channel::traits::Channel;
use crate::{Error, Result};

/// Mock channel for unit tests. It records transmitted commands and
/// returns queued responses in order.
#[derive(Debug, Default)]
pub struct MockChannel {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    /// Returned whenever the queue is empty; without it an empty queue
    /// is a channel failure.
    pub fallback: Option<Vec<u8>>,
    /// Testing hook: number of upcoming transmits that fail at channel level
    pub failures: usize,
    pub disconnected: bool,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn set_fallback(&mut self, resp: Vec<u8>) {
        self.fallback = Some(resp);
    }

    /// Commands transmitted with the given PN532 opcode, in order.
    pub fn sent_with_opcode(&self, opcode: u8) -> Vec<&Vec<u8>> {
        self.sent
            .iter()
            .filter(|cmd| {
                cmd.get(5) == Some(&crate::constants::PN532_CMD_PREFIX_HOST)
                    && cmd.get(6) == Some(&opcode)
            })
            .collect()
    }
}

impl Channel for MockChannel {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::channel("mock channel failure"));
        }
        match self.responses.pop_front() {
            Some(resp) => Ok(resp),
            None => self
                .fallback
                .clone()
                .ok_or_else(|| Error::channel("mock channel has no queued response")),
        }
    }

    fn reader_name(&self) -> Option<&str> {
        Some("mock reader")
    }

    fn disconnect(&mut self) -> Result<()> {
        self.disconnected = true;
        Ok(())
    }
}
