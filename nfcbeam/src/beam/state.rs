// nfcbeam/src/beam/state.rs

use derive_more::Display;

use crate::Error;
use crate::protocol::{SequenceNumbers, SnepBuffer};

/// Handshake phases, in the order a successful beam walks them.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AntennaOn,
    InitiatorMode,
    AwaitingTarget,
    Connected,
    Receiving,
    Decoded,
    Closing,
    Done,
    Failed,
}

/// Bookkeeping of one handshake. Created fresh for every `start()` and
/// dropped with it, so nothing leaks into the next beam.
#[derive(Debug)]
pub struct HandshakeState {
    phase: Phase,
    history: Vec<Phase>,
    pub(crate) sequence: SequenceNumbers,
    pub(crate) buffer: Option<SnepBuffer>,
    pub(crate) teardown_errors: Vec<Error>,
}

impl HandshakeState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            history: vec![Phase::Idle],
            sequence: SequenceNumbers::default(),
            buffer: None,
            teardown_errors: Vec::new(),
        }
    }

    pub(crate) fn enter(&mut self, phase: Phase) {
        log::debug!("beam handshake: {} -> {}", self.phase, phase);
        self.phase = phase;
        self.history.push(phase);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every phase entered so far, `Idle` first.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    pub fn sequence(&self) -> SequenceNumbers {
        self.sequence
    }

    /// Declared SNEP size, once the first fragment arrived.
    pub fn declared_size(&self) -> Option<usize> {
        self.buffer.as_ref().map(SnepBuffer::declared_size)
    }

    /// NDEF bytes received so far.
    pub fn received_bytes(&self) -> usize {
        self.buffer.as_ref().map_or(0, SnepBuffer::received_bytes)
    }

    /// Reassembled NDEF bytes (SNEP header stripped, cut at the declared size).
    pub fn ndef_bytes(&self) -> &[u8] {
        match &self.buffer {
            Some(buffer) => buffer.ndef_bytes(),
            None => &[],
        }
    }

    /// Failures of the closing sequence. They never replace the handshake
    /// result; they are kept here for diagnostics.
    pub fn teardown_errors(&self) -> &[Error] {
        &self.teardown_errors
    }
}

impl Default for HandshakeState {
    fn default() -> Self {
        Self::new()
    }
}
