// nfcbeam/src/beam/handshake.rs

//! One Android Beam reception, from switching the antenna on to releasing
//! the target.

use crate::channel::Channel;
use crate::constants::{
    ANTENNA_ON_PAYLOAD, INITIATOR_PAYLOAD, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_JUMP_FOR_DEP,
    PN532_CMD_IN_RELEASE, PN532_CMD_RF_CONFIGURATION,
};
use crate::device::BeamConfig;
use crate::ndef::NdefRecord;
use crate::protocol::{ResponseFrame, SnepBuffer, codec, llcp};
use crate::utils::{CancelToken, Clock};
use crate::{Error, Result};

use super::poll;
use super::state::{HandshakeState, Phase};

/// Drives a single handshake over a borrowed channel.
///
/// The handshake owns its [`HandshakeState`]; the channel, configuration,
/// clock and cancel token are borrowed from the device for the duration of
/// one `start()` call.
pub struct BeamHandshake<'a> {
    channel: &'a mut dyn Channel,
    config: &'a BeamConfig,
    clock: &'a dyn Clock,
    cancel: &'a CancelToken,
    state: HandshakeState,
}

impl<'a> BeamHandshake<'a> {
    pub fn new(
        channel: &'a mut dyn Channel,
        config: &'a BeamConfig,
        clock: &'a dyn Clock,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            channel,
            config,
            clock,
            cancel,
            state: HandshakeState::new(),
        }
    }

    /// Run the whole handshake and return the first NDEF record of the
    /// beamed message.
    ///
    /// Once a target connected, the closing sequence (SNEP Success, DM,
    /// InRelease) is sent whatever the outcome. Failures during closing are
    /// kept in [`HandshakeState::teardown_errors`]; the returned error is
    /// always the one that stopped the transfer.
    pub fn run(&mut self) -> Result<NdefRecord> {
        let outcome = match self.open_link() {
            Ok(()) => {
                let received = self.transfer();
                self.close();
                received
            }
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(record) => {
                log::debug!(
                    "beam complete: {} record, {} payload bytes",
                    record.tnf(),
                    record.payload().len()
                );
                self.state.enter(Phase::Done);
            }
            Err(e) => {
                log::debug!("beam failed in {}: {}", self.state.phase(), e);
                self.state.enter(Phase::Failed);
            }
        }
        outcome
    }

    pub fn state(&self) -> &HandshakeState {
        &self.state
    }

    pub fn into_state(self) -> HandshakeState {
        self.state
    }

    fn open_link(&mut self) -> Result<()> {
        self.state.enter(Phase::AntennaOn);
        codec::exchange(
            &mut *self.channel,
            PN532_CMD_RF_CONFIGURATION,
            &ANTENNA_ON_PAYLOAD,
        )?;

        self.state.enter(Phase::InitiatorMode);
        codec::exchange(
            &mut *self.channel,
            PN532_CMD_IN_JUMP_FOR_DEP,
            &INITIATOR_PAYLOAD,
        )?;

        self.state.enter(Phase::AwaitingTarget);
        poll::await_target(
            &mut *self.channel,
            self.clock,
            self.cancel,
            self.config.poll_interval(),
            self.config.timeout(),
        )?;

        self.state.enter(Phase::Connected);
        Ok(())
    }

    fn transfer(&mut self) -> Result<NdefRecord> {
        self.data_exchange(&llcp::connection_complete())?;

        self.state.enter(Phase::Receiving);
        // the CC is repeated; its answer carries the first SNEP fragment
        let first = self.data_exchange(&llcp::connection_complete())?;
        let buffer = SnepBuffer::start(llcp::extract_snep(&first)?)?;
        self.state.sequence.received += 1;

        let size = buffer.declared_size();
        let complete = buffer.is_complete();
        log::debug!(
            "snep header: {} of {} bytes in first fragment",
            buffer.received_bytes(),
            size
        );
        self.state.buffer = Some(buffer);

        if size > self.config.max_allowed_size {
            return Err(Error::SizeLimit {
                size,
                max: self.config.max_allowed_size,
            });
        }

        if complete {
            self.data_exchange(&llcp::snep_empty_put(self.state.sequence))?;
            self.state.sequence.sent += 1;
        } else {
            self.collect_fragments()?;
        }

        self.state.enter(Phase::Decoded);
        NdefRecord::decode(self.state.ndef_bytes())
    }

    fn collect_fragments(&mut self) -> Result<()> {
        let reply = self.data_exchange(&llcp::snep_continue(self.state.sequence))?;
        self.state.sequence.sent += 1;
        self.accept_fragment(&reply)?;

        let mut misses = 0u32;
        while !self.is_complete() {
            if self.cancel.is_cancelled() {
                return Err(Error::Interrupted);
            }

            let reply = self.data_exchange(&llcp::snep_empty_put(self.state.sequence))?;
            self.state.sequence.sent += 1;
            if self.accept_fragment(&reply)? {
                misses = 0;
                continue;
            }

            misses += 1;
            if misses > self.config.max_fragment_retries {
                return Err(Error::Protocol(format!(
                    "no snep fragment after {} polls ({} of {} bytes received)",
                    misses,
                    self.state.received_bytes(),
                    self.state.declared_size().unwrap_or_default()
                )));
            }
        }
        Ok(())
    }

    /// Append `reply` to the message if it is an I-PDU from the SNEP server.
    /// Returns `false` when nothing was added.
    fn accept_fragment(&mut self, reply: &ResponseFrame) -> Result<bool> {
        if !llcp::is_information(reply) {
            log::trace!("reply is not a snep fragment, polling again");
            return Ok(false);
        }

        let fragment = llcp::extract_snep(reply)?;
        let Some(buffer) = self.state.buffer.as_mut() else {
            return Err(Error::Protocol("fragment before snep header".into()));
        };
        self.state.sequence.received += 1;
        // an I-PDU without SNEP bytes is no progress
        if fragment.is_empty() {
            log::trace!("empty snep fragment, polling again");
            return Ok(false);
        }
        buffer.push(fragment);
        log::debug!(
            "received {} of {} bytes",
            buffer.received_bytes(),
            buffer.declared_size()
        );
        Ok(true)
    }

    fn is_complete(&self) -> bool {
        self.state
            .buffer
            .as_ref()
            .is_some_and(SnepBuffer::is_complete)
    }

    /// Success, DM and InRelease. The Success PDU carries N(S) counting
    /// every PDU sent so far, the empty PUT ack of a single-fragment beam
    /// included, so its sequence byte is `0x11` there rather than `0x01`.
    fn close(&mut self) {
        self.state.enter(Phase::Closing);

        let success = llcp::snep_success(self.state.sequence);
        let disconnect = llcp::disconnect();
        let release = llcp::release_target();
        let steps: [(&str, u8, &[u8]); 3] = [
            ("snep success", PN532_CMD_IN_DATA_EXCHANGE, &success),
            ("llcp disconnect", PN532_CMD_IN_DATA_EXCHANGE, &disconnect),
            ("release target", PN532_CMD_IN_RELEASE, &release),
        ];
        for (what, opcode, payload) in steps {
            if let Err(e) = codec::exchange(&mut *self.channel, opcode, payload) {
                log::warn!("teardown step '{}' failed: {}", what, e);
                self.state.teardown_errors.push(e);
            }
        }
    }

    fn data_exchange(&mut self, payload: &[u8]) -> Result<ResponseFrame> {
        codec::exchange(&mut *self.channel, PN532_CMD_IN_DATA_EXCHANGE, payload)
    }
}
