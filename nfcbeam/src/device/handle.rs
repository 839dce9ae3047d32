// nfcbeam/src/device/handle.rs

use std::marker::PhantomData;

use crate::beam::{BeamHandshake, HandshakeState};
use crate::channel::Channel;
use crate::constants::{ACR122_GET_FIRMWARE_VERSION, STATUS_WORD_LEN, SW_SUCCESS};
use crate::device::BeamConfig;
use crate::ndef::{NdefMessage, NdefRecord};
use crate::utils::{CancelToken, Clock, HexDump, SystemClock};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Application callback receiving the first record of every beamed message.
pub type BeamCallback = Box<dyn FnMut(NdefRecord)>;

/// Reader session that enforces initialization state at compile time.
///
/// The device owns its channel exclusively; each `start()` lends it to a
/// fresh [`BeamHandshake`].
pub struct Device<State = Uninitialized> {
    channel: Box<dyn Channel>,
    clock: Box<dyn Clock>,
    config: BeamConfig,
    cancel: CancelToken,
    callback: Option<BeamCallback>,
    last_handshake: Option<HandshakeState>,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing channel. Tests hand in a
    /// `MockChannel` here.
    pub fn new_with_channel(channel: Box<dyn Channel>) -> Self {
        Self {
            channel,
            clock: Box::new(SystemClock::new()),
            config: BeamConfig::default(),
            cancel: CancelToken::new(),
            callback: None,
            last_handshake: None,
            _state: PhantomData,
        }
    }

    /// Open the first PC/SC reader and connect to it.
    #[cfg(feature = "pcsc")]
    pub fn open() -> Result<Self> {
        let channel = crate::channel::PcscChannel::open_first()?;
        Ok(Self::new_with_channel(Box::new(channel)))
    }

    /// Replace the clock used for polling and timeouts.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate `config` and move into the initialized state.
    pub fn initialize(self, config: BeamConfig) -> Result<Device<Initialized>> {
        config.validate()?;
        log::debug!(
            "reader {} initialized: timeout {} ms, max_allowed_size {}",
            self.channel.reader_name().unwrap_or("<unnamed>"),
            config.timeout_ms,
            config.max_allowed_size
        );
        Ok(Device {
            channel: self.channel,
            clock: self.clock,
            config,
            cancel: self.cancel,
            callback: self.callback,
            last_handshake: None,
            _state: PhantomData,
        })
    }

    /// Initialize with 3500 ms timeout and 2048 bytes size limit.
    pub fn initialize_with_defaults(self) -> Result<Device<Initialized>> {
        self.initialize(BeamConfig::default())
    }
}

impl<State> Device<State> {
    pub fn reader_name(&self) -> Option<&str> {
        self.channel.reader_name()
    }

    /// Token that interrupts a running `start()` from another thread.
    ///
    /// The device clears it when the next handshake begins, so a cancel
    /// only affects the wait that is running when it is issued.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Disconnect the channel. The device is consumed.
    pub fn close(mut self) -> Result<()> {
        self.channel.disconnect()
    }
}

impl Device<Initialized> {
    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    /// Register the listener for beamed records, replacing any previous one.
    pub fn on_beam_received<F>(&mut self, callback: F)
    where
        F: FnMut(NdefRecord) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Wait for one beam and hand the first record to the callback.
    ///
    /// The callback runs after the link has been released and only when
    /// the whole handshake succeeded.
    pub fn start(&mut self) -> Result<()> {
        let record = self.receive()?;
        match self.callback.as_mut() {
            Some(callback) => callback(record),
            None => log::warn!("beam received but no callback registered, record dropped"),
        }
        Ok(())
    }

    /// Wait for one beam and return its first record without invoking the
    /// callback.
    pub fn receive(&mut self) -> Result<NdefRecord> {
        let (outcome, state) = self.run_handshake();
        self.last_handshake = Some(state);
        outcome
    }

    /// Wait for one beam and decode every record of the message.
    pub fn receive_message(&mut self) -> Result<NdefMessage> {
        let (outcome, state) = self.run_handshake();
        let message = outcome.and_then(|_| NdefMessage::decode(state.ndef_bytes()));
        self.last_handshake = Some(state);
        message
    }

    /// State of the most recent handshake, if any ran.
    pub fn last_handshake(&self) -> Option<&HandshakeState> {
        self.last_handshake.as_ref()
    }

    /// Errors from the closing sequence of the most recent handshake.
    pub fn last_teardown_errors(&self) -> &[Error] {
        match &self.last_handshake {
            Some(state) => state.teardown_errors(),
            None => &[],
        }
    }

    /// ACR122 firmware string, e.g. `ACR122U201`.
    pub fn firmware_version(&mut self) -> Result<String> {
        log::trace!("-> {}", HexDump(&ACR122_GET_FIRMWARE_VERSION));
        let reply = self.channel.transmit(&ACR122_GET_FIRMWARE_VERSION)?;
        log::trace!("<- {}", HexDump(&reply));

        // some firmware appends 90 00, older readers answer the bare string
        let text = match reply.len().checked_sub(STATUS_WORD_LEN) {
            Some(end) if (reply[end], reply[end + 1]) == SW_SUCCESS => &reply[..end],
            _ => &reply[..],
        };
        Ok(String::from_utf8_lossy(text).trim_end_matches('\0').to_string())
    }

    fn run_handshake(&mut self) -> (Result<NdefRecord>, HandshakeState) {
        if self.cancel.is_cancelled() {
            log::debug!("clearing cancellation left from a previous wait");
            self.cancel.reset();
        }
        let mut handshake =
            BeamHandshake::new(&mut *self.channel, &self.config, &*self.clock, &self.cancel);
        let outcome = handshake.run();
        (outcome, handshake.into_state())
    }
}
