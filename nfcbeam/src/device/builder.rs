// nfcbeam/src/device/builder.rs

use crate::channel::Channel;
use crate::device::BeamConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::utils::Clock;
use crate::Result;

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    channel: Option<Box<dyn Channel>>,
    clock: Option<Box<dyn Clock>>,
    config: BeamConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created channel (e.g. MockChannel)
    pub fn with_channel(mut self, channel: Box<dyn Channel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: BeamConfig) -> Self {
        self.config = config;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn max_allowed_size(mut self, max_allowed_size: usize) -> Self {
        self.config.max_allowed_size = max_allowed_size;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Without a channel, the first PC/SC reader is opened when the `pcsc`
    /// feature is enabled; otherwise this fails with `Initialization`.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let channel = match self.channel {
            Some(channel) => channel,
            None => default_channel()?,
        };
        let device = Device::new_with_channel(channel);
        Ok(match self.clock {
            Some(clock) => device.with_clock(clock),
            None => device,
        })
    }

    /// Build and initialize with the collected configuration.
    pub fn build(self) -> Result<Device<Initialized>> {
        let config = self.config;
        self.build_uninitialized()?.initialize(config)
    }
}

#[cfg(feature = "pcsc")]
fn default_channel() -> Result<Box<dyn Channel>> {
    Ok(Box::new(crate::channel::PcscChannel::open_first()?))
}

#[cfg(not(feature = "pcsc"))]
fn default_channel() -> Result<Box<dyn Channel>> {
    Err(crate::Error::Initialization(
        "no channel given and pcsc support not compiled in".into(),
    ))
}
