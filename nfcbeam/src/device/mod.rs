// nfcbeam/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::BeamConfig;
pub use handle::{BeamCallback, Device, Initialized, Uninitialized};
