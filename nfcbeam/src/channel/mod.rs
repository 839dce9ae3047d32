// nfcbeam/src/channel/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::MockChannel;
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscChannel;
pub use traits::Channel;
