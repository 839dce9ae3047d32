// nfcbeam/src/channel/traits.rs

use crate::Result;

/// Channel abstracts the smart-card connection away from protocol logic.
/// One channel talks to exactly one reader; opening and enumerating
/// readers is the implementation's business.
pub trait Channel {
    /// Send one command APDU and return the complete response, status
    /// word included.
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Human readable name of the connected reader, when known.
    fn reader_name(&self) -> Option<&str> {
        None
    }

    /// Release the underlying connection. Default is a no-op so
    /// in-memory channels need not care.
    fn disconnect(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<C: Channel + ?Sized> Channel for Box<C> {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(command)
    }

    fn reader_name(&self) -> Option<&str> {
        (**self).reader_name()
    }

    fn disconnect(&mut self) -> Result<()> {
        (**self).disconnect()
    }
}
