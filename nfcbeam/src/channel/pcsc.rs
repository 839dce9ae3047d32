// nfcbeam/src/channel/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::CString;

use ::pcsc::{Card, Context, Disposition, Protocols, Scope, ShareMode};

use crate::channel::traits::Channel;
use crate::utils::HexDump;
use crate::{Error, Result};

/// PC/SC channel to the first reader the resource manager reports. It is
/// feature-gated behind `--features pcsc` and requires the `pcsc` crate
/// (pcsclite on Linux, WinSCard on Windows).
pub struct PcscChannel {
    card: Option<Card>,
    // Declared after `card` so it is dropped last.
    _context: Context,
    reader: String,
    buffer: Vec<u8>,
}

impl PcscChannel {
    /// Open the first reader found. ACR122 readers expose the PN532 as a
    /// pseudo card, so "no card present" means the reader is not one we
    /// can drive.
    pub fn open_first() -> Result<Self> {
        let context = Context::establish(Scope::User)
            .map_err(|e| Error::Initialization(format!("pc/sc context unavailable: {}", e)))?;

        let readers = context
            .list_readers_owned()
            .map_err(|e| Error::Initialization(format!("cannot list readers: {}", e)))?;
        let Some(reader) = readers.into_iter().next() else {
            return Err(Error::Initialization("card reader not found".into()));
        };
        Self::connect(context, reader)
    }

    fn connect(context: Context, reader: CString) -> Result<Self> {
        let name = reader.to_string_lossy().into_owned();
        log::info!("card reader {} found", name);

        let card = match context.connect(&reader, ShareMode::Shared, Protocols::ANY) {
            Ok(card) => card,
            Err(::pcsc::Error::NoSmartcard) | Err(::pcsc::Error::RemovedCard) => {
                return Err(Error::Initialization(format!(
                    "reader {} not supported, connect an ACR122 (touchatag) reader",
                    name
                )));
            }
            Err(e) => return Err(Error::Initialization(format!("connect failed: {}", e))),
        };

        Ok(Self {
            card: Some(card),
            _context: context,
            reader: name,
            buffer: vec![0u8; ::pcsc::MAX_BUFFER_SIZE_EXTENDED],
        })
    }
}

impl Channel for PcscChannel {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        let card = self
            .card
            .as_ref()
            .ok_or_else(|| Error::channel("channel already disconnected"))?;
        let response = card.transmit(command, &mut self.buffer)?;
        log::trace!("pcsc {} <- {}", self.reader, HexDump(response));
        Ok(response.to_vec())
    }

    fn reader_name(&self) -> Option<&str> {
        Some(&self.reader)
    }

    fn disconnect(&mut self) -> Result<()> {
        match self.card.take() {
            Some(card) => card
                .disconnect(Disposition::LeaveCard)
                .map_err(|(_card, e)| Error::from(e)),
            None => Ok(()),
        }
    }
}

impl Drop for PcscChannel {
    fn drop(&mut self) {
        if let Err(e) = self.disconnect() {
            log::warn!("disconnect of {} failed: {}", self.reader, e);
        }
    }
}
