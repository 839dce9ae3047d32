// nfcbeam/src/protocol/parser.rs

//! Bounds-checked readers over reply bytes. Errors are protocol errors:
//! a reply that is shorter than the protocol requires.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize, what: &str) -> Result<()> {
    if data.len() < min {
        return Err(Error::Protocol(format!(
            "{} too short: expected at least {} bytes, got {}",
            what,
            min,
            data.len()
        )));
    }
    Ok(())
}

/// Read a big-endian u32 at given index, with bounds checking.
pub fn be_u32_at(data: &[u8], idx: usize, what: &str) -> Result<u32> {
    let end = idx
        .checked_add(4)
        .ok_or_else(|| Error::Protocol(format!("{} offset overflow", what)))?;
    ensure_len(data, end, what)?;
    Ok(u32::from_be_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Return everything from `idx` on, with bounds checking.
pub fn tail_from<'a>(data: &'a [u8], idx: usize, what: &str) -> Result<&'a [u8]> {
    ensure_len(data, idx, what)?;
    Ok(&data[idx..])
}
