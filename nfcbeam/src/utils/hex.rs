//! Hexadecimal helpers used for frame tracing and test fixtures.

use std::fmt;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xd4, 0x40]` -> `"d440"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Convert a byte slice to a lowercase hex string with a single space
/// between bytes, the layout used in frame traces.
///
/// Example: `&[0xd4, 0x40]` -> `"d4 40"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexDump(bytes).to_string()
}

/// Parse a hex string into bytes. ASCII whitespace between digits is
/// ignored so traces can be pasted back in.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}

/// Lazily formatted spaced hex view of a byte slice. Use it inside
/// `log` macros so nothing is allocated when the level is disabled.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
