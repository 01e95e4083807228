//! Hexadecimal helpers used for display and for parsing caller input.
//!
//! These helpers are intentionally small and avoid external dependencies;
//! they support both compact (no-separator) output for logs and the
//! uppercase spaced form in which card data is surfaced to callers, plus
//! a parser for space-separated byte tokens.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to an uppercase hex string with a single space
/// between each byte. This is the form in which response payloads are
/// rendered to callers.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_upper_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse whitespace-separated hex byte tokens (e.g. `"00 A4 04 00"`).
///
/// Every token must be a single byte in hexadecimal. An empty input or a
/// malformed token fails with [`Error::InvalidInput`]; parsing happens
/// before anything is transmitted.
pub fn parse_hex_tokens(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for token in input.split_whitespace() {
        let byte = u8::from_str_radix(token, 16)
            .map_err(|_| Error::InvalidInput(format!("invalid hex byte '{token}'")))?;
        out.push(byte);
    }

    if out.is_empty() {
        return Err(Error::InvalidInput("no hex bytes supplied".to_string()));
    }

    Ok(out)
}
