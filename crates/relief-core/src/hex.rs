//! # Hex Encoding
//!
//! Lowercase hex for keys, signatures, nullifiers and proof bytes. Decoding
//! works on raw bytes, so any non-ASCII input is an error rather than a
//! slicing panic.

use thiserror::Error;

/// Failure to decode a hex string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("hex string has odd length: {0}")]
    OddLength(usize),
    #[error("invalid hex digit at position {0}")]
    InvalidDigit(usize),
}

/// Render bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string (either case) into bytes.
pub fn decode(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }
    raw.chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble(pair[0]).ok_or(HexError::InvalidDigit(i * 2))?;
            let lo = nibble(pair[1]).ok_or(HexError::InvalidDigit(i * 2 + 1))?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

/// Decode into a fixed-size array.
pub fn decode_array<const N: usize>(hex: &str) -> Result<[u8; N], String> {
    let bytes = decode(hex).map_err(|e| e.to_string())?;
    <[u8; N]>::try_from(bytes.as_slice())
        .map_err(|_| format!("expected {N} bytes, got {}", bytes.len()))
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
