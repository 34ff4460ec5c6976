//! Byte/Text Conversion Helpers
//!
//! Protocol control lines are single-byte text. These helpers map each
//! character to one byte and back (ISO-8859-1 style), so every byte value
//! 0-255 survives a round trip, control characters included.

use bytes::{Bytes, BytesMut};

/// Encode a string one byte per character.
///
/// Characters above U+00FF do not fit in a byte and are truncated to their
/// low 8 bits, the same way the wire would see them.
pub fn from_ascii(s: &str) -> Bytes {
    s.chars().map(|c| c as u32 as u8).collect::<Vec<u8>>().into()
}

/// Decode bytes one character per byte.
pub fn to_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Copy several independent ranges into one contiguous range.
pub fn concat(parts: &[&[u8]]) -> Bytes {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = BytesMut::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out.freeze()
}
