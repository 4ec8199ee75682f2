//! Modified UTF-8, the string payload encoding of `DataOutput.writeUTF`.
//!
//! Differs from standard UTF-8 in two ways: U+0000 is written as the
//! two-byte sequence `C0 80`, and supplementary characters are written as
//! two three-byte groups, one per UTF-16 surrogate half (CESU-8 style).
//! The two-byte length prefix is the codec's concern, not this module's.

use crate::NbtError;

/// Encodes a string as modified UTF-8 bytes.
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007f => out.push(unit as u8),
            0x0000 | 0x0080..=0x07ff => {
                out.push(0xc0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                out.push(0xe0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    out
}

/// Decodes modified UTF-8 bytes back into a string.
///
/// Fails with [`NbtError::InvalidUtf8`] on a malformed byte group, a
/// truncated group, or a code-unit sequence that is not valid UTF-16
/// (an unpaired surrogate).
pub fn decode(bytes: &[u8]) -> Result<String, NbtError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let a = bytes[i];
        if a & 0x80 == 0 {
            units.push(a as u16);
            i += 1;
        } else if a & 0xe0 == 0xc0 {
            let b = *bytes.get(i + 1).ok_or(NbtError::InvalidUtf8)?;
            if b & 0xc0 != 0x80 {
                return Err(NbtError::InvalidUtf8);
            }
            units.push(((a as u16 & 0x1f) << 6) | (b as u16 & 0x3f));
            i += 2;
        } else if a & 0xf0 == 0xe0 {
            let b = *bytes.get(i + 1).ok_or(NbtError::InvalidUtf8)?;
            let c = *bytes.get(i + 2).ok_or(NbtError::InvalidUtf8)?;
            if b & 0xc0 != 0x80 || c & 0xc0 != 0x80 {
                return Err(NbtError::InvalidUtf8);
            }
            units.push(((a as u16 & 0x0f) << 12) | ((b as u16 & 0x3f) << 6) | (c as u16 & 0x3f));
            i += 3;
        } else {
            // 4-byte standard UTF-8 groups do not occur in modified UTF-8.
            return Err(NbtError::InvalidUtf8);
        }
    }
    String::from_utf16(&units).map_err(|_| NbtError::InvalidUtf8)
}
