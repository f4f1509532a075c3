//! Small helpers for moving between integers, hex strings, and byte sequences.

use alloc::{string::String, vec::Vec};

use crate::HexError;

/// Map each byte to the character with the same code point (`0x41` -> `'A'`).
///
/// The result is binary-safe: every byte survives a round trip through
/// [`string_to_codes`].
pub fn codes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// The inverse of [`codes_to_string`].
///
/// Returns `None` if a character lies outside `U+0000..=U+00FF`.
pub fn string_to_codes(s: &str) -> Option<Vec<u8>> {
    s.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[doc = r#"
Parse a string of hex digits into big-endian bytes, left-padded with zeroes to at
least `width` bytes.

Digits are paired from the right, so an odd leading digit forms its own byte.

# Example
```rust
# use midigen::prelude::*;
assert_eq!(hex_to_bytes("c", 0).unwrap(), vec![0x0C]);
assert_eq!(hex_to_bytes("1a2", 4).unwrap(), vec![0x00, 0x00, 0x01, 0xA2]);
```
"#]
pub fn hex_to_bytes(hex: &str, width: usize) -> Result<Vec<u8>, HexError> {
    let nibbles = hex
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut bytes = Vec::with_capacity(width.max(nibbles.len().div_ceil(2)));
    let odd = nibbles.len() % 2;
    if odd == 1 {
        bytes.push(nibbles[0]);
    }
    let pairs = nibbles[odd..].chunks_exact(2);
    bytes.extend(pairs.map(|pair| (pair[0] << 4) | pair[1]));

    if bytes.len() < width {
        let mut padded = alloc::vec![0; width - bytes.len()];
        padded.append(&mut bytes);
        bytes = padded;
    }
    Ok(bytes)
}

/// Write `value` as exactly `width` big-endian bytes.
///
/// Fails if `value` needs more than `width` bytes.
pub fn int_to_bytes(value: u64, width: usize) -> Result<Vec<u8>, HexError> {
    let needed = (u64::BITS - value.leading_zeros()).div_ceil(8) as usize;
    if needed > width {
        return Err(HexError::TooWide { needed, width });
    }
    let be = value.to_be_bytes();
    let mut bytes = alloc::vec![0; width.saturating_sub(be.len())];
    bytes.extend_from_slice(&be[be.len() - width.min(be.len())..]);
    Ok(bytes)
}

/// Accumulate big-endian bytes into a single integer.
///
/// Only the last eight bytes contribute.
pub fn bytes_to_int(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}
