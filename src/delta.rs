#![doc = r#"
Variable-length delta-times

Every event in a track chunk is preceded by the number of ticks elapsed since the
previous event, written as a variable-length quantity (VLQ): seven bits per byte,
most significant group first, with the high bit set on every byte but the last.

| ticks       | bytes            |
|-------------|------------------|
| `0`         | `00`             |
| `127`       | `7F`             |
| `128`       | `81 00`          |
| `512`       | `84 00`          |
| `0x0FFFFFFF`| `FF FF FF 7F`    |
"#]

use alloc::vec::Vec;
use core::fmt;

use crate::DeltaTimeError;

/// The most bytes a `u32` takes up as a VLQ.
const MAX_VLQ_LEN: usize = 5;

#[doc = r#"
A delta-time, kept alongside its variable-length encoding.

The encoding is computed once at construction, so serializing an event is a copy.

# Example
```rust
# use midigen::prelude::*;
let delta = DeltaTime::new(128);
assert_eq!(delta.ticks(), 128);
assert_eq!(delta.as_bytes(), &[0x81, 0x00]);
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeltaTime {
    ticks: u32,
    bytes: [u8; MAX_VLQ_LEN],
    len: u8,
}

impl DeltaTime {
    /// No time since the previous event.
    pub const ZERO: Self = Self::new(0);

    /// Encode a tick count.
    pub const fn new(ticks: u32) -> Self {
        // low group first, continuation groups shifted in above it
        let mut rest = ticks as u64;
        let mut buffer = rest & 0x7F;
        rest >>= 7;
        while rest != 0 {
            buffer <<= 8;
            buffer |= (rest & 0x7F) | 0x80;
            rest >>= 7;
        }

        let mut bytes = [0; MAX_VLQ_LEN];
        let mut len = 0;
        loop {
            bytes[len] = (buffer & 0xFF) as u8;
            len += 1;
            if buffer & 0x80 != 0 {
                buffer >>= 8;
            } else {
                break;
            }
        }

        Self {
            ticks,
            bytes,
            len: len as u8,
        }
    }

    /// The number of ticks since the previous event
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// The variable-length encoding of the tick count
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Default for DeltaTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for DeltaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaTime")
            .field("ticks", &self.ticks)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

impl From<u32> for DeltaTime {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl TryFrom<i64> for DeltaTime {
    type Error = DeltaTimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DeltaTimeError::Negative(value));
        }
        let ticks = u32::try_from(value)
            .map_err(|_| DeltaTimeError::Overflow(value))?;
        Ok(Self::new(ticks))
    }
}

/// Translate a tick count into its MIDI variable-length byte sequence.
pub fn encode_delta_time(ticks: u32) -> Vec<u8> {
    DeltaTime::new(ticks).as_bytes().to_vec()
}

/// Read a variable-length quantity from the front of `bytes`.
///
/// Returns the value and how many bytes it took up.
pub fn decode_delta_time(bytes: &[u8]) -> Result<(u32, usize), DeltaTimeError> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().take(MAX_VLQ_LEN).enumerate() {
        value = (value << 7) | (byte & 0x7F) as u64;
        if byte & 0x80 == 0 {
            let ticks = u32::try_from(value)
                .map_err(|_| DeltaTimeError::Overflow(value as i64))?;
            return Ok((ticks, i + 1));
        }
    }
    if bytes.len() >= MAX_VLQ_LEN {
        return Err(DeltaTimeError::Overflow(value as i64));
    }
    Err(DeltaTimeError::Truncated)
}
