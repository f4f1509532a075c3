use core::fmt;

use crate::{TempoError, bytes_to_int};

/// Microseconds in a minute
const MICROS_PER_MINUTE: u32 = 60_000_000;

/// The largest value the 3-byte tempo payload can hold
const MAX_MPQN: u32 = 0x00FF_FFFF;

#[doc = r#"
A tempo, stored the way MIDI files store it: microseconds per quarter note (MPQN).

# Example
```rust
# use midigen::prelude::*;
let tempo = Tempo::from_bpm(120).unwrap();
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
assert_eq!(tempo.to_bytes(), [0x07, 0xA1, 0x20]);
assert_eq!(tempo.bpm(), 120);
```
"#]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// The tempo files assume when none is given.
    pub const DEFAULT: Self = Self(500_000);

    /// `floor(60_000_000 / bpm)` microseconds per quarter note.
    ///
    /// # Errors
    /// Zero BPM, or anything under 4 BPM, which needs more than 24 bits.
    pub const fn from_bpm(bpm: u32) -> Result<Self, TempoError> {
        if bpm == 0 {
            return Err(TempoError::Zero);
        }
        Self::from_micros_per_quarter_note(MICROS_PER_MINUTE / bpm)
    }

    /// Create a tempo from microseconds per quarter note.
    pub const fn from_micros_per_quarter_note(mpqn: u32) -> Result<Self, TempoError> {
        if mpqn == 0 {
            return Err(TempoError::Zero);
        }
        if mpqn > MAX_MPQN {
            return Err(TempoError::TooSlow(mpqn as u64));
        }
        Ok(Self(mpqn))
    }

    /// Create a tempo from a big-endian byte sequence such as a tempo meta payload.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, TempoError> {
        let mpqn = bytes_to_int(bytes);
        let mpqn = u32::try_from(mpqn).map_err(|_| TempoError::TooSlow(mpqn))?;
        Self::from_micros_per_quarter_note(mpqn)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// `floor(60_000_000 / mpqn)` beats per minute
    pub const fn bpm(&self) -> u32 {
        MICROS_PER_MINUTE / self.0
    }

    /// The 3-byte big-endian payload of a tempo meta event
    pub const fn to_bytes(&self) -> [u8; 3] {
        let [_, hi, mid, lo] = self.0.to_be_bytes();
        [hi, mid, lo]
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM ({} us/quarter)", self.bpm(), self.0)
    }
}

/// Convert beats per minute into the 3-byte MPQN payload of a tempo meta event.
pub fn mpqn_from_bpm(bpm: u32) -> Result<[u8; 3], TempoError> {
    Tempo::from_bpm(bpm).map(|t| t.to_bytes())
}

/// Convert microseconds per quarter note back into beats per minute.
pub fn bpm_from_mpqn(mpqn: u32) -> Result<u32, TempoError> {
    if mpqn == 0 {
        return Err(TempoError::Zero);
    }
    Ok(MICROS_PER_MINUTE / mpqn)
}

/// [`bpm_from_mpqn`] for a big-endian byte sequence, such as the output of
/// [`mpqn_from_bpm`].
pub fn bpm_from_mpqn_bytes(mpqn: &[u8]) -> Result<u32, TempoError> {
    let value = bytes_to_int(mpqn);
    let value = u32::try_from(value).map_err(|_| TempoError::TooSlow(value))?;
    bpm_from_mpqn(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bpm_to_mpqn() {
        assert_eq!(mpqn_from_bpm(120), Ok([7, 161, 32]));
        assert_eq!(mpqn_from_bpm(60), Ok([0x0F, 0x42, 0x40]));
        // small values keep their leading zero bytes
        assert_eq!(mpqn_from_bpm(1_000), Ok([0x00, 0xEA, 0x60]));
        assert_eq!(mpqn_from_bpm(60_000_000), Ok([0, 0, 1]));
        assert_eq!(mpqn_from_bpm(0), Err(TempoError::Zero));
        assert_eq!(mpqn_from_bpm(3), Err(TempoError::TooSlow(20_000_000)));
        assert_eq!(mpqn_from_bpm(4), Ok([0xE4, 0xE1, 0xC0]));
    }

    #[test]
    fn mpqn_to_bpm() {
        assert_eq!(bpm_from_mpqn(500_000), Ok(120));
        assert_eq!(bpm_from_mpqn_bytes(&[7, 161, 32]), Ok(120));
        assert_eq!(bpm_from_mpqn(0), Err(TempoError::Zero));
    }

    #[test]
    fn bpm_round_trip() {
        for bpm in 4..=1_000u32 {
            let bytes = mpqn_from_bpm(bpm).unwrap();
            let back = bpm_from_mpqn_bytes(&bytes).unwrap();
            assert_eq!(back, 60_000_000 / (60_000_000 / bpm));
        }
        for bpm in [60, 100, 120] {
            let bytes = mpqn_from_bpm(bpm).unwrap();
            assert_eq!(bpm_from_mpqn_bytes(&bytes), Ok(bpm));
        }
    }

    #[test]
    fn tempo_from_bytes() {
        let tempo = Tempo::from_be_bytes(&[0x07, 0xA1, 0x20]).unwrap();
        assert_eq!(tempo, Tempo::DEFAULT);
        assert_eq!(
            Tempo::from_be_bytes(&[0x01, 0x00, 0x00, 0x00]),
            Err(TempoError::TooSlow(0x0100_0000))
        );
    }
}
