use crate::FileError;

/// The largest division a header can hold; the top bit selects SMPTE timing.
const MAX_TICKS: u16 = 0x7FFF;

/// A representation of the `tpqn` timing for a MIDI file
///
/// The tickrate per quarter note defines what a "quarter note" means for every
/// delta-time in the file. It is always in `1..=32767`.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub struct TicksPerQuarterNote {
    pub(crate) inner: [u8; 2],
}

impl TicksPerQuarterNote {
    /// 128 ticks per quarter note
    pub const DEFAULT: Self = Self { inner: [0x00, 0x80] };

    /// # Errors
    /// If `tpqn` is zero or has the leading bit set.
    pub const fn new(tpqn: u16) -> Result<Self, FileError> {
        if tpqn == 0 || tpqn > MAX_TICKS {
            return Err(FileError::InvalidTicks(tpqn as i64));
        }
        Ok(Self {
            inner: tpqn.to_be_bytes(),
        })
    }

    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        u16::from_be_bytes(self.inner)
    }

    /// The big-endian division field of the header chunk
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.inner
    }
}

impl Default for TicksPerQuarterNote {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for TicksPerQuarterNote {
    type Error = FileError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for TicksPerQuarterNote {
    type Error = FileError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let tpqn = u16::try_from(value).map_err(|_| FileError::InvalidTicks(value))?;
        Self::new(tpqn)
    }
}

impl TryFrom<f64> for TicksPerQuarterNote {
    type Error = FileError;
    /// For loosely typed sources, such as a JSON number.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value % 1.0 != 0.0 {
            return Err(FileError::FractionalTicks);
        }
        if !(1.0..=MAX_TICKS as f64).contains(&value) {
            return Err(FileError::InvalidTicks(value as i64));
        }
        Self::new(value as u16)
    }
}

#[doc = r#"
Options for a new [`MidiFile`](crate::file::MidiFile).

# Example
```rust
# use midigen::prelude::*;
let config = FileConfig { ticks: 480 };
let file = MidiFile::from_config(&config).unwrap();
assert_eq!(file.ticks(), 480);

assert_eq!(FileConfig::default().ticks, 128);
assert!(MidiFile::from_config(&FileConfig { ticks: 0 }).is_err());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FileConfig {
    /// Ticks per quarter note, `1..=32767`
    pub ticks: u16,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            ticks: TicksPerQuarterNote::DEFAULT.ticks_per_quarter_note(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_valid_division_is_kept() {
        for ticks in 1..=MAX_TICKS {
            let tpqn = TicksPerQuarterNote::new(ticks).unwrap();
            assert_eq!(tpqn.ticks_per_quarter_note(), ticks);
        }
        let default = TicksPerQuarterNote::default();
        assert_eq!(default.ticks_per_quarter_note(), 128);
    }

    #[test]
    fn out_of_range_divisions() {
        let zero = TicksPerQuarterNote::new(0);
        assert_eq!(zero, Err(FileError::InvalidTicks(0)));
        assert_eq!(
            TicksPerQuarterNote::new(0x8000),
            Err(FileError::InvalidTicks(32768))
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(-5i64),
            Err(FileError::InvalidTicks(-5))
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(85_000i64),
            Err(FileError::InvalidTicks(85_000))
        );
    }

    #[test]
    fn loosely_typed_divisions() {
        assert_eq!(
            TicksPerQuarterNote::try_from(1000.0).map(|t| t.ticks_per_quarter_note()),
            Ok(1000)
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(133.7),
            Err(FileError::FractionalTicks)
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(f64::NAN),
            Err(FileError::FractionalTicks)
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(-1.0),
            Err(FileError::InvalidTicks(-1))
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(32768.0),
            Err(FileError::InvalidTicks(32768))
        );
        assert_eq!(
            TicksPerQuarterNote::try_from(0.0),
            Err(FileError::InvalidTicks(0))
        );
    }
}
