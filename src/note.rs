use alloc::{format, string::String};

use crate::PitchError;

/// Pitch of each letter at octave zero (`c0` is 12, so `c4` is 60).
const fn letter_pitch(letter: u8) -> Option<u8> {
    match letter {
        b'a' => Some(21),
        b'b' => Some(23),
        b'c' => Some(12),
        b'd' => Some(14),
        b'e' => Some(16),
        b'f' => Some(17),
        b'g' => Some(19),
        _ => None,
    }
}

/// Chromatic names starting at `c`, black keys spelled with sharps
const SHARP_NAMES: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

/// Chromatic names starting at `c`, black keys spelled with flats
const FLAT_NAMES: [&str; 12] = [
    "c", "db", "d", "eb", "e", "f", "gb", "g", "ab", "a", "bb", "b",
];

#[doc = r#"
Convert a note name such as `"c4"`, `"F#3"` or `"bb1"` into a MIDI pitch.

The name is a letter `a`-`g`, any number of `#` (sharp) or `b` (flat), then an
octave number. Letters are case-insensitive. Each sharp adds a semitone and each
flat removes one, so unconventional spellings work: `"fb4"` is `e4`, `"b#2"` is `c3`.

# Example
```rust
# use midigen::prelude::*;
assert_eq!(pitch_from_note_name("c4").unwrap(), 60);
assert_eq!(pitch_from_note_name("c#3").unwrap(), 49);
assert_eq!(pitch_from_note_name("Eb4").unwrap(), 63);
```
"#]
pub fn pitch_from_note_name(name: &str) -> Result<u8, PitchError> {
    let malformed = || PitchError::Malformed(name.into());
    let lower = name.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    let (&letter, rest) = bytes.split_first().ok_or_else(malformed)?;
    let base = letter_pitch(letter).ok_or_else(malformed)?;

    let accidentals = rest
        .iter()
        .take_while(|&&b| b == b'#' || b == b'b')
        .count();
    let (accidentals, digits) = rest.split_at(accidentals);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    let shift = match accidentals.first() {
        None => 0,
        Some(&first) if accidentals.iter().all(|&b| b == first) => {
            let count = accidentals.len() as i64;
            if first == b'#' {
                count
            } else {
                -count
            }
        }
        // mixed sharps and flats
        Some(_) => return Err(malformed()),
    };

    let octave: i64 = lower[1 + accidentals.len()..]
        .parse()
        .map_err(|_| malformed())?;
    let pitch = octave
        .checked_mul(12)
        .and_then(|p| p.checked_add(base as i64 + shift))
        .ok_or_else(malformed)?;

    u8::try_from(pitch).map_err(|_| PitchError::OutOfRange(pitch))
}

#[doc = r#"
Convert a MIDI pitch into a note name such as `"c4"`.

Sharps are used for black keys unless `prefer_flats` is set, in which case
`c#`, `d#`, `f#`, `g#` and `a#` become `db`, `eb`, `gb`, `ab` and `bb`.

Pitches `12..=23` are octave zero. Anything below 12 has no name.

# Example
```rust
# use midigen::prelude::*;
assert_eq!(note_name_from_pitch(60, false).unwrap(), "c4");
assert_eq!(note_name_from_pitch(34, true).unwrap(), "bb1");
assert!(note_name_from_pitch(11, false).is_err());
```
"#]
pub fn note_name_from_pitch(pitch: u8, prefer_flats: bool) -> Result<String, PitchError> {
    if pitch < 12 {
        return Err(PitchError::Unnamed(pitch));
    }
    let octave = if pitch > 23 { pitch / 12 - 1 } else { 0 };
    let class = ((pitch - octave * 12) % 12) as usize;
    let name = if prefer_flats {
        FLAT_NAMES[class]
    } else {
        SHARP_NAMES[class]
    };
    Ok(format!("{name}{octave}"))
}

#[doc = r#"
Something that can be resolved to a MIDI pitch.

Numbers pass through (after a range check), strings of digits are parsed as
decimal, and any other string is read as a note name.
"#]
pub trait ToPitch {
    /// Resolve to a pitch in `0..=255`
    fn to_pitch(&self) -> Result<u8, PitchError>;
}

/// Resolve any [`ToPitch`] value to a numeric pitch.
///
/// ```rust
/// # use midigen::prelude::*;
/// assert_eq!(ensure_pitch(2).unwrap(), 2);
/// assert_eq!(ensure_pitch("62").unwrap(), 62);
/// assert_eq!(ensure_pitch("c3").unwrap(), 48);
/// ```
pub fn ensure_pitch<P: ToPitch>(pitch: P) -> Result<u8, PitchError> {
    pitch.to_pitch()
}

impl ToPitch for u8 {
    fn to_pitch(&self) -> Result<u8, PitchError> {
        Ok(*self)
    }
}

macro_rules! int_to_pitch {
    ($($ty:ty),*) => {
        $(
            impl ToPitch for $ty {
                fn to_pitch(&self) -> Result<u8, PitchError> {
                    u8::try_from(*self).map_err(|_| PitchError::OutOfRange(*self as i64))
                }
            }
        )*
    };
}
int_to_pitch!(u16, u32, i32, i64);

impl ToPitch for str {
    fn to_pitch(&self) -> Result<u8, PitchError> {
        if !self.is_empty() && self.bytes().all(|b| b.is_ascii_digit()) {
            let value = self
                .parse::<i64>()
                .map_err(|_| PitchError::Malformed(self.into()))?;
            return u8::try_from(value).map_err(|_| PitchError::OutOfRange(value));
        }
        pitch_from_note_name(self)
    }
}

impl ToPitch for String {
    fn to_pitch(&self) -> Result<u8, PitchError> {
        self.as_str().to_pitch()
    }
}

impl<T: ToPitch + ?Sized> ToPitch for &T {
    fn to_pitch(&self) -> Result<u8, PitchError> {
        (**self).to_pitch()
    }
}
