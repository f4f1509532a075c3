use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::EventError;

#[doc = r#"
One of the sixteen MIDI channels.

Channels are numbered from zero on the wire, so [`Channel::One`] is `0` and
[`Channel::Sixteen`] is `15`.

# Example
```rust
# use midigen::prelude::*;
let channel = Channel::try_from(9u8).unwrap();
assert_eq!(channel, Channel::Ten);
assert_eq!(u8::from(channel), 9);
assert!(Channel::try_from(16u8).is_err());
```
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[num_enum(error_type(name = EventError, constructor = EventError::InvalidChannel))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The low nibble of a status byte
    pub const fn nibble(&self) -> u8 {
        *self as u8 & 0x0F
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // humans count channels from one
        write!(f, "{}", *self as u8 + 1)
    }
}

#[test]
fn channel_bounds() {
    use pretty_assertions::assert_eq;
    for value in 0..16u8 {
        let channel = Channel::try_from(value).unwrap();
        assert_eq!(channel.nibble(), value);
    }
    for bad in [16u8, 17, 255] {
        let err = EventError::InvalidChannel(bad);
        assert_eq!(Channel::try_from(bad), Err(err));
    }
}
