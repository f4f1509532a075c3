use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::EventError;

#[doc = r#"
The kind of a channel voice message, i.e. the high nibble of its status byte.

```text
| kind               | status | data bytes          |
|--------------------|--------|---------------------|
| NoteOff            | 0x8n   | key, velocity       |
| NoteOn             | 0x9n   | key, velocity       |
| AfterTouch         | 0xAn   | key, pressure       |
| Controller         | 0xBn   | controller, value   |
| ProgramChange      | 0xCn   | program             |
| ChannelAftertouch  | 0xDn   | pressure            |
| PitchBend          | 0xEn   | lsb, msb            |
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, IntoPrimitive, TryFromPrimitive)]
#[num_enum(error_type(name = EventError, constructor = EventError::InvalidKind))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// Release a key
    NoteOff = 0x80,
    /// Press a key
    NoteOn = 0x90,
    /// Polyphonic key pressure
    AfterTouch = 0xA0,
    /// Control change
    Controller = 0xB0,
    /// Select an instrument
    ProgramChange = 0xC0,
    /// Pressure applied to the whole channel
    ChannelAftertouch = 0xD0,
    /// Pitch wheel
    PitchBend = 0xE0,
}

impl VoiceKind {
    /// The status byte for this kind on a channel nibble
    pub const fn status(&self, channel: u8) -> u8 {
        *self as u8 | (channel & 0x0F)
    }
}

#[test]
fn only_exact_status_nibbles() {
    use pretty_assertions::assert_eq;
    assert_eq!(VoiceKind::try_from(0x90u8), Ok(VoiceKind::NoteOn));
    assert_eq!(VoiceKind::try_from(0xE0u8), Ok(VoiceKind::PitchBend));
    for bad in [0x00u8, 0x7F, 0x91, 0xF0, 0xFF] {
        assert_eq!(VoiceKind::try_from(bad), Err(EventError::InvalidKind(bad)));
    }
    assert_eq!(VoiceKind::ProgramChange.status(0x1F), 0xCF);
}
