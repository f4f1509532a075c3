#![doc = r#"
Contains the channel voice event type

A channel event is laid out as:

```text
<delta-time VLQ> <kind | channel> <param1> [<param2>]
```

The second parameter is left out for single-parameter messages such as
program changes.
"#]
mod kind;
pub use kind::*;

use alloc::vec::Vec;

use super::Encode;
use crate::{Channel, DeltaTime, EventError, MidiResult};

#[doc = r#"
A channel voice message together with its delta-time.

# Example
```rust
# use midigen::prelude::*;
let event = ChannelEvent::note_on(Channel::One, 60, 90).with_delta(128);
assert_eq!(event.to_bytes().unwrap(), vec![0x81, 0x00, 0x90, 60, 90]);

let event = ChannelEvent::new(0xC0, 3, 41, None).unwrap();
assert_eq!(event.to_bytes().unwrap(), vec![0x00, 0xC3, 41]);

assert!(ChannelEvent::new(0xF0, 0, 0, None).is_err());
assert!(ChannelEvent::new(0x90, 16, 60, Some(90)).is_err());
```
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelEvent {
    delta: DeltaTime,
    kind: VoiceKind,
    channel: Channel,
    param1: u8,
    param2: Option<u8>,
}

impl ChannelEvent {
    /// Create an event from raw values.
    ///
    /// # Errors
    /// If `kind` isn't one of the seven [`VoiceKind`] codes, or `channel` is above 15.
    pub fn new(kind: u8, channel: u8, param1: u8, param2: Option<u8>) -> Result<Self, EventError> {
        let kind = VoiceKind::try_from(kind)?;
        let channel = Channel::try_from(channel)?;
        Ok(Self::from_parts(kind, channel, param1, param2))
    }

    /// Create an event from already validated parts
    pub const fn from_parts(
        kind: VoiceKind,
        channel: Channel,
        param1: u8,
        param2: Option<u8>,
    ) -> Self {
        Self {
            delta: DeltaTime::ZERO,
            kind,
            channel,
            param1,
            param2,
        }
    }

    /// Place the event `delta` ticks after the previous one.
    pub const fn with_delta(mut self, ticks: u32) -> Self {
        self.delta = DeltaTime::new(ticks);
        self
    }

    /// Press a key
    pub const fn note_on(channel: Channel, key: u8, velocity: u8) -> Self {
        Self::from_parts(VoiceKind::NoteOn, channel, key, Some(velocity))
    }

    /// Release a key
    pub const fn note_off(channel: Channel, key: u8, velocity: u8) -> Self {
        Self::from_parts(VoiceKind::NoteOff, channel, key, Some(velocity))
    }

    /// Polyphonic pressure on a held key
    pub const fn after_touch(channel: Channel, key: u8, pressure: u8) -> Self {
        Self::from_parts(VoiceKind::AfterTouch, channel, key, Some(pressure))
    }

    /// Set a controller's value
    pub const fn controller(channel: Channel, controller: u8, value: u8) -> Self {
        Self::from_parts(VoiceKind::Controller, channel, controller, Some(value))
    }

    /// Select an instrument
    pub const fn program_change(channel: Channel, program: u8) -> Self {
        Self::from_parts(VoiceKind::ProgramChange, channel, program, None)
    }

    /// Pressure on the whole channel
    pub const fn channel_aftertouch(channel: Channel, pressure: u8) -> Self {
        Self::from_parts(VoiceKind::ChannelAftertouch, channel, pressure, None)
    }

    /// Move the pitch wheel. `value` is 14 bits; `0x2000` is centered.
    pub const fn pitch_bend(channel: Channel, value: u16) -> Self {
        let value = if value > 0x3FFF { 0x3FFF } else { value };
        let lsb = (value & 0x7F) as u8;
        let msb = (value >> 7) as u8;
        Self::from_parts(VoiceKind::PitchBend, channel, lsb, Some(msb))
    }

    /// Ticks since the previous event
    pub const fn delta(&self) -> DeltaTime {
        self.delta
    }

    /// The kind of message
    pub const fn kind(&self) -> VoiceKind {
        self.kind
    }

    /// The channel the message is sent on
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The first data byte
    pub const fn param1(&self) -> u8 {
        self.param1
    }

    /// The second data byte, if any
    pub const fn param2(&self) -> Option<u8> {
        self.param2
    }

    /// The status byte: kind in the high nibble, channel in the low
    pub const fn status(&self) -> u8 {
        self.kind.status(self.channel.nibble())
    }
}

impl Encode for ChannelEvent {
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()> {
        #[cfg(feature = "tracing")]
        if self.param1 > 0x7F || self.param2.is_some_and(|p| p > 0x7F) {
            tracing::warn!(
                "{:?} on channel {} has a data byte above 127 ({}, {:?}); \
                 most players will read it as a status byte",
                self.kind,
                self.channel,
                self.param1,
                self.param2
            );
        }

        out.extend_from_slice(self.delta.as_bytes());
        out.push(self.status());
        out.push(self.param1);
        if let Some(param2) = self.param2 {
            out.push(param2);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_parameter_layout() {
        let event = ChannelEvent::new(0x80, 15, 64, Some(10))
            .unwrap()
            .with_delta(512);
        assert_eq!(event.to_bytes().unwrap(), [0x84, 0x00, 0x8F, 64, 10]);
    }

    #[test]
    fn single_parameter_layout() {
        let event = ChannelEvent::program_change(Channel::Ten, 0);
        assert_eq!(event.to_bytes().unwrap(), [0x00, 0xC9, 0x00]);
        let event = ChannelEvent::channel_aftertouch(Channel::One, 100);
        assert_eq!(event.with_delta(3).to_bytes().unwrap(), [0x03, 0xD0, 100]);
    }

    #[test]
    fn raw_construction_is_validated() {
        assert_eq!(
            ChannelEvent::new(0x70, 0, 0, None),
            Err(EventError::InvalidKind(0x70))
        );
        assert_eq!(
            ChannelEvent::new(0x95, 0, 0, None),
            Err(EventError::InvalidKind(0x95))
        );
        assert_eq!(
            ChannelEvent::new(0x90, 16, 60, Some(90)),
            Err(EventError::InvalidChannel(16))
        );
    }

    #[test]
    fn raw_second_parameter_is_kept_as_given() {
        let event = ChannelEvent::new(0xC0, 0, 5, Some(7)).unwrap();
        assert_eq!(event.to_bytes().unwrap(), [0x00, 0xC0, 5, 7]);
    }

    #[test]
    fn pitch_bend_splits_fourteen_bits() {
        let center = ChannelEvent::pitch_bend(Channel::Two, 0x2000);
        assert_eq!(center.to_bytes().unwrap(), [0x00, 0xE1, 0x00, 0x40]);
        let max = ChannelEvent::pitch_bend(Channel::Two, u16::MAX);
        assert_eq!(max.to_bytes().unwrap(), [0x00, 0xE1, 0x7F, 0x7F]);
    }
}
