use alloc::{string::String, vec::Vec};

use super::{END_OF_TRACK, TRACK_CHUNK_ID, write_chunk};
use crate::{
    Channel, DEFAULT_VELOCITY, MidiResult, Tempo, ToPitch, TrackError,
    message::{ChannelEvent, Encode, MetaEvent, TrackEvent},
};

#[doc = r#"
An ordered list of events, serialized as one `MTrk` chunk.

Events are written in the order they were added, and every delta-time counts
from the event right before it. The end-of-track marker is not stored: it is
appended, and counted in the chunk length, each time the track is serialized.

The note builders accept anything implementing [`ToPitch`]: a MIDI number, a
string of digits, or a note name like `"c#4"`.

# Example
```rust
# use midigen::prelude::*;
let mut track = Track::new();
track
    .note_on(0, "c4", 0, DEFAULT_VELOCITY)?
    .note_off(0, 60, 64, DEFAULT_VELOCITY)?;

assert_eq!(
    track.to_bytes()?,
    vec![
        b'M', b'T', b'r', b'k', 0, 0, 0, 12,
        0x00, 0x90, 60, 90,
        0x40, 0x80, 60, 90,
        0x00, 0xFF, 0x2F, 0x00,
    ]
);
# Ok::<(), MidiError>(())
```
"#]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// An empty track
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// A track starting with pre-built events
    pub fn from_events(events: Vec<TrackEvent>) -> Self {
        Self { events }
    }

    /// The events, in the order they will be written
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Number of events, not counting the end-of-track marker
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events were added
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append any event to the end of the track.
    pub fn add_event(&mut self, event: impl Into<TrackEvent>) -> &mut Self {
        self.events.push(event.into());
        self
    }

    /// Press a key `delta` ticks after the previous event.
    ///
    /// # Errors
    /// If `channel` is above 15 or `pitch` can't be resolved.
    pub fn note_on<P: ToPitch>(
        &mut self,
        channel: u8,
        pitch: P,
        delta: u32,
        velocity: u8,
    ) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        let key = pitch.to_pitch()?;
        let event = ChannelEvent::note_on(channel, key, velocity);
        Ok(self.add_event(event.with_delta(delta)))
    }

    /// Release a key `delta` ticks after the previous event.
    ///
    /// # Errors
    /// If `channel` is above 15 or `pitch` can't be resolved.
    pub fn note_off<P: ToPitch>(
        &mut self,
        channel: u8,
        pitch: P,
        delta: u32,
        velocity: u8,
    ) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        let key = pitch.to_pitch()?;
        let event = ChannelEvent::note_off(channel, key, velocity);
        Ok(self.add_event(event.with_delta(delta)))
    }

    /// Press a key `delta` ticks after the previous event, and release it
    /// `duration` ticks later.
    ///
    /// A `duration` of zero only presses the key.
    pub fn note<P: ToPitch>(
        &mut self,
        channel: u8,
        pitch: P,
        duration: u32,
        delta: u32,
        velocity: u8,
    ) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        let key = pitch.to_pitch()?;

        let press = ChannelEvent::note_on(channel, key, velocity);
        self.add_event(press.with_delta(delta));
        if duration != 0 {
            let release = ChannelEvent::note_off(channel, key, velocity);
            self.add_event(release.with_delta(duration));
        }
        Ok(self)
    }

    /// Press every pitch at once, and release them all `duration` ticks later.
    ///
    /// Only the first release carries `duration`; the others follow it with a
    /// delta-time of zero. Releases use [`DEFAULT_VELOCITY`].
    ///
    /// # Errors
    /// If `pitches` is empty, `channel` is above 15, or any pitch can't be
    /// resolved. Nothing is added to the track on error.
    pub fn chord<P: ToPitch>(
        &mut self,
        channel: u8,
        pitches: &[P],
        duration: u32,
        velocity: u8,
    ) -> MidiResult<&mut Self> {
        if pitches.is_empty() {
            return Err(TrackError::EmptyChord.into());
        }
        let channel = Channel::try_from(channel)?;
        let keys = pitches
            .iter()
            .map(|pitch| pitch.to_pitch())
            .collect::<Result<Vec<_>, _>>()?;

        self.events.reserve(keys.len() * 2);
        for &key in &keys {
            self.add_event(ChannelEvent::note_on(channel, key, velocity));
        }
        for (i, &key) in keys.iter().enumerate() {
            let delta = if i == 0 { duration } else { 0 };
            let release = ChannelEvent::note_off(channel, key, DEFAULT_VELOCITY);
            self.add_event(release.with_delta(delta));
        }
        Ok(self)
    }

    /// Select an instrument (program change).
    pub fn set_instrument(
        &mut self,
        channel: u8,
        program: u8,
        delta: u32,
    ) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        let event = ChannelEvent::program_change(channel, program);
        Ok(self.add_event(event.with_delta(delta)))
    }

    /// Change the tempo, in beats per minute.
    pub fn set_tempo(&mut self, bpm: u32, delta: u32) -> MidiResult<&mut Self> {
        let tempo = Tempo::from_bpm(bpm)?;
        Ok(self.add_event(MetaEvent::tempo(tempo).with_delta(delta)))
    }

    /// Set a controller's value
    pub fn controller(
        &mut self,
        channel: u8,
        controller: u8,
        value: u8,
        delta: u32,
    ) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        let event = ChannelEvent::controller(channel, controller, value);
        Ok(self.add_event(event.with_delta(delta)))
    }

    /// Move the pitch wheel. `value` is 14 bits, `0x2000` is centered.
    pub fn pitch_bend(&mut self, channel: u8, value: u16, delta: u32) -> MidiResult<&mut Self> {
        let channel = Channel::try_from(channel)?;
        Ok(self.add_event(ChannelEvent::pitch_bend(channel, value).with_delta(delta)))
    }

    /// Name the track
    pub fn set_track_name(&mut self, name: impl Into<String>, delta: u32) -> &mut Self {
        self.add_event(MetaEvent::track_name(name).with_delta(delta))
    }

    /// Set the time signature with the usual 24 clocks per click and 8
    /// 32nd notes per quarter note.
    ///
    /// The denominator is a power of two: 3/4 is `set_time_signature(3, 2, 0)`.
    pub fn set_time_signature(
        &mut self,
        numerator: u8,
        denominator_pow2: u8,
        delta: u32,
    ) -> &mut Self {
        let event = MetaEvent::time_signature(numerator, denominator_pow2, 24, 8);
        self.add_event(event.with_delta(delta))
    }
}

impl From<Vec<TrackEvent>> for Track {
    fn from(events: Vec<TrackEvent>) -> Self {
        Self::from_events(events)
    }
}

impl<E: Into<TrackEvent>> Extend<E> for Track {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.events.extend(iter.into_iter().map(Into::into));
    }
}

impl Encode for Track {
    /// Appends the `MTrk` chunk: type, length, every event, then the end marker.
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()> {
        #[cfg(feature = "tracing")]
        let start = out.len();

        write_chunk(out, TRACK_CHUNK_ID, |out| {
            for event in &self.events {
                event.encode(out)?;
            }
            out.extend_from_slice(&END_OF_TRACK);
            Ok(())
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Wrote track chunk: {} events, {} bytes of data",
            self.events.len(),
            out.len() - start - 8
        );
        Ok(())
    }
}
