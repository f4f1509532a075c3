#![doc = r#"
Contains meta events: everything in a track that isn't sent to an instrument

A meta event is laid out as:

```text
<delta-time VLQ> FF <type> <length> <payload...>
```

The length is a single byte here, so payloads are limited to 255 bytes.
"#]

mod smpte_offset;
pub use smpte_offset::*;

use alloc::{string::String, vec::Vec};
use num_enum::{FromPrimitive, IntoPrimitive};

use super::Encode;
use crate::{Channel, DeltaTime, MetaError, MidiResult, SmpteError, Tempo};

/// Marks an event as a meta event
pub const META_MARKER: u8 = 0xFF;

#[doc = r#"
The type byte of a meta event.

Types aren't restricted to the known ones: any other byte is kept as
[`MetaType::Other`] and written through unchanged.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02 ssss`
    Sequence = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    Instrument = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    Smpte = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
    /// Any other type byte
    #[num_enum(catch_all)]
    Other(u8),
}

/// The payload of a meta event
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MetaData {
    /// No payload, written as a zero length
    #[default]
    Empty,
    /// A single byte
    Byte(u8),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Text, written as its UTF-8 bytes
    Text(String),
}

impl MetaData {
    /// The payload bytes, without the length prefix
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Byte(b) => core::slice::from_ref(b),
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }
}

impl From<u8> for MetaData {
    fn from(value: u8) -> Self {
        Self::Byte(value)
    }
}
impl From<Vec<u8>> for MetaData {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}
impl From<&[u8]> for MetaData {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}
impl<const N: usize> From<[u8; N]> for MetaData {
    fn from(value: [u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}
impl From<String> for MetaData {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl From<&str> for MetaData {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

#[doc = r#"
A meta event together with its delta-time.

The type isn't checked against the known [`MetaType`]s. An event built without a
type (see [`MetaEvent::untyped`]) fails when serialized.

# Example
```rust
# use midigen::prelude::*;
let name = MetaEvent::track_name("Piano");
assert_eq!(
    name.to_bytes().unwrap(),
    vec![0x00, 0xFF, 0x03, 5, b'P', b'i', b'a', b'n', b'o']
);

let custom = MetaEvent::new(0x60u8, vec![1u8, 2]).with_delta(128);
assert_eq!(custom.to_bytes().unwrap(), vec![0x81, 0x00, 0xFF, 0x60, 2, 1, 2]);

assert!(MetaEvent::untyped(MetaData::Empty).to_bytes().is_err());
```
"#]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MetaEvent {
    delta: DeltaTime,
    kind: Option<MetaType>,
    data: MetaData,
}

impl MetaEvent {
    /// Create a meta event of any type
    pub fn new(kind: impl Into<MetaType>, data: impl Into<MetaData>) -> Self {
        Self {
            delta: DeltaTime::ZERO,
            kind: Some(kind.into()),
            data: data.into(),
        }
    }

    /// Create a meta event whose type is set later with [`MetaEvent::with_kind`]
    pub fn untyped(data: impl Into<MetaData>) -> Self {
        Self {
            delta: DeltaTime::ZERO,
            kind: None,
            data: data.into(),
        }
    }

    /// Place the event `ticks` after the previous one.
    pub fn with_delta(mut self, ticks: u32) -> Self {
        self.delta = DeltaTime::new(ticks);
        self
    }

    /// Set the type byte
    pub fn with_kind(mut self, kind: impl Into<MetaType>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sequence number, `FF 00 02 ssss`
    pub fn sequence_number(number: u16) -> Self {
        Self::new(MetaType::Sequence, number.to_be_bytes())
    }

    /// Text of any kind, `FF 01 len text`
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(MetaType::Text, MetaData::Text(text.into()))
    }

    /// Copyright notice, `FF 02 len text`
    pub fn copyright(text: impl Into<String>) -> Self {
        Self::new(MetaType::Copyright, MetaData::Text(text.into()))
    }

    /// Sequence or track name, `FF 03 len text`
    pub fn track_name(text: impl Into<String>) -> Self {
        Self::new(MetaType::TrackName, MetaData::Text(text.into()))
    }

    /// Instrument name, `FF 04 len text`
    pub fn instrument_name(text: impl Into<String>) -> Self {
        Self::new(MetaType::Instrument, MetaData::Text(text.into()))
    }

    /// A syllable to be sung, `FF 05 len text`
    pub fn lyric(text: impl Into<String>) -> Self {
        Self::new(MetaType::Lyric, MetaData::Text(text.into()))
    }

    /// Rehearsal letter or section name, `FF 06 len text`
    pub fn marker(text: impl Into<String>) -> Self {
        Self::new(MetaType::Marker, MetaData::Text(text.into()))
    }

    /// Something happening on stage or screen, `FF 07 len text`
    pub fn cue_point(text: impl Into<String>) -> Self {
        Self::new(MetaType::CuePoint, MetaData::Text(text.into()))
    }

    /// Associate the following meta events with a channel, `FF 20 01 cc`
    pub fn channel_prefix(channel: Channel) -> Self {
        Self::new(MetaType::ChannelPrefix, MetaData::Byte(channel.into()))
    }

    /// `FF 2F 00`
    ///
    /// A serialized [`Track`](crate::file::Track) always ends with one of these,
    /// so there's rarely a reason to add it yourself.
    pub fn end_of_track() -> Self {
        Self::new(MetaType::EndOfTrack, MetaData::Empty)
    }

    /// Set tempo, `FF 51 03 tttttt`
    pub fn tempo(tempo: Tempo) -> Self {
        Self::new(MetaType::Tempo, tempo.to_bytes())
    }

    /// SMPTE offset, `FF 54 05 hr mn se fr ff`
    pub fn smpte_offset(offset: &SmpteOffset) -> Result<Self, SmpteError> {
        Ok(Self::new(MetaType::Smpte, offset.to_bytes()?))
    }

    /// Time signature, `FF 58 04 nn dd cc bb`
    ///
    /// The denominator is a power of two, so 6/8 is `time_signature(6, 3, 24, 8)`.
    pub fn time_signature(
        numerator: u8,
        denominator_pow2: u8,
        clocks_per_click: u8,
        notated_32nds_per_quarter: u8,
    ) -> Self {
        Self::new(
            MetaType::TimeSignature,
            [
                numerator,
                denominator_pow2,
                clocks_per_click,
                notated_32nds_per_quarter,
            ],
        )
    }

    /// Key signature, `FF 59 02 sf mi`
    ///
    /// `sharps_flats` counts sharps when positive and flats when negative.
    pub fn key_signature(sharps_flats: i8, minor: bool) -> Self {
        Self::new(MetaType::KeySignature, [sharps_flats as u8, minor as u8])
    }

    /// Sequencer-specific data, `FF 7F len data`
    pub fn sequencer_specific(data: impl Into<Vec<u8>>) -> Self {
        Self::new(MetaType::SequencerSpecific, MetaData::Bytes(data.into()))
    }

    /// Ticks since the previous event
    pub const fn delta(&self) -> DeltaTime {
        self.delta
    }

    /// The type byte, if one was given
    pub const fn kind(&self) -> Option<MetaType> {
        self.kind
    }

    /// The payload
    pub fn data(&self) -> &MetaData {
        &self.data
    }
}

impl Encode for MetaEvent {
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()> {
        let kind = self.kind.ok_or(MetaError::MissingType)?;
        let payload = self.data.as_bytes();
        let len = u8::try_from(payload.len())
            .map_err(|_| MetaError::PayloadTooLong(payload.len()))?;

        out.extend_from_slice(self.delta.as_bytes());
        out.extend_from_slice(&[META_MARKER, kind.into(), len]);
        out.extend_from_slice(payload);
        Ok(())
    }
}
