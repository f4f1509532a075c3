#![doc = r#"
Contains the events a track is made of

# Hierarchy
```text
                |-------------|
                | Track Event |
                |-------------|
                 /           \
|---------------|             |------------|
| Channel Event |             | Meta Event |
|---------------|             |------------|
```

Every event starts with its [`DeltaTime`](crate::DeltaTime). Channel events then
carry a status byte and one or two data bytes, and meta events carry `FF`, their
type, and a length-prefixed payload.
"#]

mod channel;
pub use channel::*;

mod meta;
pub use meta::*;

use alloc::vec::Vec;

use crate::{DeltaTime, MidiResult};

/// Serialization into the bytes of a track chunk.
pub trait Encode {
    /// Append this value's bytes to `out`.
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()>;

    /// This value's bytes.
    fn to_bytes(&self) -> MidiResult<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }
}

#[doc = r#"
Any event that can be placed in a track
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackEvent {
    /// A channel voice message
    Channel(ChannelEvent),
    /// A meta event
    Meta(MetaEvent),
}

impl TrackEvent {
    /// Ticks since the previous event
    pub const fn delta(&self) -> DeltaTime {
        match self {
            Self::Channel(e) => e.delta(),
            Self::Meta(e) => e.delta(),
        }
    }
}

impl Encode for TrackEvent {
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()> {
        match self {
            Self::Channel(e) => e.encode(out),
            Self::Meta(e) => e.encode(out),
        }
    }
}

impl From<ChannelEvent> for TrackEvent {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaEvent> for TrackEvent {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}
