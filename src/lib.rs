#![doc = r#"
Build Standard MIDI Files (SMF) from an in-memory list of events.

`midigen` does not read, play, or sequence MIDI. It takes the events you append to
a [`Track`](crate::file::Track), gathers tracks in a [`MidiFile`](crate::file::MidiFile),
and serializes the whole thing into the exact byte layout the SMF format mandates:
variable-length delta-times, status/data framing, length-prefixed meta events,
and big-endian chunk lengths.

# Example
```rust
use midigen::prelude::*;

let mut file = MidiFile::new();
let track = file.create_track();
track.set_tempo(120, 0).unwrap();
track.note(0, "c4", 64, 0, DEFAULT_VELOCITY).unwrap();
track.chord(0, &["c4", "e4", "g4"], 128, DEFAULT_VELOCITY).unwrap();

let bytes = file.to_bytes().unwrap();
assert_eq!(&bytes[0..4], b"MThd");
```

Writing the buffer somewhere is up to you; with the `std` feature,
[`MidiFile::write_to`](crate::file::MidiFile::write_to) pushes it into any
[`std::io::Write`] sink as raw binary.
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

mod bytes;
pub use bytes::*;

mod channel;
pub use channel::*;

mod delta;
pub use delta::*;

mod note;
pub use note::*;

mod tempo;
pub use tempo::*;

pub mod file;
pub mod message;

/// Velocity used by note builders when the caller has no preference.
pub const DEFAULT_VELOCITY: u8 = 90;

/// A common note length, in ticks.
pub const DEFAULT_DURATION: u32 = 128;

/// The channel most single-instrument files use.
pub const DEFAULT_CHANNEL: u8 = 0;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        DEFAULT_CHANNEL, DEFAULT_DURATION, DEFAULT_VELOCITY, bytes::*, channel::*, delta::*,
        error::*, file::*, message::*, note::*, tempo::*,
    };
}
