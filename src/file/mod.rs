#![doc = r#"
Contains the [`MidiFile`] and the chunks it is made of

A file is a header chunk followed by one chunk per track:

```text
"MThd" 00000006 <format> <track count> <ticks per quarter note>
"MTrk" <length> <events...> 00 FF 2F 00
...
```

All multi-byte fields are big-endian. The format and track count are derived
from the track list each time the file is serialized.
"#]

mod chunk;
pub use chunk::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use alloc::vec::Vec;

use crate::{FileError, MidiResult, message::Encode};

#[doc = r#"
A Standard MIDI File under construction.

Tracks are serialized in the order they were added. Serializing never changes
the file, so [`MidiFile::to_bytes`] may be called as often as needed.

# Example
```rust
# use midigen::prelude::*;
let mut file = MidiFile::with_ticks(480)?;

let drums = file.create_track();
drums.set_track_name("Drums", 0);
drums.note(9, 36, 240, 0, 110)?;

let mut bass = Track::new();
bass.set_instrument(1, 33, 0)?.note(1, "e1", 480, 0, 100)?;
file.add_existing_track(bass);

assert_eq!(file.format_type(), FormatType::Simultaneous);

let bytes = file.to_bytes()?;
assert_eq!(&bytes[..14], &[
    b'M', b'T', b'h', b'd', 0, 0, 0, 6,
    0, 1, // format
    0, 2, // tracks
    0x01, 0xE0, // 480 ticks
]);
# Ok::<(), MidiError>(())
```
"#]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MidiFile {
    timing: TicksPerQuarterNote,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// An empty file at 128 ticks per quarter note
    pub const fn new() -> Self {
        Self {
            timing: TicksPerQuarterNote::DEFAULT,
            tracks: Vec::new(),
        }
    }

    /// An empty file with a custom timing
    ///
    /// # Errors
    /// If `ticks` is zero or above 32767.
    pub const fn with_ticks(ticks: u16) -> Result<Self, FileError> {
        match TicksPerQuarterNote::new(ticks) {
            Ok(timing) => Ok(Self {
                timing,
                tracks: Vec::new(),
            }),
            Err(e) => Err(e),
        }
    }

    /// An empty file built from a [`FileConfig`]
    pub fn from_config(config: &FileConfig) -> Result<Self, FileError> {
        Self::with_ticks(config.ticks)
    }

    /// A file from already validated parts
    pub fn from_parts(timing: TicksPerQuarterNote, tracks: Vec<Track>) -> Self {
        Self { timing, tracks }
    }

    /// Ticks per quarter note
    pub const fn ticks(&self) -> u16 {
        self.timing.ticks_per_quarter_note()
    }

    /// Get the timing props
    pub const fn timing(&self) -> &TicksPerQuarterNote {
        &self.timing
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// A mutable handle to an already added track
    pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    /// Format 0 for zero or one track, format 1 otherwise
    pub fn format_type(&self) -> FormatType {
        FormatType::for_track_count(self.tracks.len())
    }

    /// The header chunk this file would be written with
    ///
    /// # Errors
    /// If the file holds more than 65535 tracks.
    pub fn header(&self) -> Result<MidiFileHeader, FileError> {
        let num_tracks = u16::try_from(self.tracks.len())
            .map_err(|_| FileError::TooManyTracks(self.tracks.len()))?;
        Ok(MidiFileHeader::new(self.format_type(), num_tracks, self.timing))
    }

    /// Append a track that was built on its own.
    pub fn add_existing_track(&mut self, track: Track) -> &mut Self {
        self.tracks.push(track);
        self
    }

    /// Append an empty track and hand it back to be filled in.
    pub fn create_track(&mut self) -> &mut Track {
        let index = self.tracks.len();
        self.tracks.push(Track::new());
        &mut self.tracks[index]
    }

    /// The complete file: header chunk, then every track chunk.
    pub fn to_bytes(&self) -> MidiResult<Vec<u8>> {
        let header = self.header()?;

        #[cfg(feature = "tracing")]
        self.trace_header(&header);

        let mut out = Vec::new();
        header.encode(&mut out)?;
        for track in &self.tracks {
            track.encode(&mut out)?;
        }
        Ok(out)
    }

    #[cfg(feature = "tracing")]
    fn trace_header(&self, header: &MidiFileHeader) {
        tracing::debug!(
            "Serializing {:?} file: {} tracks at {} ticks per quarter note",
            header.format_type(),
            header.num_tracks(),
            self.ticks()
        );
        if header.format_type() == FormatType::Simultaneous {
            for (i, track) in self.tracks.iter().enumerate() {
                if track.is_empty() {
                    tracing::warn!("Track {i} has no events; it will only hold an end marker");
                }
            }
        }
    }

    /// Serialize the file and write it to `sink` as raw binary.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut sink: W) -> Result<(), crate::WriteError> {
        let bytes = self.to_bytes()?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MidiError;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_a_bare_header() {
        let bytes = MidiFile::new().to_bytes().unwrap();
        assert_eq!(
            bytes,
            [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 0, 0, 0x80]
        );
    }

    #[test]
    fn ticks_are_validated() {
        assert_eq!(MidiFile::default().ticks(), 128);
        assert_eq!(MidiFile::with_ticks(1).unwrap().ticks(), 1);
        assert_eq!(MidiFile::with_ticks(32767).unwrap().ticks(), 32767);
        assert_eq!(MidiFile::with_ticks(0), Err(FileError::InvalidTicks(0)));
        assert_eq!(
            MidiFile::with_ticks(32768),
            Err(FileError::InvalidTicks(32768))
        );
    }

    #[test]
    fn create_track_hands_back_the_added_track() {
        let mut file = MidiFile::new();
        file.create_track().note_on(0, 60, 0, 90).unwrap();
        file.create_track();
        assert_eq!(file.tracks().len(), 2);
        assert_eq!(file.tracks()[0].len(), 1);
        assert!(file.tracks()[1].is_empty());

        file.track_mut(1).unwrap().set_track_name("late", 0);
        assert_eq!(file.tracks()[1].len(), 1);
        assert!(file.track_mut(2).is_none());
    }

    #[test]
    fn tracks_are_written_in_order() {
        let mut first = Track::new();
        first.set_track_name("one", 0);
        let mut second = Track::new();
        second.set_track_name("two", 0);

        let mut file = MidiFile::new();
        file.add_existing_track(first.clone())
            .add_existing_track(second.clone());

        let mut expected = Vec::new();
        MidiFileHeader::new(FormatType::Simultaneous, 2, TicksPerQuarterNote::DEFAULT)
            .encode(&mut expected)
            .unwrap();
        expected.extend(first.to_bytes().unwrap());
        expected.extend(second.to_bytes().unwrap());

        assert_eq!(file.to_bytes().unwrap(), expected);
    }

    #[test]
    fn single_track_is_format_zero() {
        let mut file = MidiFile::new();
        assert_eq!(file.format_type(), FormatType::SingleMultiChannel);
        file.create_track();
        assert_eq!(file.format_type(), FormatType::SingleMultiChannel);
        assert_eq!(file.header().unwrap().num_tracks(), 1);
    }

    #[test]
    fn serializing_twice_is_identical() {
        let mut file = MidiFile::with_ticks(96).unwrap();
        file.create_track()
            .chord(3, &["d4", "f#4", "a4"], 96, 80)
            .unwrap();
        assert_eq!(file.to_bytes().unwrap(), file.to_bytes().unwrap());
    }

    #[test]
    fn bad_events_fail_the_whole_file() {
        let mut file = MidiFile::new();
        file.create_track()
            .add_event(crate::message::MetaEvent::text("x".repeat(300)));
        assert_eq!(
            file.to_bytes(),
            Err(MidiError::Meta(crate::MetaError::PayloadTooLong(300)))
        );
    }

    #[test]
    fn config_builds_files() {
        let file = MidiFile::from_config(&FileConfig { ticks: 960 }).unwrap();
        assert_eq!(file.ticks(), 960);
        let file = MidiFile::from_parts(TicksPerQuarterNote::DEFAULT, vec![Track::new()]);
        assert_eq!(file.tracks().len(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_to_a_sink() {
        let mut file = MidiFile::new();
        file.create_track().note(0, "c4", 64, 0, 90).unwrap();

        let mut sink = Vec::new();
        file.write_to(&mut sink).unwrap();
        assert_eq!(sink, file.to_bytes().unwrap());
    }
}
