use alloc::vec::Vec;

use super::{FormatType, HEADER_CHUNK_ID, TicksPerQuarterNote, write_chunk};
use crate::{MidiResult, message::Encode};

#[doc = r#"
The contents of the `MThd` chunk.

A header is derived from a [`MidiFile`](super::MidiFile) each time it is
serialized, see [`MidiFile::header`](super::MidiFile::header).
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiFileHeader {
    format: FormatType,
    num_tracks: u16,
    timing: TicksPerQuarterNote,
}

impl MidiFileHeader {
    /// Create a new header
    pub const fn new(format: FormatType, num_tracks: u16, timing: TicksPerQuarterNote) -> Self {
        Self {
            format,
            num_tracks,
            timing,
        }
    }

    /// The format field
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// The number of track chunks following the header
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// Get the timing props
    pub const fn timing(&self) -> &TicksPerQuarterNote {
        &self.timing
    }
}

impl Encode for MidiFileHeader {
    /// Appends the whole header chunk, type and length included.
    fn encode(&self, out: &mut Vec<u8>) -> MidiResult<()> {
        write_chunk(out, HEADER_CHUNK_ID, |out| {
            out.extend_from_slice(&self.format.to_be_bytes());
            out.extend_from_slice(&self.num_tracks.to_be_bytes());
            out.extend_from_slice(&self.timing.to_be_bytes());
            Ok(())
        })
    }
}

#[test]
fn header_chunk_layout() {
    use pretty_assertions::assert_eq;

    let timing = TicksPerQuarterNote::new(480).unwrap();
    let header = MidiFileHeader::new(FormatType::Simultaneous, 3, timing);
    let out = header.to_bytes().unwrap();
    assert_eq!(
        out,
        [
            b'M', b'T', b'h', b'd', 0, 0, 0, 6, // type and length
            0, 1, // format
            0, 3, // tracks
            0x01, 0xE0, // ticks
        ]
    );
    assert_eq!(out.len() as u32 - 8, super::HEADER_LENGTH);
}
