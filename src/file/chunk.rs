#![doc = r#"
Chunk framing shared by the header and track chunks

Every chunk is a 4-character ASCII type, a 32-bit big-endian length, then that
many bytes of data:

```text
[Header Chunk: "MThd" 00 00 00 06 ffff nnnn dddd]
[Track Chunk 1: "MTrk" llllllll <events> 00 FF 2F 00]
...
[Track Chunk N: "MTrk" llllllll <events> 00 FF 2F 00]
```
"#]

use alloc::vec::Vec;

use crate::{FileError, MidiResult};

/// Identifies the header chunk
pub const HEADER_CHUNK_ID: [u8; 4] = *b"MThd";

/// Identifies a track chunk
pub const TRACK_CHUNK_ID: [u8; 4] = *b"MTrk";

/// The header chunk's data is always 6 bytes long
pub const HEADER_LENGTH: u32 = 6;

/// Closes every track chunk: a zero delta-time and `FF 2F 00`
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

/// Writes `id`, a length placeholder, then whatever `body` appends, and patches
/// the placeholder with the number of bytes `body` wrote.
pub(crate) fn write_chunk<F>(out: &mut Vec<u8>, id: [u8; 4], body: F) -> MidiResult<()>
where
    F: FnOnce(&mut Vec<u8>) -> MidiResult<()>,
{
    out.extend_from_slice(&id);
    let len_at = out.len();
    out.extend_from_slice(&[0; 4]);

    body(out)?;

    let written = out.len() - len_at - 4;
    let len = u32::try_from(written)
        .map_err(|_| FileError::ChunkTooLong(written))?;
    out[len_at..len_at + 4].copy_from_slice(&len.to_be_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn length_is_patched_after_the_body() {
        let mut out = vec![0xAA];
        write_chunk(&mut out, TRACK_CHUNK_ID, |out| {
            out.extend_from_slice(&[1, 2, 3]);
            Ok(())
        })
        .unwrap();
        assert_eq!(out, [0xAA, b'M', b'T', b'r', b'k', 0, 0, 0, 3, 1, 2, 3]);
    }

    #[test]
    fn body_errors_propagate() {
        let mut out = Vec::new();
        let res = write_chunk(&mut out, HEADER_CHUNK_ID, |_| {
            Err(FileError::InvalidTicks(0).into())
        });
        assert!(res.is_err());
    }
}
