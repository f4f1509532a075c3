#[doc = r#"
The format field of the header chunk.

The format is never stored; it follows from how many tracks a file holds.

```text
| format | tracks                                       |
|--------|----------------------------------------------|
| 0      | a single multi-channel track                 |
| 1      | several tracks meant to be played together   |
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
}

impl FormatType {
    /// Format 0 for zero or one track, format 1 otherwise.
    pub const fn for_track_count(count: usize) -> Self {
        if count <= 1 {
            Self::SingleMultiChannel
        } else {
            Self::Simultaneous
        }
    }

    /// The big-endian format field
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        (*self as u16).to_be_bytes()
    }
}

#[test]
fn format_follows_track_count() {
    use pretty_assertions::assert_eq;
    for count in [0, 1] {
        let format = FormatType::for_track_count(count);
        assert_eq!(format, FormatType::SingleMultiChannel);
    }
    assert_eq!(FormatType::for_track_count(2), FormatType::Simultaneous);
    assert_eq!(FormatType::Simultaneous.to_be_bytes(), [0, 1]);
}
