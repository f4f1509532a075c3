#![doc = r#"
SMPTE Offset - the time a track is meant to start at

SMPTE Offset is a meta event giving the exact SMPTE time code at which a track
begins, so a sequence can line up with video or film. Its payload is five bytes:

```text
0rrhhhhh  mm  ss  ff  sf
```

- `rr`: frame rate (`00` 24 fps, `01` 25 fps, `10` 29.97 fps, `11` 30 fps)
- `hhhhh`: hours (0-23)
- `mm`, `ss`: minutes and seconds (0-59)
- `ff`: frames (below the frame rate)
- `sf`: fractional frames, in 100ths (0-99)
"#]

use crate::SmpteError;

/// The possible FPS (Frames Per Second) of an SMPTE time code
///
/// MIDI defines only four frame rates:
/// - 24 fps: Standard film rate
/// - 25 fps: PAL/SECAM television standard
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second - Standard film rate
    TwentyFour,
    /// 25 frames per second - PAL/SECAM television standard
    TwentyFive,
    /// 29.97 frames per second (30000/1001) - NTSC color television drop-frame rate
    TwentyNine,
    /// 30 frames per second - NTSC black & white, some digital formats
    Thirty,
}

impl SmpteFps {
    /// The nominal frame rate.
    ///
    /// Drop-frame 29.97 fps counts frames 0 through 29, so it returns 30 here.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }

    /// The two `rr` bits of the offset's first byte
    const fn rate_bits(&self) -> u8 {
        match self {
            Self::TwentyFour => 0b00,
            Self::TwentyFive => 0b01,
            Self::TwentyNine => 0b10,
            Self::Thirty => 0b11,
        }
    }
}

/// A track's starting position in SMPTE time code.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate for this offset.
    pub fps: SmpteFps,
    /// Hour component of the time code (0-23).
    pub hour: u8,
    /// Minute component of the time code (0-59).
    pub minute: u8,
    /// Second component of the time code (0-59).
    pub second: u8,
    /// Frame number within the current second.
    ///
    /// Valid range depends on the frame rate:
    /// - 24 fps: 0-23
    /// - 25 fps: 0-24
    /// - 29.97 fps and 30 fps: 0-29
    pub frame: u8,
    /// Hundredths of a frame (0-99).
    pub subframe: u8,
}

impl SmpteOffset {
    /// Checks every component against its range.
    ///
    /// # Errors
    /// - `SmpteError::HourOffset` if hours > 23
    /// - `SmpteError::MinuteOffset` if minutes > 59
    /// - `SmpteError::SecondOffset` if seconds > 59
    /// - `SmpteError::Frame` if the frame is not below the frame rate
    /// - `SmpteError::Subframe` if fractional frames > 99
    pub const fn validate(&self) -> Result<(), SmpteError> {
        if self.hour > 23 {
            return Err(SmpteError::HourOffset(self.hour));
        }
        if self.minute > 59 {
            return Err(SmpteError::MinuteOffset(self.minute));
        }
        if self.second > 59 {
            return Err(SmpteError::SecondOffset(self.second));
        }
        let fps = self.fps.as_division();
        if self.frame >= fps {
            return Err(SmpteError::Frame {
                frame: self.frame,
                fps,
            });
        }
        if self.subframe > 99 {
            return Err(SmpteError::Subframe(self.subframe));
        }
        Ok(())
    }

    /// The 5-byte meta event payload.
    pub const fn to_bytes(&self) -> Result<[u8; 5], SmpteError> {
        if let Err(e) = self.validate() {
            return Err(e);
        }
        Ok([
            (self.fps.rate_bits() << 5) | self.hour,
            self.minute,
            self.second,
            self.frame,
            self.subframe,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offset(
        fps: SmpteFps,
        hour: u8,
        minute: u8,
        second: u8,
        frame: u8,
        subframe: u8,
    ) -> SmpteOffset {
        SmpteOffset {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        }
    }

    #[test]
    fn encode_smpte_offset() {
        let bytes = offset(SmpteFps::TwentyNine, 1, 23, 45, 12, 34).to_bytes();
        assert_eq!(bytes, Ok([0x41, 0x17, 0x2D, 0x0C, 0x22]));

        let bytes = offset(SmpteFps::Thirty, 23, 59, 59, 29, 99).to_bytes();
        assert_eq!(bytes, Ok([0x77, 59, 59, 29, 99]));
    }

    #[test]
    fn invalid_components() {
        use SmpteFps::*;
        let hour = offset(TwentyFour, 24, 0, 0, 0, 0);
        assert_eq!(hour.to_bytes(), Err(SmpteError::HourOffset(24)));
        let minute = offset(TwentyFour, 0, 60, 0, 0, 0);
        assert_eq!(minute.to_bytes(), Err(SmpteError::MinuteOffset(60)));
        let second = offset(TwentyFour, 0, 0, 60, 0, 0);
        assert_eq!(second.to_bytes(), Err(SmpteError::SecondOffset(60)));
        let subframe = offset(Thirty, 0, 0, 0, 0, 100);
        assert_eq!(subframe.to_bytes(), Err(SmpteError::Subframe(100)));

        for (fps, frame) in [(TwentyFour, 24), (TwentyFive, 25), (Thirty, 30)] {
            let err = SmpteError::Frame { frame, fps: frame };
            assert_eq!(offset(fps, 0, 0, 0, frame, 0).validate(), Err(err));
        }
        assert!(offset(TwentyNine, 0, 0, 0, 29, 0).validate().is_ok());
    }
}
