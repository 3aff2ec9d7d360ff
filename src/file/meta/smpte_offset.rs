#![doc = r#"
SMPTE Offset - the time a track is meant to start at

The SMPTE offset meta event (`FF 54 05 hr mn se fr ff`) names the SMPTE
time at which a track should begin. The hour byte also carries the frame
rate in bits 5-6:

```text
0 rr hhhhh
  00  24 fps
  01  25 fps
  10  29.97 fps
  11  30 fps
```

The five bytes are stored exactly as read so that writing the event back
reproduces them. [`SmpteOffset::validate`] checks the fields against their
documented ranges.
"#]

use core::fmt;

use crate::{error::SmpteError, file::SmpteFps};

/// A track's starting position in SMPTE time code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// Hour byte, including the frame rate bits.
    pub hour: u8,
    /// Minutes, 0-59.
    pub minute: u8,
    /// Seconds, 0-59.
    pub second: u8,
    /// Frame within the second.
    pub frame: u8,
    /// Hundredths of a frame, 0-99.
    pub subframe: u8,
}

impl SmpteOffset {
    /// Length of the meta event payload.
    pub const LEN: usize = 5;

    /// Build an offset from a frame rate and time fields.
    ///
    /// Hours are masked to their five bits.
    pub const fn new(
        fps: SmpteFps,
        hour: u8,
        minute: u8,
        second: u8,
        frame: u8,
        subframe: u8,
    ) -> Self {
        Self {
            hour: (fps.offset_bits() << 5) | (hour & 0b0001_1111),
            minute,
            second,
            frame,
            subframe,
        }
    }

    /// Read the five payload bytes.
    pub const fn from_bytes(data: [u8; 5]) -> Self {
        Self {
            hour: data[0],
            minute: data[1],
            second: data[2],
            frame: data[3],
            subframe: data[4],
        }
    }

    /// The payload bytes.
    pub const fn to_bytes(&self) -> [u8; 5] {
        [self.hour, self.minute, self.second, self.frame, self.subframe]
    }

    /// The frame rate from the `rr` bits of the hour byte.
    pub const fn fps(&self) -> SmpteFps {
        SmpteFps::from_offset_bits(self.hour >> 5)
    }

    /// Hours without the frame rate bits.
    pub const fn hours(&self) -> u8 {
        self.hour & 0b0001_1111
    }

    /// Check every field against its range.
    ///
    /// # Errors
    /// - `SmpteError::HourOffset` if hours > 23
    /// - `SmpteError::MinuteOffset` if minutes > 59
    /// - `SmpteError::SecondOffset` if seconds > 59
    /// - `SmpteError::Frame` if the frame is not below the nominal rate
    /// - `SmpteError::Subframe` if fractional frames > 99
    pub const fn validate(&self) -> Result<(), SmpteError> {
        let hour = self.hours();
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if self.minute > 59 {
            return Err(SmpteError::MinuteOffset(self.minute));
        }
        if self.second > 59 {
            return Err(SmpteError::SecondOffset(self.second));
        }
        let fps = self.fps().as_division();
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
}

impl fmt::Display for SmpteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}.{:02}@{}",
            self.hours(),
            self.minute,
            self.second,
            self.frame,
            self.subframe,
            self.fps()
        )
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // this are the bytes after 00 FF 54 05
    // where 54 is smpte offset, and 05 is length five.
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::from_bytes(bytes);

    assert_eq!(offset.fps(), SmpteFps::TwentyNine);
    assert_eq!(offset.hours(), 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
    assert_eq!(offset.to_bytes(), bytes);
    assert_eq!(offset.validate(), Ok(()));
    assert_eq!(
        SmpteOffset::new(SmpteFps::TwentyNine, 1, 23, 45, 12, 34),
        offset
    );
}

#[test]
fn validate_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;

    let err = SmpteOffset::from_bytes([0x1F, 0x17, 0x2D, 0x0C, 0x22])
        .validate()
        .unwrap_err();
    assert_eq!(err, SmpteError::HourOffset(31));

    let err = SmpteOffset::from_bytes([0x41, 0x50, 0x2D, 0x0C, 0x22])
        .validate()
        .unwrap_err();
    assert_eq!(err, SmpteError::MinuteOffset(80));

    let err = SmpteOffset::new(SmpteFps::TwentyFour, 0, 0, 0, 24, 0)
        .validate()
        .unwrap_err();
    assert_eq!(err, SmpteError::Frame { frame: 24, fps: 24 });
}
