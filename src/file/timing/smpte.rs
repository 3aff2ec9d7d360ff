#![doc = r#"
SMPTE frame rates

Both the header's time division and the SMPTE offset meta event can describe
time in SMPTE frames. They only ever use four rates: 24, 25, 29.97
(drop-frame) and 30 frames per second. The two places encode the rate
differently, see [`SmpteFps::from_division`] and [`SmpteFps::from_offset_bits`].
"#]

use core::fmt;

/// The possible FPS (Frames Per Second) for MIDI tracks and files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (drop frame)
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// Decode the negative frame rate found in the upper byte of an SMPTE
    /// time division (-24, -25, -29 or -30).
    pub const fn from_division(byte: u8) -> Option<Self> {
        match byte as i8 {
            -24 => Some(Self::TwentyFour),
            -25 => Some(Self::TwentyFive),
            -29 => Some(Self::TwentyNine),
            -30 => Some(Self::Thirty),
            _ => None,
        }
    }

    /// The upper byte of an SMPTE time division for this rate.
    pub const fn division_byte(&self) -> u8 {
        let rate: i8 = match self {
            Self::TwentyFour => -24,
            Self::TwentyFive => -25,
            Self::TwentyNine => -29,
            Self::Thirty => -30,
        };
        rate as u8
    }

    /// Decode the two `rr` bits of an SMPTE offset's hour byte (`0rrhhhhh`).
    pub const fn from_offset_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::TwentyFour,
            1 => Self::TwentyFive,
            2 => Self::TwentyNine,
            _ => Self::Thirty,
        }
    }

    /// The `rr` bits used in an SMPTE offset's hour byte.
    pub const fn offset_bits(&self) -> u8 {
        match self {
            Self::TwentyFour => 0,
            Self::TwentyFive => 1,
            Self::TwentyNine => 2,
            Self::Thirty => 3,
        }
    }

    /// Nominal frames per second. Drop-frame 29.97 counts as 30.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }
}

impl fmt::Display for SmpteFps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwentyNine => f.write_str("29.97"),
            other => write!(f, "{}", other.as_division()),
        }
    }
}

#[test]
fn division_byte_is_negative_rate() {
    assert_eq!(SmpteFps::from_division(0xE8), Some(SmpteFps::TwentyFour));
    assert_eq!(SmpteFps::from_division(0xE7), Some(SmpteFps::TwentyFive));
    assert_eq!(SmpteFps::from_division(0xE3), Some(SmpteFps::TwentyNine));
    assert_eq!(SmpteFps::from_division(0xE2), Some(SmpteFps::Thirty));
    assert_eq!(SmpteFps::from_division(0xE0), None);
}
