use core::fmt;

/// A time signature meta event (`FF 58 04 nn dd cc bb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar.
    pub numerator: u8,
    /// Beat unit as a negative power of two (2 is a quarter note).
    pub denominator: u8,
    /// MIDI clocks per metronome click.
    pub metronome_pulse: u8,
    /// Notated 32nd notes per MIDI quarter note.
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Length of the meta event payload.
    pub const LEN: usize = 4;

    /// Read the payload bytes.
    pub const fn from_bytes(data: [u8; 4]) -> Self {
        Self {
            numerator: data[0],
            denominator: data[1],
            metronome_pulse: data[2],
            thirty_seconds_per_quarter: data[3],
        }
    }

    /// The payload bytes.
    pub const fn to_bytes(&self) -> [u8; 4] {
        [
            self.numerator,
            self.denominator,
            self.metronome_pulse,
            self.thirty_seconds_per_quarter,
        ]
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/2^{}", self.numerator, self.denominator)
    }
}

/// A key signature meta event (`FF 59 02 sf mi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Sharps when positive, flats when negative.
    pub key: i8,
    /// 0 for major, 1 for minor.
    pub scale: u8,
}

impl KeySignature {
    /// Length of the meta event payload.
    pub const LEN: usize = 2;

    /// Read the payload bytes.
    pub const fn from_bytes(data: [u8; 2]) -> Self {
        Self {
            key: data[0] as i8,
            scale: data[1],
        }
    }

    /// The payload bytes.
    pub const fn to_bytes(&self) -> [u8; 2] {
        [self.key as u8, self.scale]
    }

    /// True for a minor key.
    pub const fn is_minor(&self) -> bool {
        self.scale == 1
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = if self.is_minor() { "minor" } else { "major" };
        write!(f, "{} {}", self.key, scale)
    }
}

#[test]
fn key_signature_is_signed() {
    let key = KeySignature::from_bytes([0xFD, 0x01]);
    assert_eq!(key.key, -3);
    assert!(key.is_minor());
    assert_eq!(key.to_bytes(), [0xFD, 0x01]);
}
