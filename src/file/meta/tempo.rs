use core::fmt;

use crate::error::EncodeError;

/// Microseconds per quarter note, from a set tempo event (`FF 51 03 tt tt tt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Tempo(u32);

impl Tempo {
    /// Length of the meta event payload.
    pub const LEN: usize = 3;
    /// The largest tempo three bytes can hold.
    pub const MAX: u32 = 0x00FF_FFFF;
    /// 120 beats per minute, the tempo assumed when a file sets none.
    pub const DEFAULT: Self = Self(500_000);

    /// A tempo in microseconds per quarter note.
    pub fn new(micros_per_quarter_note: u32) -> Result<Self, EncodeError> {
        if micros_per_quarter_note > Self::MAX {
            return Err(EncodeError::TempoOverflow(micros_per_quarter_note));
        }
        Ok(Self(micros_per_quarter_note))
    }

    /// Read the 24-bit big-endian payload.
    pub const fn from_bytes(data: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, data[0], data[1], data[2]]))
    }

    /// The payload bytes.
    pub const fn to_bytes(&self) -> [u8; 3] {
        let [_, a, b, c] = self.0.to_be_bytes();
        [a, b, c]
    }

    /// Microseconds per quarter note.
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Tempo {
    type Error = EncodeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tempo> for u32 {
    fn from(tempo: Tempo) -> Self {
        tempo.0
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn tempo_is_three_bytes() {
    use pretty_assertions::assert_eq;

    let tempo = Tempo::from_bytes([0x07, 0xA1, 0x20]);
    assert_eq!(tempo, Tempo::DEFAULT);
    assert_eq!(tempo.to_bytes(), [0x07, 0xA1, 0x20]);
    assert_eq!(
        Tempo::new(0x0100_0000).unwrap_err(),
        EncodeError::TempoOverflow(0x0100_0000)
    );
}

#[test]
fn tempo_converts_through_u32() {
    use pretty_assertions::assert_eq;

    assert_eq!(u32::from(Tempo::DEFAULT), 500_000);
    assert_eq!(Tempo::try_from(Tempo::MAX).map(u32::from), Ok(Tempo::MAX));
    assert_eq!(
        Tempo::try_from(0x0100_0000),
        Err(EncodeError::TempoOverflow(0x0100_0000))
    );
}
