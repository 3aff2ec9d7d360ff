mod smpte;
pub use smpte::*;

use core::fmt;

/// The time division word of the header chunk.
///
/// The codec stores the 16 bits untouched. If the top bit is clear the value
/// is a tick rate per quarter note; if it is set, the upper byte is a negative
/// SMPTE frame rate and the lower byte the ticks per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDivision(u16);

impl TimeDivision {
    /// Wrap a raw division word.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// A tick rate per quarter note. The leading bit is disregarded, so 1-32767.
    pub const fn from_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self(tpqn & 0x7FFF)
    }

    /// An SMPTE division.
    pub const fn from_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self(u16::from_be_bytes([fps.division_byte(), ticks_per_frame]))
    }

    /// The raw word.
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns Some if the division is a tick rate per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        if self.0 & 0x8000 == 0 {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns the frame rate and ticks per frame of an SMPTE division.
    ///
    /// `None` for tick based divisions and for unknown frame rates.
    pub const fn smpte(&self) -> Option<(SmpteFps, u8)> {
        if self.0 & 0x8000 == 0 {
            return None;
        }
        let [rate, ticks_per_frame] = self.0.to_be_bytes();
        match SmpteFps::from_division(rate) {
            Some(fps) => Some((fps, ticks_per_frame)),
            None => None,
        }
    }
}

impl fmt::Display for TimeDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ticks_per_quarter_note(), self.smpte()) {
            (Some(tpqn), _) => write!(f, "{tpqn} ticks per quarter note"),
            (None, Some((fps, tpf))) => write!(f, "{fps} fps, {tpf} ticks per frame"),
            (None, None) => write!(f, "{:#06x}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ticks_per_quarter_note() {
        let division = TimeDivision::new(0x60);
        assert_eq!(division.ticks_per_quarter_note(), Some(96));
        assert_eq!(division.smpte(), None);
    }

    #[test]
    fn smpte_division() {
        let division = TimeDivision::new(0xE728);
        assert_eq!(division.ticks_per_quarter_note(), None);
        assert_eq!(division.smpte(), Some((SmpteFps::TwentyFive, 40)));

        for fps in [
            SmpteFps::TwentyFour,
            SmpteFps::TwentyFive,
            SmpteFps::TwentyNine,
            SmpteFps::Thirty,
        ] {
            assert_eq!(TimeDivision::from_smpte(fps, 80).smpte(), Some((fps, 80)));
        }
        assert_eq!(TimeDivision::from_smpte(SmpteFps::TwentyNine, 4).raw(), 0xE304);
    }
}
