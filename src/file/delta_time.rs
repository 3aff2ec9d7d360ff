use core::fmt;

use crate::{error::EncodeError, quantity::Quantity};

/// Ticks elapsed since the previous event in the same track.
///
/// Delta-times only make sense relative to their own track.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaTime(Quantity);

impl DeltaTime {
    /// No time elapsed.
    pub const ZERO: Self = Self(Quantity::ZERO);

    /// A delta of `ticks`, which must fit in a [`Quantity`].
    pub fn new(ticks: u32) -> Result<Self, EncodeError> {
        Quantity::new(ticks).map(Self)
    }

    /// The tick count.
    pub const fn ticks(&self) -> u32 {
        self.0.value()
    }

    /// The underlying quantity.
    pub const fn quantity(&self) -> &Quantity {
        &self.0
    }

    /// The encoded bytes written in front of the event.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Quantity> for DeltaTime {
    fn from(value: Quantity) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeltaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticks())
    }
}

#[test]
fn delta_time_wraps_quantity() {
    use pretty_assertions::assert_eq;

    let dt = DeltaTime::new(480).unwrap();
    assert_eq!(dt.ticks(), 480);
    assert_eq!(dt.as_bytes(), &[0x83, 0x60]);
    assert_eq!(DeltaTime::default(), DeltaTime::ZERO);
    assert_eq!(DeltaTime::ZERO.as_bytes(), &[0x00]);
    assert!(DeltaTime::new(Quantity::MAX + 1).is_err());
}
