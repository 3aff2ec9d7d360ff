use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The track organisation declared in the header chunk.

```text
0  one track holding every channel
1  several tracks played simultaneously
2  several independent single-track patterns
```

Value 3 is not defined by the format but is still accepted when reading, as
[`FormatType::Reserved`]; anything above it is rejected.
"#]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
    /// Format 3, reserved
    Reserved = 3,
}

impl FormatType {
    /// False for [`FormatType::Reserved`].
    pub const fn is_legal(&self) -> bool {
        !matches!(self, Self::Reserved)
    }

    /// The two header bytes for this format.
    pub fn to_be_bytes(self) -> [u8; 2] {
        u16::from(self).to_be_bytes()
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u16::from(*self))
    }
}

#[test]
fn format_codes() {
    use pretty_assertions::assert_eq;

    assert_eq!(FormatType::try_from(1u16).unwrap(), FormatType::Simultaneous);
    assert_eq!(FormatType::try_from(3u16).unwrap(), FormatType::Reserved);
    assert!(FormatType::try_from(4u16).is_err());
    assert!(!FormatType::Reserved.is_legal());
    assert_eq!(FormatType::SequentiallyIndependent.to_be_bytes(), [0, 2]);
}
