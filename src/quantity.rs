#![doc = r#"
The variable-length quantity used by Standard MIDI Files

# Overview

Delta-times and every length prefix inside a track chunk are written as a
*variable-length quantity*: the value is split into 7-bit groups, most
significant group first, and every byte except the last has its top bit set.

```text
value        bytes
0x00000000   00
0x0000007F   7F
0x00000080   81 00
0x00003FFF   FF 7F
0x00004000   81 80 00
0x0FFFFFFF   FF FF FF 7F
```

A quantity is never longer than four bytes, so the largest representable value
is `0x0FFF_FFFF` ([`Quantity::MAX`]).
"#]

use core::fmt;

use crate::{error::EncodeError, reader::ReaderErrorKind};

/// A variable-length quantity.
///
/// The byte form held here is always the minimal encoding of the value, even
/// when it was decoded from a padded sequence such as `80 00`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Quantity {
    bytes: [u8; 4],
    len: u8,
}

impl Quantity {
    /// The largest value a quantity can carry (2^28 - 1).
    pub const MAX: u32 = 0x0FFF_FFFF;
    /// The most bytes a quantity may occupy on the wire.
    pub const MAX_BYTES: usize = 4;
    /// Zero, encoded as a single `00` byte.
    pub const ZERO: Self = Self {
        bytes: [0; 4],
        len: 1,
    };

    /// Encode a value.
    ///
    /// # Errors
    /// [`EncodeError::QuantityOverflow`] if `value` is above [`Quantity::MAX`].
    pub fn new(value: u32) -> Result<Self, EncodeError> {
        if value > Self::MAX {
            return Err(EncodeError::QuantityOverflow(u64::from(value)));
        }
        Ok(Self::new_unchecked(value))
    }

    /// Encode a byte length, used for the length prefix of meta and sysex payloads.
    pub fn from_len(len: usize) -> Result<Self, EncodeError> {
        match u32::try_from(len) {
            Ok(value) => Self::new(value),
            Err(_) => Err(EncodeError::QuantityOverflow(len as u64)),
        }
    }

    /// Encodes without the range check. Bits above the 28th are discarded.
    pub(crate) const fn new_unchecked(value: u32) -> Self {
        let value = value & Self::MAX;

        let mut len = 1;
        let mut rest = value >> 7;
        while rest != 0 {
            len += 1;
            rest >>= 7;
        }

        let mut bytes = [0; 4];
        let mut i = 0;
        while i < len {
            let shift = 7 * (len - 1 - i);
            let mut byte = ((value >> shift) & 0x7F) as u8;
            if i + 1 < len {
                byte |= 0x80;
            }
            bytes[i] = byte;
            i += 1;
        }

        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Decode a quantity starting at `offset`.
    ///
    /// Returns the quantity and the number of bytes it occupied in `bytes`.
    /// That count may exceed [`Quantity::len`] if the input was padded with
    /// leading `0x80` bytes.
    ///
    /// # Errors
    /// - [`ReaderErrorKind::TruncatedInput`] if the input ends before a byte
    ///   without the continuation bit.
    /// - [`ReaderErrorKind::MalformedQuantity`] if four bytes in a row carry
    ///   the continuation bit.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), ReaderErrorKind> {
        let mut value: u32 = 0;
        for i in 0..Self::MAX_BYTES {
            let Some(&byte) = bytes.get(offset.saturating_add(i)) else {
                return Err(ReaderErrorKind::TruncatedInput);
            };
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok((Self::new_unchecked(value), i + 1));
            }
        }
        Err(ReaderErrorKind::MalformedQuantity)
    }

    /// The numeric value.
    pub const fn value(&self) -> u32 {
        let mut value = 0;
        let mut i = 0;
        while i < self.len as usize {
            value = (value << 7) | (self.bytes[i] & 0x7F) as u32;
            i += 1;
        }
        value
    }

    /// The minimal wire encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes in the wire encoding (1 to 4).
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.value()).finish()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u32> for Quantity {
    type Error = EncodeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.value()
    }
}
