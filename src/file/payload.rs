use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{fmt, ops::Deref};

use crate::{error::EncodeError, quantity::Quantity};

/// The bytes of a length-prefixed event: text, sysex data, or an
/// unrecognised meta event's body.
///
/// A payload is never longer than [`Quantity::MAX`], so its length prefix can
/// always be written. Individual event types may apply a smaller limit on top.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Wrap a payload of at most [`Quantity::MAX`] bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::with_limit(data, Quantity::MAX as usize)
    }

    /// Wrap a payload of at most `max` bytes.
    pub(crate) fn with_limit(data: impl Into<Vec<u8>>, max: usize) -> Result<Self, EncodeError> {
        let data = data.into();
        let max = max.min(Quantity::MAX as usize);
        if data.len() > max {
            return Err(EncodeError::PayloadTooLarge {
                len: data.len(),
                max,
            });
        }
        Ok(Self(data))
    }

    /// Copies a slice whose length came from a decoded quantity.
    pub(crate) fn from_decoded(data: &[u8]) -> Self {
        debug_assert!(data.len() <= Quantity::MAX as usize);
        Self(data.to_vec())
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The bytes as UTF-8, if they are valid.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    /// The bytes as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// The length prefix written in front of the bytes.
    pub(crate) fn length_prefix(&self) -> Quantity {
        Quantity::new_unchecked(self.0.len() as u32)
    }

    /// Give back the bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Payload {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Payload {
    type Error = EncodeError;
    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Payload> for Vec<u8> {
    fn from(value: Payload) -> Self {
        value.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
