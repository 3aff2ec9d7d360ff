use alloc::vec::Vec;
use core::fmt;

use crate::{
    error::EncodeError,
    file::{DeltaTime, Payload, meta::MetaEvent},
    message::ChannelEvent,
};

/// Status of a complete system exclusive message.
pub const SYSEX_STATUS: u8 = 0xF0;
/// Status of a continuation (or escape) packet.
pub const SYSEX_CONTINUATION_STATUS: u8 = 0xF7;

/// Which of the two sysex forms an event uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysExKind {
    /// `F0 <length> <data>`
    Whole,
    /// `F7 <length> <data>`: a later packet of a divided message
    Continuation,
}

impl SysExKind {
    /// The status byte of this form.
    pub const fn status(&self) -> u8 {
        match self {
            Self::Whole => SYSEX_STATUS,
            Self::Continuation => SYSEX_CONTINUATION_STATUS,
        }
    }
}

/// A system exclusive event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysExEvent {
    kind: SysExKind,
    data: Payload,
}

impl SysExEvent {
    /// A sysex event of at most [`Quantity::MAX`](crate::quantity::Quantity::MAX) bytes.
    pub fn new(kind: SysExKind, data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Ok(Self {
            kind,
            data: Payload::new(data)?,
        })
    }

    pub(crate) fn from_decoded(kind: SysExKind, data: &[u8]) -> Self {
        Self {
            kind,
            data: Payload::from_decoded(data),
        }
    }

    /// Whole or continuation.
    pub const fn kind(&self) -> SysExKind {
        self.kind
    }

    /// The bytes after the length prefix.
    pub fn data(&self) -> &Payload {
        &self.data
    }

    /// Status, length prefix and data.
    pub fn encoded_len(&self) -> usize {
        1 + self.data.length_prefix().len() + self.data.len()
    }

    /// Append `F0|F7 <length> <data>`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.kind.status());
        out.extend_from_slice(self.data.length_prefix().as_bytes());
        out.extend_from_slice(&self.data);
    }
}

/// What happens at an event's moment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackEventKind {
    /// `FF` meta event
    Meta(MetaEvent),
    /// `F0` or `F7` system exclusive event
    SysEx(SysExEvent),
    /// `8n`-`En` channel event
    Channel(ChannelEvent),
    /// Two bytes whose first is not a recognised status, kept verbatim.
    ContinuousController {
        /// The byte found in the status position
        control: u8,
        /// The byte that followed it
        value: u8,
    },
}

impl TrackEventKind {
    /// The status byte the event is written with.
    pub fn status(&self) -> u8 {
        match self {
            Self::Meta(_) => crate::file::meta::META_STATUS,
            Self::SysEx(s) => s.kind().status(),
            Self::Channel(c) => c.status(),
            Self::ContinuousController { control, .. } => *control,
        }
    }

    /// Bytes written after the delta-time.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Meta(m) => m.encoded_len(),
            Self::SysEx(s) => s.encoded_len(),
            Self::Channel(c) => c.encoded_len(),
            Self::ContinuousController { .. } => 2,
        }
    }

    /// Append everything after the delta-time. The status byte is always written.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Self::Meta(m) => m.write_to(out),
            Self::SysEx(s) => s.write_to(out),
            Self::Channel(c) => c.write_to(out),
            Self::ContinuousController { control, value } => {
                out.extend_from_slice(&[*control, *value])
            }
        }
    }
}

impl From<MetaEvent> for TrackEventKind {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysExEvent> for TrackEventKind {
    fn from(value: SysExEvent) -> Self {
        Self::SysEx(value)
    }
}

impl From<ChannelEvent> for TrackEventKind {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

#[doc = r#"
One event of a track: a delta-time and what happens.

# Example
```rust
# use smfcodec::prelude::*;
let event = TrackEvent::new(DeltaTime::ZERO, MetaEvent::text("text").unwrap());

assert_eq!(
    event.to_bytes(),
    [0x00, 0xFF, 0x01, 0x04, 0x74, 0x65, 0x78, 0x74]
);
```
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    delta_time: DeltaTime,
    kind: TrackEventKind,
}

impl TrackEvent {
    /// Pair a delta-time with an event.
    pub fn new(delta_time: DeltaTime, kind: impl Into<TrackEventKind>) -> Self {
        Self {
            delta_time,
            kind: kind.into(),
        }
    }

    /// An end of track after `delta_time`.
    pub fn end_of_track(delta_time: DeltaTime) -> Self {
        Self::new(delta_time, MetaEvent::EndOfTrack)
    }

    /// Ticks since the previous event.
    pub fn delta_time(&self) -> DeltaTime {
        self.delta_time
    }

    /// The event itself.
    pub fn kind(&self) -> &TrackEventKind {
        &self.kind
    }

    /// Give up the delta-time and event.
    pub fn into_parts(self) -> (DeltaTime, TrackEventKind) {
        (self.delta_time, self.kind)
    }

    /// True if this is an end of track meta event.
    pub fn is_end_of_track(&self) -> bool {
        matches!(&self.kind, TrackEventKind::Meta(m) if m.is_end_of_track())
    }

    /// Length of [`TrackEvent::to_bytes`].
    pub fn encoded_len(&self) -> usize {
        self.delta_time.quantity().len() + self.kind.encoded_len()
    }

    /// Append the delta-time and the event.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.delta_time.as_bytes());
        self.kind.write_to(out);
    }

    /// The event's bytes, with an explicit status byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for TrackEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meta(m) => write!(f, "{m}"),
            Self::SysEx(s) => match s.kind() {
                SysExKind::Whole => write!(f, "SysEx {} bytes", s.data().len()),
                SysExKind::Continuation => write!(f, "SysExContinuation {} bytes", s.data().len()),
            },
            Self::Channel(c) => write!(f, "{c}"),
            Self::ContinuousController { control, value } => {
                write!(f, "ContinuousController control={control:#04x} value={value}")
            }
        }
    }
}

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.delta_time, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn sysex_layout() {
        let event = TrackEvent::new(
            DeltaTime::new(1).unwrap(),
            SysExEvent::new(SysExKind::Whole, vec![0x43, 0x12, 0x00, 0xF7]).unwrap(),
        );
        assert_eq!(
            event.to_bytes(),
            [0x01, 0xF0, 0x04, 0x43, 0x12, 0x00, 0xF7]
        );
        assert_eq!(event.encoded_len(), 7);

        let divided =
            TrackEvent::new(DeltaTime::ZERO, SysExEvent::new(SysExKind::Continuation, vec![0x7F]).unwrap());
        assert_eq!(divided.to_bytes(), [0x00, 0xF7, 0x01, 0x7F]);
    }

    #[test]
    fn continuous_controller_is_two_raw_bytes() {
        let event = TrackEvent::new(
            DeltaTime::new(0x80).unwrap(),
            TrackEventKind::ContinuousController {
                control: 0xF3,
                value: 0x01,
            },
        );
        assert_eq!(event.to_bytes(), [0x81, 0x00, 0xF3, 0x01]);
        assert_eq!(event.kind().status(), 0xF3);
    }

    #[test]
    fn display_includes_delta() {
        let event = TrackEvent::end_of_track(DeltaTime::new(96).unwrap());
        assert!(event.is_end_of_track());
        assert_eq!(event.to_string(), "+96 EndOfTrack");
    }
}
