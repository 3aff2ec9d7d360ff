use alloc::vec::Vec;
use core::slice;

use crate::{
    error::{EncodeError, TrackError},
    file::{SYSEX_CONTINUATION_STATUS, TrackEvent, TrackEventKind, builder::chunk::TrackChunkHeader},
};

#[doc = r#"
The events of one track chunk, in file order.

A track always ends with exactly one end of track event, and no end of track
appears anywhere else.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// Wrap events that end with (and only with) an end of track.
    ///
    /// A [`TrackEventKind::ContinuousController`] must start with a byte the
    /// reader cannot mistake for anything else: a system common or real-time
    /// status (`F1`-`FE` except `F7`), or a data byte while nothing but such
    /// data byte pairs precede it.
    pub fn new(events: Vec<TrackEvent>) -> Result<Self, TrackError> {
        let Some(last) = events.len().checked_sub(1) else {
            return Err(TrackError::MissingEndOfTrack);
        };
        if let Some(index) = events[..last].iter().position(TrackEvent::is_end_of_track) {
            return Err(TrackError::EventAfterEndOfTrack(index));
        }
        if !events[last].is_end_of_track() {
            return Err(TrackError::MissingEndOfTrack);
        }

        // Data byte pairs are only read as such before any status is seen.
        let mut leading_data = true;
        for (index, event) in events.iter().enumerate() {
            let control = match event.kind() {
                TrackEventKind::ContinuousController { control, .. } => *control,
                _ => {
                    leading_data = false;
                    continue;
                }
            };
            let readable = match control {
                0x00..=0x7F => leading_data,
                SYSEX_CONTINUATION_STATUS => false,
                0xF1..=0xFE => true,
                _ => false,
            };
            if !readable {
                return Err(TrackError::AmbiguousContinuousController(index));
            }
            leading_data &= control < 0x80;
        }

        Ok(Self { events })
    }

    /// Events collected by the reader, which stops at the first end of track.
    pub(crate) fn from_parsed(events: Vec<TrackEvent>) -> Self {
        debug_assert!(events.last().is_some_and(TrackEvent::is_end_of_track));
        Self { events }
    }

    /// The events, end of track included.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Iterate the events in file order.
    pub fn iter(&self) -> slice::Iter<'_, TrackEvent> {
        self.events.iter()
    }

    /// Number of events, end of track included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Give back the events.
    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }

    /// Length of the event stream, which is the chunk length.
    pub fn encoded_len(&self) -> usize {
        self.events.iter().map(TrackEvent::encoded_len).sum()
    }

    /// The event stream without the chunk header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for event in &self.events {
            event.write_to(&mut out);
        }
        out
    }

    /// Append a complete `MTrk` chunk.
    pub fn write_chunk(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let len = self.encoded_len();
        let header = TrackChunkHeader::new(
            u32::try_from(len).map_err(|_| EncodeError::ChunkTooLarge(len))?,
        );
        out.reserve(TrackChunkHeader::LEN + len);
        header.write_to(out);
        for event in &self.events {
            event.write_to(out);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackEvent;
    type IntoIter = slice::Iter<'a, TrackEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        file::{DeltaTime, Payload, meta::MetaEvent},
        message::ChannelEvent,
        reader::Reader,
    };
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> TrackEvent {
        TrackEvent::new(DeltaTime::ZERO, MetaEvent::text(s).unwrap())
    }

    #[test]
    fn track_must_end_with_end_of_track() {
        assert_eq!(Track::new(vec![]).unwrap_err(), TrackError::MissingEndOfTrack);
        assert_eq!(
            Track::new(vec![text("a")]).unwrap_err(),
            TrackError::MissingEndOfTrack
        );
        assert_eq!(
            Track::new(vec![
                TrackEvent::end_of_track(DeltaTime::ZERO),
                text("a"),
                TrackEvent::end_of_track(DeltaTime::ZERO),
            ])
            .unwrap_err(),
            TrackError::EventAfterEndOfTrack(0)
        );
        let track = Track::new(vec![text("a"), TrackEvent::end_of_track(DeltaTime::ZERO)]).unwrap();
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn raw_end_of_track_cannot_hide_inside_a_track() {
        let raw = MetaEvent::Unknown {
            meta_type: 0x2F,
            data: Payload::default(),
        };
        assert_eq!(
            Track::new(vec![
                TrackEvent::new(DeltaTime::ZERO, raw),
                text("after"),
                TrackEvent::end_of_track(DeltaTime::ZERO),
            ])
            .unwrap_err(),
            TrackError::EventAfterEndOfTrack(0)
        );
        assert!(MetaEvent::unknown(0x2F, Vec::new()).is_err());
    }

    #[test]
    fn continuous_controllers_must_read_back() {
        let pair = |control| {
            TrackEvent::new(
                DeltaTime::ZERO,
                TrackEventKind::ContinuousController {
                    control,
                    value: 0x64,
                },
            )
        };
        let note_on = TrackEvent::new(
            DeltaTime::ZERO,
            ChannelEvent::NoteOn {
                channel: 0,
                note: 60,
                velocity: 64,
            },
        );
        let eot = || TrackEvent::end_of_track(DeltaTime::ZERO);

        assert_eq!(
            Track::new(vec![note_on.clone(), pair(0x07), eot()]).unwrap_err(),
            TrackError::AmbiguousContinuousController(1)
        );
        for control in [0x90, 0xF0, 0xF7, 0xFF] {
            assert_eq!(
                Track::new(vec![pair(control), eot()]).unwrap_err(),
                TrackError::AmbiguousContinuousController(0)
            );
        }
        assert_eq!(
            Track::new(vec![pair(0xF3), pair(0x07), eot()]).unwrap_err(),
            TrackError::AmbiguousContinuousController(1)
        );

        for events in [
            vec![pair(0x07), pair(0x08), note_on.clone(), eot()],
            vec![note_on, pair(0xF3), pair(0xFE), eot()],
        ] {
            let track = Track::new(events).unwrap();
            let read = Reader::from_byte_slice(&track.to_bytes())
                .read_track_body()
                .unwrap();
            assert_eq!(read, track);
        }
    }

    #[test]
    fn chunk_carries_stream_length() {
        let track = Track::new(vec![text("ab"), TrackEvent::end_of_track(DeltaTime::ZERO)]).unwrap();
        let mut out = Vec::new();
        track.write_chunk(&mut out).unwrap();
        assert_eq!(
            out,
            [
                b'M', b'T', b'r', b'k', 0, 0, 0, 10, //
                0x00, 0xFF, 0x01, 0x02, b'a', b'b', //
                0x00, 0xFF, 0x2F, 0x00,
            ]
        );
        assert_eq!(track.to_bytes(), &out[8..]);
    }
}
