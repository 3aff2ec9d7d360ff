#![doc = r#"
Meta events - the non-sounding events of a track

# Layout

```text
FF <type> <length: variable-length quantity> <length bytes of data>
```

Every meta event shares that layout, which is why events with a type this
crate does not know can still be carried through untouched as
[`MetaEvent::Unknown`].

| type | event                     | data                          |
|------|---------------------------|-------------------------------|
| 01   | Text                      | text, at most 127 bytes here  |
| 02   | Copyright notice          | text                          |
| 03   | Sequence or track name    | text                          |
| 04   | Instrument name           | text                          |
| 05   | Lyrics                    | text                          |
| 06   | Marker                    | text                          |
| 07   | Cue point                 | text                          |
| 20   | MIDI channel prefix       | 1 byte                        |
| 21   | MIDI port prefix          | 1 byte                        |
| 2F   | End of track              | none                          |
| 51   | Set tempo                 | 3 bytes                       |
| 54   | SMPTE offset              | 5 bytes                       |
| 58   | Time signature            | 4 bytes                       |
| 59   | Key signature             | 2 bytes                       |
| 7F   | Sequencer specific        | raw bytes                     |
"#]

mod signature;
pub use signature::*;

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

use alloc::vec::Vec;
use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{error::EncodeError, file::Payload, quantity::Quantity};

/// The status byte shared by all meta events.
pub const META_STATUS: u8 = 0xFF;

/// The meta event type codes this crate gives their own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `0x01`
    Text = 0x01,
    /// `0x02`
    CopyrightNotice = 0x02,
    /// `0x03`
    SequenceOrTrackName = 0x03,
    /// `0x04`
    InstrumentName = 0x04,
    /// `0x05`
    Lyrics = 0x05,
    /// `0x06`
    Marker = 0x06,
    /// `0x07`
    CuePoint = 0x07,
    /// `0x20`
    MidiChannelPrefix = 0x20,
    /// `0x21`
    MidiPortPrefix = 0x21,
    /// `0x2F`
    EndOfTrack = 0x2F,
    /// `0x51`
    SetTempo = 0x51,
    /// `0x54`
    SmpteOffset = 0x54,
    /// `0x58`
    TimeSignature = 0x58,
    /// `0x59`
    KeySignature = 0x59,
    /// `0x7F`
    SequencerSpecific = 0x7F,
}

impl MetaType {
    /// Longest text accepted by [`MetaEvent::text`] and by
    /// [`MetaEvent::set_text`] on a text event.
    pub const TEXT_MAX_LEN: usize = 127;

    /// True for the types whose data is free-form bytes.
    pub const fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::CopyrightNotice
                | Self::SequenceOrTrackName
                | Self::InstrumentName
                | Self::Lyrics
                | Self::Marker
                | Self::CuePoint
                | Self::SequencerSpecific
        )
    }

    /// Longest payload a textual type accepts when set, `None` for fixed-width types.
    pub const fn max_payload_len(&self) -> Option<usize> {
        match self {
            Self::Text => Some(Self::TEXT_MAX_LEN),
            other if other.is_textual() => Some(Quantity::MAX as usize),
            _ => None,
        }
    }

    /// Payload width of the fixed-width types, `None` for textual ones.
    pub const fn fixed_len(&self) -> Option<usize> {
        match self {
            Self::MidiChannelPrefix | Self::MidiPortPrefix => Some(1),
            Self::EndOfTrack => Some(0),
            Self::SetTempo => Some(Tempo::LEN),
            Self::SmpteOffset => Some(SmpteOffset::LEN),
            Self::TimeSignature => Some(TimeSignature::LEN),
            Self::KeySignature => Some(KeySignature::LEN),
            _ => None,
        }
    }
}

/// A meta event's type and data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent {
    /// Any text
    Text(Payload),
    /// A copyright notice
    CopyrightNotice(Payload),
    /// Name of the sequence (first track of format 0/1) or of the track
    SequenceOrTrackName(Payload),
    /// Instrumentation of the track
    InstrumentName(Payload),
    /// A lyric, usually one syllable
    Lyrics(Payload),
    /// A rehearsal letter or section name
    Marker(Payload),
    /// A description of something happening on stage or screen
    CuePoint(Payload),
    /// Channel the following meta and sysex events refer to
    MidiChannelPrefix(u8),
    /// Output port of the track
    MidiPortPrefix(u8),
    /// The mandatory last event of a track
    EndOfTrack,
    /// A tempo change
    SetTempo(Tempo),
    /// Where the track starts in SMPTE time
    SmpteOffset(SmpteOffset),
    /// A time signature
    TimeSignature(TimeSignature),
    /// A key signature
    KeySignature(KeySignature),
    /// Manufacturer-specific data
    SequencerSpecific(Payload),
    /// A meta event kept verbatim: an unrecognised type code, or a fixed-width
    /// type whose declared length did not match its width.
    Unknown {
        /// The type byte
        meta_type: u8,
        /// The data bytes
        data: Payload,
    },
}

impl MetaEvent {
    /// Build a textual meta event, checking the payload against the type's limit.
    ///
    /// # Errors
    /// - [`EncodeError::NotTextual`] for a fixed-width type.
    /// - [`EncodeError::PayloadTooLarge`] if `data` is over [`MetaType::max_payload_len`].
    pub fn new_textual(meta_type: MetaType, data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let Some(max) = meta_type.max_payload_len() else {
            return Err(EncodeError::NotTextual(meta_type.into()));
        };
        let payload = Payload::with_limit(data, max)?;
        Ok(match meta_type {
            MetaType::Text => Self::Text(payload),
            MetaType::CopyrightNotice => Self::CopyrightNotice(payload),
            MetaType::SequenceOrTrackName => Self::SequenceOrTrackName(payload),
            MetaType::InstrumentName => Self::InstrumentName(payload),
            MetaType::Lyrics => Self::Lyrics(payload),
            MetaType::Marker => Self::Marker(payload),
            MetaType::CuePoint => Self::CuePoint(payload),
            _ => Self::SequencerSpecific(payload),
        })
    }

    /// A text event of at most 127 bytes.
    pub fn text(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::Text, data)
    }

    /// A copyright notice.
    pub fn copyright_notice(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::CopyrightNotice, data)
    }

    /// A sequence or track name.
    pub fn sequence_or_track_name(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::SequenceOrTrackName, data)
    }

    /// An instrument name.
    pub fn instrument_name(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::InstrumentName, data)
    }

    /// A lyric.
    pub fn lyrics(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::Lyrics, data)
    }

    /// A marker.
    pub fn marker(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::Marker, data)
    }

    /// A cue point.
    pub fn cue_point(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::CuePoint, data)
    }

    /// A sequencer specific event.
    pub fn sequencer_specific(data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::new_textual(MetaType::SequencerSpecific, data)
    }

    /// A meta event kept as raw bytes.
    ///
    /// `meta_type` must be a code without its own variant, or a fixed-width
    /// code with data of another width. End of track is never accepted.
    pub fn unknown(meta_type: u8, data: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let data = Payload::new(data)?;
        if let Ok(known) = MetaType::try_from(meta_type) {
            let raw = known != MetaType::EndOfTrack
                && known.fixed_len().is_some_and(|width| width != data.len());
            if !raw {
                return Err(EncodeError::KnownMetaType(meta_type));
            }
        }
        Ok(Self::Unknown { meta_type, data })
    }

    /// Build the event for a type byte and its data, as found in a file.
    ///
    /// Fixed-width types whose data has the wrong length become
    /// [`MetaEvent::Unknown`], except end of track, whose data is ignored.
    pub(crate) fn from_parts(meta_type: u8, data: &[u8]) -> Self {
        let Ok(known) = MetaType::try_from(meta_type) else {
            return Self::Unknown {
                meta_type,
                data: Payload::from_decoded(data),
            };
        };
        if known == MetaType::EndOfTrack {
            return Self::EndOfTrack;
        }
        if let Some(width) = known.fixed_len() {
            if data.len() != width {
                return Self::Unknown {
                    meta_type,
                    data: Payload::from_decoded(data),
                };
            }
        }

        let payload = || Payload::from_decoded(data);
        match known {
            MetaType::Text => Self::Text(payload()),
            MetaType::CopyrightNotice => Self::CopyrightNotice(payload()),
            MetaType::SequenceOrTrackName => Self::SequenceOrTrackName(payload()),
            MetaType::InstrumentName => Self::InstrumentName(payload()),
            MetaType::Lyrics => Self::Lyrics(payload()),
            MetaType::Marker => Self::Marker(payload()),
            MetaType::CuePoint => Self::CuePoint(payload()),
            MetaType::SequencerSpecific => Self::SequencerSpecific(payload()),
            MetaType::MidiChannelPrefix => Self::MidiChannelPrefix(data[0]),
            MetaType::MidiPortPrefix => Self::MidiPortPrefix(data[0]),
            MetaType::SetTempo => Self::SetTempo(Tempo::from_bytes([data[0], data[1], data[2]])),
            MetaType::SmpteOffset => Self::SmpteOffset(SmpteOffset::from_bytes([
                data[0], data[1], data[2], data[3], data[4],
            ])),
            MetaType::TimeSignature => Self::TimeSignature(TimeSignature::from_bytes([
                data[0], data[1], data[2], data[3],
            ])),
            MetaType::KeySignature => Self::KeySignature(KeySignature::from_bytes([data[0], data[1]])),
            MetaType::EndOfTrack => Self::EndOfTrack,
        }
    }

    /// The type byte written after `FF`.
    pub fn type_byte(&self) -> u8 {
        match self {
            Self::Unknown { meta_type, .. } => *meta_type,
            other => other.meta_type().map(u8::from).unwrap_or_default(),
        }
    }

    /// The known type of the event, `None` for [`MetaEvent::Unknown`].
    pub const fn meta_type(&self) -> Option<MetaType> {
        Some(match self {
            Self::Text(_) => MetaType::Text,
            Self::CopyrightNotice(_) => MetaType::CopyrightNotice,
            Self::SequenceOrTrackName(_) => MetaType::SequenceOrTrackName,
            Self::InstrumentName(_) => MetaType::InstrumentName,
            Self::Lyrics(_) => MetaType::Lyrics,
            Self::Marker(_) => MetaType::Marker,
            Self::CuePoint(_) => MetaType::CuePoint,
            Self::MidiChannelPrefix(_) => MetaType::MidiChannelPrefix,
            Self::MidiPortPrefix(_) => MetaType::MidiPortPrefix,
            Self::EndOfTrack => MetaType::EndOfTrack,
            Self::SetTempo(_) => MetaType::SetTempo,
            Self::SmpteOffset(_) => MetaType::SmpteOffset,
            Self::TimeSignature(_) => MetaType::TimeSignature,
            Self::KeySignature(_) => MetaType::KeySignature,
            Self::SequencerSpecific(_) => MetaType::SequencerSpecific,
            Self::Unknown { .. } => return None,
        })
    }

    /// True for anything written as `FF 2F`.
    pub fn is_end_of_track(&self) -> bool {
        self.type_byte() == u8::from(MetaType::EndOfTrack)
    }

    /// The payload of a textual event.
    pub fn text_payload(&self) -> Option<&Payload> {
        match self {
            Self::Text(p)
            | Self::CopyrightNotice(p)
            | Self::SequenceOrTrackName(p)
            | Self::InstrumentName(p)
            | Self::Lyrics(p)
            | Self::Marker(p)
            | Self::CuePoint(p)
            | Self::SequencerSpecific(p) => Some(p),
            _ => None,
        }
    }

    /// Replace the payload of a textual event.
    ///
    /// The event is left unchanged when an error is returned.
    pub fn set_text(&mut self, data: impl Into<Vec<u8>>) -> Result<(), EncodeError> {
        let Some(max) = self.meta_type().and_then(|t| t.max_payload_len()) else {
            return Err(EncodeError::NotTextual(self.type_byte()));
        };
        let payload = Payload::with_limit(data, max)?;
        match self {
            Self::Text(p)
            | Self::CopyrightNotice(p)
            | Self::SequenceOrTrackName(p)
            | Self::InstrumentName(p)
            | Self::Lyrics(p)
            | Self::Marker(p)
            | Self::CuePoint(p)
            | Self::SequencerSpecific(p) => *p = payload,
            _ => return Err(EncodeError::NotTextual(self.type_byte())),
        }
        Ok(())
    }

    /// Number of data bytes after the length prefix.
    pub fn payload_len(&self) -> usize {
        match self {
            Self::Unknown { data, .. } => data.len(),
            Self::MidiChannelPrefix(_) | Self::MidiPortPrefix(_) => 1,
            Self::EndOfTrack => 0,
            Self::SetTempo(_) => Tempo::LEN,
            Self::SmpteOffset(_) => SmpteOffset::LEN,
            Self::TimeSignature(_) => TimeSignature::LEN,
            Self::KeySignature(_) => KeySignature::LEN,
            other => other.text_payload().map(|p| p.len()).unwrap_or_default(),
        }
    }

    /// Bytes written by [`MetaEvent::write_to`]: status, type, length, data.
    pub fn encoded_len(&self) -> usize {
        let len = self.payload_len();
        2 + Quantity::new_unchecked(len as u32).len() + len
    }

    /// Append `FF <type> <length> <data>`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        fn emit(out: &mut Vec<u8>, bytes: &[u8]) {
            out.extend_from_slice(Quantity::new_unchecked(bytes.len() as u32).as_bytes());
            out.extend_from_slice(bytes);
        }

        out.push(META_STATUS);
        out.push(self.type_byte());
        match self {
            Self::Text(p)
            | Self::CopyrightNotice(p)
            | Self::SequenceOrTrackName(p)
            | Self::InstrumentName(p)
            | Self::Lyrics(p)
            | Self::Marker(p)
            | Self::CuePoint(p)
            | Self::SequencerSpecific(p)
            | Self::Unknown { data: p, .. } => emit(out, p.as_bytes()),
            Self::MidiChannelPrefix(v) | Self::MidiPortPrefix(v) => emit(out, &[*v]),
            Self::EndOfTrack => emit(out, &[]),
            Self::SetTempo(t) => emit(out, &t.to_bytes()),
            Self::SmpteOffset(o) => emit(out, &o.to_bytes()),
            Self::TimeSignature(t) => emit(out, &t.to_bytes()),
            Self::KeySignature(k) => emit(out, &k.to_bytes()),
        }
    }
}

impl fmt::Display for MetaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(p) => write!(f, "Text {p}"),
            Self::CopyrightNotice(p) => write!(f, "CopyrightNotice {p}"),
            Self::SequenceOrTrackName(p) => write!(f, "SequenceOrTrackName {p}"),
            Self::InstrumentName(p) => write!(f, "InstrumentName {p}"),
            Self::Lyrics(p) => write!(f, "Lyrics {p}"),
            Self::Marker(p) => write!(f, "Marker {p}"),
            Self::CuePoint(p) => write!(f, "CuePoint {p}"),
            Self::MidiChannelPrefix(c) => write!(f, "MidiChannelPrefix channel={c}"),
            Self::MidiPortPrefix(p) => write!(f, "MidiPortPrefix port={p}"),
            Self::EndOfTrack => f.write_str("EndOfTrack"),
            Self::SetTempo(t) => write!(f, "SetTempo tempo={t}"),
            Self::SmpteOffset(o) => write!(f, "SmpteOffset {o}"),
            Self::TimeSignature(t) => write!(f, "TimeSignature {t}"),
            Self::KeySignature(k) => write!(f, "KeySignature {k}"),
            Self::SequencerSpecific(p) => write!(f, "SequencerSpecific {} bytes", p.len()),
            Self::Unknown { meta_type, data } => {
                write!(f, "Unknown type={meta_type:#04x} {} bytes", data.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};
    use pretty_assertions::assert_eq;

    fn encode(event: &MetaEvent) -> Vec<u8> {
        let mut out = Vec::new();
        event.write_to(&mut out);
        assert_eq!(out.len(), event.encoded_len());
        out
    }

    #[test]
    fn text_event_layout() {
        let event = MetaEvent::text("text").unwrap();
        assert_eq!(encode(&event), [0xFF, 0x01, 0x04, b't', b'e', b'x', b't']);
        assert_eq!(event.to_string(), r#"Text "text""#);
    }

    #[test]
    fn text_is_capped_at_127_bytes() {
        assert!(MetaEvent::text(vec![0u8; 127]).is_ok());
        assert_eq!(
            MetaEvent::text(vec![0u8; 128]).unwrap_err(),
            EncodeError::PayloadTooLarge { len: 128, max: 127 }
        );

        let mut event = MetaEvent::text("text").unwrap();
        assert!(event.set_text(vec![b'a'; 128]).is_err());
        assert_eq!(event.text_payload().unwrap().as_str(), Some("text"));
        event.set_text(vec![b'a'; 127]).unwrap();
        assert_eq!(event.payload_len(), 127);
    }

    #[test]
    fn other_text_events_take_a_full_quantity() {
        let max = Quantity::MAX as usize;
        for make in [
            MetaEvent::copyright_notice as fn(Vec<u8>) -> Result<MetaEvent, EncodeError>,
            MetaEvent::lyrics,
            MetaEvent::marker,
            MetaEvent::sequencer_specific,
        ] {
            assert!(make(vec![0; 128]).is_ok());
            assert_eq!(make(vec![0; max]).map(|e| e.payload_len()), Ok(max));
            assert_eq!(
                make(vec![0; max + 1]).unwrap_err(),
                EncodeError::PayloadTooLarge { len: max + 1, max }
            );
        }
    }

    #[test]
    fn long_payload_gets_a_long_prefix() {
        let event = MetaEvent::marker(vec![b'm'; 200]).unwrap();
        let bytes = encode(&event);
        assert_eq!(&bytes[..4], &[0xFF, 0x06, 0x81, 0x48]);
        assert_eq!(bytes.len(), 4 + 200);
    }

    #[test]
    fn fixed_width_events() {
        assert_eq!(
            MetaEvent::from_parts(0x51, &[0x07, 0xA1, 0x20]),
            MetaEvent::SetTempo(Tempo::DEFAULT)
        );
        assert_eq!(
            encode(&MetaEvent::SetTempo(Tempo::DEFAULT)),
            [0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]
        );
        assert_eq!(
            MetaEvent::from_parts(0x59, &[0x02, 0x00]),
            MetaEvent::KeySignature(KeySignature { key: 2, scale: 0 })
        );
        assert_eq!(
            encode(&MetaEvent::from_parts(0x58, &[4, 2, 24, 8])),
            [0xFF, 0x58, 0x04, 4, 2, 24, 8]
        );
        assert_eq!(encode(&MetaEvent::EndOfTrack), [0xFF, 0x2F, 0x00]);
        assert_eq!(encode(&MetaEvent::MidiPortPrefix(1)), [0xFF, 0x21, 0x01, 0x01]);
    }

    #[test]
    fn unknown_types_are_kept_verbatim() {
        let event = MetaEvent::from_parts(0x00, &[0x00, 0x07]);
        assert_eq!(event.meta_type(), None);
        assert_eq!(event.type_byte(), 0x00);
        assert_eq!(encode(&event), [0xFF, 0x00, 0x02, 0x00, 0x07]);
    }

    #[test]
    fn wrong_width_is_kept_verbatim() {
        let event = MetaEvent::from_parts(0x51, &[0x07, 0xA1]);
        assert_eq!(
            event,
            MetaEvent::Unknown {
                meta_type: 0x51,
                data: Payload::new([0x07, 0xA1]).unwrap()
            }
        );
        assert_eq!(encode(&event), [0xFF, 0x51, 0x02, 0x07, 0xA1]);
    }

    #[test]
    fn raw_events_must_read_back_raw() {
        assert!(MetaEvent::unknown(0x60, [0xAAu8]).is_ok());
        assert!(MetaEvent::unknown(0x51, [0x07u8, 0xA1]).is_ok());
        assert_eq!(
            MetaEvent::unknown(0x51, [0x07u8, 0xA1, 0x20]).unwrap_err(),
            EncodeError::KnownMetaType(0x51)
        );
        assert_eq!(
            MetaEvent::unknown(0x01, "hi").unwrap_err(),
            EncodeError::KnownMetaType(0x01)
        );
        for data in [&[][..], &[0x00u8][..]] {
            assert_eq!(
                MetaEvent::unknown(0x2F, data).unwrap_err(),
                EncodeError::KnownMetaType(0x2F)
            );
        }
    }

    #[test]
    fn end_of_track_is_recognised_by_type_byte() {
        let raw = MetaEvent::Unknown {
            meta_type: 0x2F,
            data: Payload::default(),
        };
        assert!(raw.is_end_of_track());
        assert!(MetaEvent::EndOfTrack.is_end_of_track());
        assert!(!MetaEvent::unknown(0x60, Vec::new()).unwrap().is_end_of_track());
    }

    #[test]
    fn set_text_rejects_fixed_width_events() {
        let mut event = MetaEvent::SetTempo(Tempo::DEFAULT);
        assert_eq!(
            event.set_text("x").unwrap_err(),
            EncodeError::NotTextual(0x51)
        );
        assert_eq!(
            MetaEvent::new_textual(MetaType::EndOfTrack, "x").unwrap_err(),
            EncodeError::NotTextual(0x2F)
        );
    }
}
