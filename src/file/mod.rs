#![doc = r#"
Rusty representation of a [`MidiFile`]

A file is a header chunk followed by track chunks. Each [`Track`] holds
[`TrackEvent`]s: a [`DeltaTime`] and a meta, sysex or channel event.
"#]

/// Contains the [`MidiFileBuilder`](builder::MidiFileBuilder) and chunk framing
pub mod builder;

mod delta_time;
pub use delta_time::*;

mod event;
pub use event::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

pub mod meta;

mod payload;
pub use payload::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    error::EncodeError,
    reader::{ReadResult, Reader},
};
use alloc::vec::Vec;
use core::slice;

#[doc = r#"
A complete Standard MIDI File: a format, a time division and its tracks.

# Example
```rust
# use smfcodec::prelude::*;
let track = Track::new(vec![
    TrackEvent::new(DeltaTime::ZERO, MetaEvent::sequence_or_track_name("lead").unwrap()),
    TrackEvent::end_of_track(DeltaTime::ZERO),
])
.unwrap();
let file = MidiFile::new(
    FormatType::SingleMultiChannel,
    TimeDivision::from_ticks_per_quarter_note(96),
    vec![track],
)
.unwrap();

let bytes = file.to_bytes().unwrap();
assert_eq!(MidiFile::parse(&bytes).unwrap(), file);
```
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    format_type: FormatType,
    time_division: TimeDivision,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Assemble a file. The header's track count is taken from `tracks`.
    ///
    /// # Errors
    /// [`EncodeError::TooManyTracks`] past `u16::MAX` tracks.
    pub fn new(
        format_type: FormatType,
        time_division: TimeDivision,
        tracks: Vec<Track>,
    ) -> Result<Self, EncodeError> {
        if tracks.len() > usize::from(u16::MAX) {
            return Err(EncodeError::TooManyTracks(tracks.len()));
        }
        Ok(Self {
            format_type,
            time_division,
            tracks,
        })
    }

    pub(crate) fn from_parsed(header: MidiFileHeader, tracks: Vec<Track>) -> Self {
        Self {
            format_type: header.format_type(),
            time_division: header.time_division(),
            tracks,
        }
    }

    /// Parse a set of bytes into a file struct
    ///
    /// Uses the default [`ParseOptions`](crate::reader::ParseOptions); use a
    /// [`Reader`] directly to change them.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        Reader::from_byte_slice(bytes).read_file()
    }

    /// Returns the format type for the file.
    pub const fn format_type(&self) -> FormatType {
        self.format_type
    }

    /// Returns the time division word.
    pub const fn time_division(&self) -> TimeDivision {
        self.time_division
    }

    /// Returns the tracks in file order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over the tracks.
    pub fn iter_tracks(&self) -> slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Give back the tracks.
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }

    /// The header chunk this file is written with.
    pub fn header(&self) -> MidiFileHeader {
        // `new` and the reader both keep the count within u16
        let num_tracks = u16::try_from(self.tracks.len()).unwrap_or(u16::MAX);
        MidiFileHeader::new(self.format_type, num_tracks, self.time_division)
    }

    /// Header chunk plus every track chunk.
    pub fn encoded_len(&self) -> usize {
        MidiFileHeader::CHUNK_LEN
            + self
                .tracks
                .iter()
                .map(|t| builder::chunk::TrackChunkHeader::LEN + t.encoded_len())
                .sum::<usize>()
    }

    /// Serialize the whole file.
    ///
    /// Every event is written with its status byte; running status is never
    /// used on output.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.header().write_to(&mut out);
        for track in &self.tracks {
            track.write_chunk(&mut out)?;
        }
        Ok(out)
    }
}
