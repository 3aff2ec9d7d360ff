#![doc = r#"
Errors raised while building or encoding MIDI structures

Reading errors live in [`reader`](crate::reader) and always carry the byte
offset where the input went wrong. The errors here are about values that
cannot be represented in a file at all.
"#]

use thiserror::Error;

/// A value could not be encoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A payload is longer than the event type allows.
    #[error("Payload of {len} bytes exceeds the limit of {max} bytes")]
    PayloadTooLarge {
        /// Length of the rejected payload
        len: usize,
        /// Largest length the event accepts
        max: usize,
    },
    /// A variable-length quantity can hold at most 28 bits.
    #[error("{0} does not fit in a variable-length quantity")]
    QuantityOverflow(u64),
    /// A tempo is stored in three bytes.
    #[error("Tempo of {0} microseconds does not fit in 24 bits")]
    TempoOverflow(u32),
    /// Tried to set text on a meta event that does not carry any.
    #[error("Meta event {0:#04x} does not carry a text payload")]
    NotTextual(u8),
    /// A raw meta event would be read back as a typed one.
    #[error("Meta event {0:#04x} with this data is read back as a typed event")]
    KnownMetaType(u8),
    /// The header stores the track count in 16 bits.
    #[error("{0} tracks do not fit in a header chunk")]
    TooManyTracks(usize),
    /// A chunk length is stored in 32 bits.
    #[error("Chunk of {0} bytes is too large")]
    ChunkTooLarge(usize),
}

/// A track does not end the way a track must.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// The last event is not an end of track.
    #[error("Track does not end with an end of track event")]
    MissingEndOfTrack,
    /// An end of track appears before the last event.
    #[error("End of track event at index {0} is followed by more events")]
    EventAfterEndOfTrack(usize),
    /// A continuous controller whose first byte would be read as another
    /// event's status or data.
    #[error("Continuous controller at index {0} cannot be read back")]
    AmbiguousContinuousController(usize),
}

/// A [`MidiFile`](crate::file::MidiFile) could not be assembled.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    /// No tracks were supplied.
    #[error("A MIDI file needs at least one track")]
    NoTracks,
    /// No time division was supplied.
    #[error("A MIDI file needs a time division")]
    NoTimeDivision,
    /// Format 0 holds exactly one track.
    #[error("Single multi-channel format requires exactly one track, got {0}")]
    MultipleTracksForSingleMultiChannel(usize),
    /// Track count is not representable in the header.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Validation errors for [`SmpteOffset`](crate::file::meta::SmpteOffset).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// Hours are 0-23.
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes are 0-59.
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds are 0-59.
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// The frame is beyond what the frame rate allows.
    #[error("Invalid frame {frame} for {fps} fps")]
    Frame {
        /// The offending frame
        frame: u8,
        /// Nominal frames per second
        fps: u8,
    },
    /// Subframes are hundredths of a frame.
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}
