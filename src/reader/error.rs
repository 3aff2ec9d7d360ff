use thiserror::Error;

#[doc = r#"
An error that occurred while reading a MIDI file.

Reading is all or nothing: once an error is returned, nothing that was
parsed before it is kept.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// The input ended before a required field was complete.
    #[error("Input ended before the field was complete")]
    TruncatedInput,
    /// A chunk did not start with the expected tag.
    #[error("Expected chunk tag {expected:?}, found {found:?}")]
    InvalidChunkTag {
        /// `MThd` or `MTrk`
        expected: [u8; 4],
        /// What was read instead
        found: [u8; 4],
    },
    /// The header chunk length is always 6.
    #[error("Header size must be 6, found {0}")]
    InvalidHeaderSize(u32),
    /// The format type is above 3.
    #[error("Invalid format type {0}")]
    InvalidFormatType(u16),
    /// A variable-length quantity ran over four bytes.
    #[error("Variable-length quantity is longer than 4 bytes")]
    MalformedQuantity,
    /// The input ended inside a track that was never terminated.
    #[error("Track has no end of track event")]
    MissingEndOfTrack,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if the input ended early
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::TruncatedInput)
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::TruncatedInput,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
