#![doc = r#"
Chunk framing

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk
data.

```text
[Header Chunk: "MThd" 00 00 00 06 ...]   see MidiFileHeader
[Track Chunk 1: "MTrk" <length> <events>]
[Track Chunk 2: "MTrk" <length> <events>]
...
```

The header chunk always has a length of 6. A track chunk's length is the
number of bytes in its event stream. When reading, that length decides where
the next chunk starts, even if the events inside end earlier.
"#]

use alloc::vec::Vec;

/// Tag of the header chunk.
pub const HEADER_TAG: [u8; 4] = *b"MThd";
/// Tag of a track chunk.
pub const TRACK_TAG: [u8; 4] = *b"MTrk";

/// The eight bytes in front of a track's event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackChunkHeader {
    length: u32,
}

impl TrackChunkHeader {
    /// Tag plus length field.
    pub const LEN: usize = 8;

    /// A header announcing `length` bytes of events.
    pub const fn new(length: u32) -> Self {
        Self { length }
    }

    /// Declared length of the event stream.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Append the tag and length.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&TRACK_TAG);
        out.extend_from_slice(&self.length.to_be_bytes());
    }
}
