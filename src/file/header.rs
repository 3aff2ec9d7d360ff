use alloc::vec::Vec;

use crate::file::{FormatType, TimeDivision, builder::chunk::HEADER_TAG};

#[doc = r#"
The contents of the `MThd` chunk.

```text
"MThd" 00 00 00 06 <format: u16> <tracks: u16> <division: u16>
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    format_type: FormatType,
    num_tracks: u16,
    time_division: TimeDivision,
}

impl MidiFileHeader {
    /// Length of the header data; the only length the chunk may declare.
    pub const DATA_LEN: u32 = 6;
    /// Length of the whole chunk, tag and length field included.
    pub const CHUNK_LEN: usize = 14;

    /// Create a new header
    pub const fn new(format_type: FormatType, num_tracks: u16, time_division: TimeDivision) -> Self {
        Self {
            format_type,
            num_tracks,
            time_division,
        }
    }
    /// The declared track organisation
    pub const fn format_type(&self) -> FormatType {
        self.format_type
    }
    /// The declared number of track chunks
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }
    /// The time division word
    pub const fn time_division(&self) -> TimeDivision {
        self.time_division
    }

    /// Append the complete chunk.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&HEADER_TAG);
        out.extend_from_slice(&Self::DATA_LEN.to_be_bytes());
        out.extend_from_slice(&self.format_type.to_be_bytes());
        out.extend_from_slice(&self.num_tracks.to_be_bytes());
        out.extend_from_slice(&self.time_division.raw().to_be_bytes());
    }
}

#[test]
fn header_layout() {
    use pretty_assertions::assert_eq;

    let header = MidiFileHeader::new(FormatType::Simultaneous, 2, TimeDivision::new(0x60));
    let mut out = Vec::new();
    header.write_to(&mut out);
    assert_eq!(
        out,
        [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0, 0x60]
    );
    assert_eq!(out.len(), MidiFileHeader::CHUNK_LEN);
}
