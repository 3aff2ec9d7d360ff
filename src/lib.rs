#![doc = r#"
Byte-exact Standard MIDI File decoding and encoding

Read a file with [`MidiFile::parse`](file::MidiFile::parse), or drive a
[`Reader`](reader::Reader) yourself to read single events, bare track bodies
or to collect diagnostics. Every structure writes itself back out with
`to_bytes`/`write_to`; output always carries explicit status bytes.

```rust
use smfcodec::prelude::*;

let bytes = [
    0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60,
    0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x04,
    0x00, 0xFF, 0x2F, 0x00,
];
let file = MidiFile::parse(&bytes).unwrap();
assert_eq!(file.format_type(), FormatType::SingleMultiChannel);
assert_eq!(file.tracks()[0].len(), 1);
assert_eq!(file.to_bytes().unwrap(), bytes);
```

# Features
- `std` (default): `std::error::Error` for the error types
- `tracing`: [`TracingSink`](reader::sink::TracingSink) and warnings on
  tolerated irregularities
- `serde`: `Serialize`/`Deserialize` for the data model
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod file;
pub mod message;
pub mod quantity;
pub mod reader;

/// Commonly used types
pub mod prelude {
    pub use crate::error::{EncodeError, FileError, SmpteError, TrackError};
    pub use crate::file::{
        DeltaTime, FormatType, MidiFile, MidiFileHeader, Payload, SysExEvent, SysExKind,
        TimeDivision, Track, TrackEvent, TrackEventKind,
        builder::MidiFileBuilder,
        meta::{KeySignature, MetaEvent, MetaType, SmpteOffset, Tempo, TimeSignature},
    };
    pub use crate::file::SmpteFps;
    pub use crate::message::ChannelEvent;
    pub use crate::quantity::Quantity;
    pub use crate::reader::{
        ParseOptions, ReadResult, Reader, ReaderError, ReaderErrorKind, RunningStatus,
        sink::{DiagnosticSink, NoopSink},
    };
}
