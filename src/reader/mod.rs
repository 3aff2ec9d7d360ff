#![doc = r#"
Contains the [`Reader`], which turns Standard MIDI File bytes into
[`MidiFile`]s, [`Track`]s and [`TrackEvent`]s

# Running status

A channel event may leave out its status byte when it is the same as the
previous event's. The reader remembers the last status it saw; when an event
starts with a byte below `0x80` and a status is remembered, that status is
used and the byte is read as the first data byte.

```text
00 90 3C 40    note on, explicit status
10    3E 40    note on again, status 90 implied
```

The remembered status is updated after every event, meta and sysex events
included.

# Example
```rust
# use smfcodec::prelude::*;
let bytes = [0x00, 0xFF, 0x01, 0x04, 0x74, 0x65, 0x78, 0x74, 0x00, 0xFF, 0x2F, 0x00];
let mut reader = Reader::from_byte_slice(&bytes);

let track = reader.read_track_body().unwrap();
assert_eq!(track.len(), 2);
assert_eq!(reader.buffer_position(), bytes.len());
```
"#]

mod error;
pub use error::*;

mod options;
pub use options::*;

pub mod sink;
use sink::{DiagnosticSink, NoopSink};

use alloc::vec::Vec;

use crate::{
    file::{
        DeltaTime, FormatType, MidiFile, MidiFileHeader, SysExEvent, SysExKind, TimeDivision,
        Track, TrackEvent, TrackEventKind,
        builder::chunk::{HEADER_TAG, TRACK_TAG},
        meta::{META_STATUS, MetaEvent, MetaType},
        SYSEX_CONTINUATION_STATUS, SYSEX_STATUS,
    },
    message::ChannelEvent,
    quantity::Quantity,
};

macro_rules! trace {
    ($reader:expr, $($arg:tt)*) => {
        $reader.sink.trace($reader.position, format_args!($($arg)*))
    };
}

/// Reads a Standard MIDI File held in memory.
///
/// A reader holds a cursor into the bytes and the running status. Progress is
/// reported to a [`DiagnosticSink`], which is [`NoopSink`] unless one is set
/// with [`Reader::with_sink`].
pub struct Reader<'a, S = NoopSink> {
    data: &'a [u8],
    position: usize,
    previous_status: Option<u8>,
    options: ParseOptions,
    sink: S,
}

impl<'a> Reader<'a> {
    /// Read from the start of `data`.
    pub fn from_byte_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            previous_status: None,
            options: ParseOptions::default(),
            sink: NoopSink,
        }
    }
}

impl<'a, S: DiagnosticSink> Reader<'a, S> {
    /// Send diagnostics to `sink`.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Reader<'a, T> {
        Reader {
            data: self.data,
            position: self.position,
            previous_status: self.previous_status,
            options: self.options,
            sink,
        }
    }

    /// Use `options` from now on.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Offset of the next byte to be read.
    pub fn buffer_position(&self) -> usize {
        self.position
    }

    /// The status byte that an event without one would use.
    pub fn running_status(&self) -> Option<u8> {
        self.previous_status
    }

    /// Give back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Read a whole file: the header, then as many track chunks as it declares.
    ///
    /// Bytes after the last declared track are not looked at.
    pub fn read_file(&mut self) -> ReadResult<MidiFile> {
        trace!(self, "start parsing {} bytes", self.data.len());

        let header = self.read_header()?;
        let mut tracks = Vec::with_capacity(usize::from(header.num_tracks()));
        for n in 0..header.num_tracks() {
            trace!(self, "start parsing track {n}");
            tracks.push(self.read_track()?);
        }

        if self.position < self.data.len() {
            let trailing = self.data.len() - self.position;
            trace!(self, "ignoring {trailing} bytes after the last track");
        }
        trace!(self, "successfully done");

        Ok(MidiFile::from_parsed(header, tracks))
    }

    /// Read the `MThd` chunk.
    pub fn read_header(&mut self) -> ReadResult<MidiFileHeader> {
        trace!(self, "start parsing MThd");
        self.expect_tag(HEADER_TAG)?;

        let size_at = self.position;
        let size = u32::from_be_bytes(self.read_exact_size()?);
        if size != MidiFileHeader::DATA_LEN {
            return Err(ReaderError::new(
                size_at,
                ReaderErrorKind::InvalidHeaderSize(size),
            ));
        }

        let format_at = self.position;
        let format = u16::from_be_bytes(self.read_exact_size()?);
        let format_type = FormatType::try_from(format)
            .map_err(|_| ReaderError::new(format_at, ReaderErrorKind::InvalidFormatType(format)))?;
        trace!(self, "parsing format type completed (formatType={format_type})");

        let num_tracks = u16::from_be_bytes(self.read_exact_size()?);
        trace!(self, "parsing number of tracks completed ({num_tracks})");

        let time_division = TimeDivision::new(u16::from_be_bytes(self.read_exact_size()?));
        trace!(self, "parsing time division completed ({time_division})");

        Ok(MidiFileHeader::new(format_type, num_tracks, time_division))
    }

    /// Read one `MTrk` chunk.
    ///
    /// Afterwards the cursor sits at the end of the chunk as declared by its
    /// length field, wherever the end of track event was found.
    pub fn read_track(&mut self) -> ReadResult<Track> {
        trace!(self, "start parsing MTrk");
        self.expect_tag(TRACK_TAG)?;

        let length = u32::from_be_bytes(self.read_exact_size()?) as usize;
        trace!(self, "parsing size of track completed (chunkSize={length})");

        if self.options.running_status == RunningStatus::ResetPerTrack {
            self.previous_status = None;
        }

        let body_start = self.position;
        let track = self.read_track_body()?;

        let consumed = self.position - body_start;
        if consumed != length {
            trace!(
                self,
                "track events took {consumed} bytes but the chunk declares {length}"
            );
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Track chunk at {} declares {} bytes, its events take {}. \
                The declared length decides where the next chunk starts.",
                body_start,
                length,
                consumed
            );
        }
        self.position = body_start.saturating_add(length);

        Ok(track)
    }

    /// Read events until an end of track.
    ///
    /// # Errors
    /// [`ReaderErrorKind::MissingEndOfTrack`] if the input runs out first.
    pub fn read_track_body(&mut self) -> ReadResult<Track> {
        let mut events = Vec::new();
        while self.position < self.data.len() {
            let event = self.read_event()?;
            let done = event.is_end_of_track();
            events.push(event);
            if done {
                return Ok(Track::from_parsed(events));
            }
        }
        Err(ReaderError::new(
            self.position,
            ReaderErrorKind::MissingEndOfTrack,
        ))
    }

    /// Read one event: a delta-time, a status byte unless running status
    /// applies, and the data for that status.
    pub fn read_event(&mut self) -> ReadResult<TrackEvent> {
        trace!(self, "start parsing event");

        let start = self.position;
        let delta_time = DeltaTime::from(self.read_quantity()?);

        let candidate = self.peek_byte()?;
        let status = match self.previous_status {
            Some(previous) if candidate < 0x80 && previous >= 0x80 => previous,
            _ => {
                self.position += 1;
                candidate
            }
        };

        let kind = match status {
            META_STATUS => self.read_meta_event(start)?,
            SYSEX_STATUS => self.read_sysex_event(SysExKind::Whole)?,
            SYSEX_CONTINUATION_STATUS => self.read_sysex_event(SysExKind::Continuation)?,
            _ => self.read_channel_event(status)?,
        };
        self.previous_status = Some(status);

        let event = TrackEvent::new(delta_time, kind);
        trace!(self, "parsing event completed (event = {event})");
        Ok(event)
    }

    fn read_meta_event(&mut self, start: usize) -> ReadResult<TrackEventKind> {
        let [meta_type] = self.read_exact_size()?;
        let len = self.read_quantity()?;
        let data = self.read_slice(len.value() as usize)?;

        if let Some(width) = MetaType::try_from(meta_type)
            .ok()
            .and_then(|t| t.fixed_len())
        {
            if width != data.len() {
                let found = data.len();
                trace!(
                    self,
                    "meta event {meta_type:#04x} at {start} should carry {width} bytes, found {found}"
                );
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Meta event {:#04x} at {} carries {} bytes instead of {}",
                    meta_type,
                    start,
                    found,
                    width
                );
            }
        }

        Ok(TrackEventKind::Meta(MetaEvent::from_parts(meta_type, data)))
    }

    fn read_sysex_event(&mut self, kind: SysExKind) -> ReadResult<TrackEventKind> {
        let len = self.read_quantity()?;
        let data = self.read_slice(len.value() as usize)?;
        Ok(TrackEventKind::SysEx(SysExEvent::from_decoded(kind, data)))
    }

    fn read_channel_event(&mut self, status: u8) -> ReadResult<TrackEventKind> {
        let Some(len) = ChannelEvent::data_len(status) else {
            let [value] = self.read_exact_size()?;
            return Ok(TrackEventKind::ContinuousController {
                control: status,
                value,
            });
        };
        let at = self.position;
        let data = self.read_slice(len)?;
        ChannelEvent::from_parts(status, data)
            .map(TrackEventKind::Channel)
            .ok_or(ReaderError::oob(at))
    }

    fn expect_tag(&mut self, expected: [u8; 4]) -> ReadResult<()> {
        let at = self.position;
        let found = self.read_exact_size()?;
        if found != expected {
            return Err(ReaderError::new(
                at,
                ReaderErrorKind::InvalidChunkTag { expected, found },
            ));
        }
        Ok(())
    }

    fn read_quantity(&mut self) -> ReadResult<Quantity> {
        let (quantity, consumed) = Quantity::decode(self.data, self.position)
            .map_err(|kind| ReaderError::new(self.position, kind))?;
        self.position += consumed;
        Ok(quantity)
    }

    fn peek_byte(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(ReaderError::oob(self.position))
    }

    fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let bytes = self.read_slice(N)?;
        let mut out = [0; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_slice(&mut self, len: usize) -> ReadResult<&'a [u8]> {
        let data = self.data;
        let start = self.position;
        let slice = start
            .checked_add(len)
            .and_then(|end| data.get(start..end))
            .ok_or(ReaderError::oob(start))?;
        self.position += len;
        Ok(slice)
    }
}
