mod common;

use common::*;
use pretty_assertions::assert_eq;
use smfcodec::prelude::*;

fn kinds(track: &Track) -> Vec<&TrackEventKind> {
    track.iter().map(TrackEvent::kind).collect()
}

#[test]
fn header_without_tracks() {
    let bytes = header(1, 0, 0x0060);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(file.format_type(), FormatType::Simultaneous);
    assert_eq!(file.time_division().ticks_per_quarter_note(), Some(96));
    assert_eq!(file.tracks().len(), 0);
}

#[test]
fn single_track_song() {
    let body = [
        0x00, 0xFF, 0x03, 0x04, b'l', b'e', b'a', b'd', // track name
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // tempo
        0x00, 0xFF, 0x58, 0x04, 0x04, 0x02, 0x18, 0x08, // 4/4
        0x00, 0xFF, 0x59, 0x02, 0xFD, 0x01, // 3 flats, minor
        0x00, 0xC0, 0x05, // program change
        0x00, 0x90, 0x3C, 0x64, // note on
        0x60, 0x3C, 0x00, // running status note on, velocity 0
        0x00, 0xE0, 0x00, 0x40, // pitch bend centre
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = file(0, 0x0060, &[&body]);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(file.format_type(), FormatType::SingleMultiChannel);
    let track = &file.tracks()[0];
    assert_eq!(track.len(), 9);
    assert_eq!(
        kinds(track)[1..].to_vec(),
        [
            &TrackEventKind::Meta(MetaEvent::SetTempo(Tempo::new(500_000).unwrap())),
            &TrackEventKind::Meta(MetaEvent::TimeSignature(TimeSignature {
                numerator: 4,
                denominator: 2,
                metronome_pulse: 24,
                thirty_seconds_per_quarter: 8,
            })),
            &TrackEventKind::Meta(MetaEvent::KeySignature(KeySignature { key: -3, scale: 1 })),
            &TrackEventKind::Channel(ChannelEvent::ProgramChange {
                channel: 0,
                program: 5
            }),
            &TrackEventKind::Channel(ChannelEvent::NoteOn {
                channel: 0,
                note: 60,
                velocity: 100
            }),
            &TrackEventKind::Channel(ChannelEvent::NoteOn {
                channel: 0,
                note: 60,
                velocity: 0
            }),
            &TrackEventKind::Channel(ChannelEvent::PitchBend {
                channel: 0,
                value: 0x2000
            }),
            &TrackEventKind::Meta(MetaEvent::EndOfTrack),
        ]
    );
    assert_eq!(track.events()[6].delta_time().ticks(), 0x60);

    let TrackEventKind::Meta(MetaEvent::SequenceOrTrackName(name)) = kinds(track)[0] else {
        panic!("first event should be the track name");
    };
    assert_eq!(name.as_str(), Some("lead"));
}

#[test]
fn smpte_division_and_offset() {
    let mut body = vec![0x00, 0xFF, 0x54, 0x05];
    body.extend(SmpteOffset::new(SmpteFps::TwentyFive, 1, 2, 3, 4, 5).to_bytes());
    body.extend(END_OF_TRACK);
    let division = TimeDivision::from_smpte(SmpteFps::TwentyFive, 40);
    let bytes = file(0, division.raw(), &[&body]);

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.time_division().smpte(), Some((SmpteFps::TwentyFive, 40)));
    assert_eq!(file.time_division().ticks_per_quarter_note(), None);

    let TrackEventKind::Meta(MetaEvent::SmpteOffset(offset)) = file.tracks()[0].events()[0].kind()
    else {
        panic!("expected an SMPTE offset");
    };
    assert_eq!(offset.fps(), SmpteFps::TwentyFive);
    assert_eq!(offset.hours(), 1);
    assert_eq!(offset.validate(), Ok(()));
}

#[test]
fn wrong_width_meta_is_kept_verbatim() {
    let body = [
        0x00, 0xFF, 0x51, 0x02, 0x01, 0x02, // tempo with two bytes
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = file(0, 96, &[&body]);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(
        file.tracks()[0].events()[0].kind(),
        &TrackEventKind::Meta(MetaEvent::unknown(0x51, vec![0x01, 0x02]).unwrap())
    );
    assert_eq!(file.to_bytes().unwrap(), bytes);
}

#[test]
fn unknown_meta_type() {
    let body = [0x00, 0xFF, 0x60, 0x01, 0xAA, 0x00, 0xFF, 0x2F, 0x00];
    let file = MidiFile::parse(&file(0, 96, &[&body])).unwrap();
    let event = &file.tracks()[0].events()[0];
    let TrackEventKind::Meta(meta) = event.kind() else {
        panic!("expected a meta event");
    };
    assert_eq!(meta.meta_type(), None);
    assert_eq!(meta.type_byte(), 0x60);
}

#[test]
fn sysex_events() {
    let body = [
        0x00, 0xF0, 0x03, 0x43, 0x12, 0x00, // first packet
        0x10, 0xF7, 0x02, 0x07, 0xF7, // continuation
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let file = MidiFile::parse(&file(0, 96, &[&body])).unwrap();
    let track = &file.tracks()[0];
    assert_eq!(
        kinds(track)[..2].to_vec(),
        [
            &TrackEventKind::SysEx(SysExEvent::new(SysExKind::Whole, vec![0x43, 0x12, 0x00]).unwrap()),
            &TrackEventKind::SysEx(SysExEvent::new(SysExKind::Continuation, vec![0x07, 0xF7]).unwrap()),
        ]
    );
}

#[test]
fn chunk_length_decides_next_chunk() {
    let mut first = END_OF_TRACK.to_vec();
    first.extend([0xAA, 0xBB]); // padding inside the chunk
    let mut bytes = header(1, 2, 96);
    bytes.extend(track_chunk(&first));
    bytes.extend(track_chunk(&END_OF_TRACK));

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks().len(), 2);
    assert_eq!(file.tracks()[0].len(), 1);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = file(0, 96, &[&END_OF_TRACK]);
    bytes.extend(b"junk");
    let mut reader = Reader::from_byte_slice(&bytes);
    let file = reader.read_file().unwrap();
    assert_eq!(file.tracks().len(), 1);
    assert_eq!(reader.buffer_position(), bytes.len() - 4);
}

#[test]
fn running_status_reset_between_tracks() {
    let first = [0x00, 0x90, 0x3C, 0x40, 0x00, 0xFF, 0x2F, 0x00];
    let second = [0x00, 0x3E, 0x40, 0x00, 0xFF, 0x2F, 0x00];
    let bytes = file(1, 96, &[&first, &second]);

    let reset = MidiFile::parse(&bytes).unwrap();
    assert_eq!(
        reset.tracks()[1].events()[0].kind(),
        &TrackEventKind::ContinuousController {
            control: 0x3E,
            value: 0x40
        }
    );
}

#[test]
fn running_status_carried_between_tracks() {
    // The first track leaves 0xFF behind from its end of track.
    let first = [0x00, 0x90, 0x3C, 0x40, 0x00, 0xFF, 0x2F, 0x00];
    let second = [0x00, 0x2F, 0x00];
    let bytes = file(1, 96, &[&first, &second]);

    let carried = Reader::from_byte_slice(&bytes)
        .with_options(ParseOptions::default().running_status(RunningStatus::CarryAcrossTracks))
        .read_file()
        .unwrap();
    assert_eq!(carried.tracks()[1].events(), [TrackEvent::end_of_track(DeltaTime::ZERO)]);

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MissingEndOfTrack);
}

#[test]
fn invalid_header_tag() {
    let mut bytes = header(0, 0, 96);
    bytes[..4].copy_from_slice(b"RIFF");
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::InvalidChunkTag {
            expected: *b"MThd",
            found: *b"RIFF"
        }
    );
    assert_eq!(err.position(), 0);
}

#[test]
fn invalid_track_tag() {
    let mut bytes = file(0, 96, &[&END_OF_TRACK]);
    bytes[14..18].copy_from_slice(b"XFIH");
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::InvalidChunkTag { found, .. } if found == b"XFIH"
    ));
    assert_eq!(err.position(), 14);
}

#[test]
fn invalid_header_fields() {
    let mut bytes = header(0, 0, 96);
    bytes[7] = 8;
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidHeaderSize(8));
    assert_eq!(err.position(), 4);

    let err = MidiFile::parse(&header(4, 0, 96)).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidFormatType(4));
    assert_eq!(err.position(), 8);

    let file = MidiFile::parse(&header(3, 0, 96)).unwrap();
    assert_eq!(file.format_type(), FormatType::Reserved);
    assert!(!file.format_type().is_legal());
}

#[test]
fn truncated_inputs() {
    let bytes = file(0, 96, &[&END_OF_TRACK]);
    for len in [0, 3, 10, 13, 17, 20, 23, 25] {
        let err = MidiFile::parse(&bytes[..len]).unwrap_err();
        assert!(err.is_out_of_bounds(), "length {len}: {err}");
    }
}

#[test]
fn missing_tracks_are_truncation() {
    let bytes = header(1, 2, 96);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 14);
}

#[test]
fn unterminated_track() {
    let body = [0x00, 0x90, 0x3C, 0x40];
    let err = MidiFile::parse(&file(0, 96, &[&body])).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MissingEndOfTrack);
    assert_eq!(err.position(), 26);
}
