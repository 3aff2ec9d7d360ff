pub mod chunk;

use crate::{
    error::FileError,
    file::{FormatType, MidiFile, TimeDivision, Track},
};
use alloc::vec::Vec;

/// A builder used to create a new [`MidiFile`].
///
/// Unlike [`MidiFile::new`], [`build`](Self::build) checks that the tracks
/// make sense for the format.
#[derive(Debug, Default, Clone)]
pub struct MidiFileBuilder {
    format_type: Option<FormatType>,
    time_division: Option<TimeDivision>,
    tracks: Vec<Track>,
}

impl MidiFileBuilder {
    /// Set the format. Without one, a single track builds a format 0 file and
    /// several build a format 1 file.
    pub fn format_type(mut self, format_type: FormatType) -> Self {
        self.format_type = Some(format_type);
        self
    }

    /// Set the time division. Required.
    pub fn time_division(mut self, time_division: TimeDivision) -> Self {
        self.time_division = Some(time_division);
        self
    }

    /// Append a track.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Append several tracks.
    pub fn tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Attempts to finish the midifile from the provided parts.
    pub fn build(self) -> Result<MidiFile, FileError> {
        let Some(time_division) = self.time_division else {
            return Err(FileError::NoTimeDivision);
        };
        if self.tracks.is_empty() {
            return Err(FileError::NoTracks);
        }
        let format_type = match self.format_type {
            Some(format_type) => format_type,
            None if self.tracks.len() == 1 => FormatType::SingleMultiChannel,
            None => FormatType::Simultaneous,
        };
        if format_type == FormatType::SingleMultiChannel && self.tracks.len() != 1 {
            return Err(FileError::MultipleTracksForSingleMultiChannel(
                self.tracks.len(),
            ));
        }

        Ok(MidiFile::new(format_type, time_division, self.tracks)?)
    }
}
