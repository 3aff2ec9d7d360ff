/// What the reader does with the running status when a new track chunk starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunningStatus {
    /// Each track starts with no running status. A track whose first event
    /// omits its status byte is read as a continuous controller event.
    #[default]
    ResetPerTrack,
    /// The status of the last event of a track is still in effect at the
    /// start of the next one.
    CarryAcrossTracks,
}

/// Knobs for a [`Reader`](super::Reader).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Running status handling at track boundaries
    pub running_status: RunningStatus,
}

impl ParseOptions {
    /// Set the running status handling.
    pub const fn running_status(mut self, running_status: RunningStatus) -> Self {
        self.running_status = running_status;
        self
    }
}
