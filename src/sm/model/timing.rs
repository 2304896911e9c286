//! Definitions of the tempo/stop timeline.

use crate::sm::command::time::RowIndex;

/// A tempo change taking effect at a row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongBpmSegment {
    /// The row where the tempo takes effect.
    pub start_row: RowIndex,
    /// The tempo in beats per minute.
    pub beats_per_minute: f64,
}

/// A full playback halt of a fixed real-time duration starting at a row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongStopSegment {
    /// The row where playback halts.
    pub start_row: RowIndex,
    /// How long playback halts, in seconds.
    pub stop_seconds: f64,
}

/// The tempo/stop timeline of a song.
///
/// Segments are kept in file order, not sorted. Use [`SongTimingInfo::sorted_bpm_segments`] and
/// [`SongTimingInfo::sorted_stop_segments`] for chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongTimingInfo {
    /// The tempo changes in file order.
    pub bpm_segments: Vec<SongBpmSegment>,
    /// The stops in file order.
    pub stop_segments: Vec<SongStopSegment>,
    /// The offset of the first beat in seconds, from `OFFSET`.
    pub first_beat_offset_seconds: f64,
}

impl SongTimingInfo {
    /// Returns the tempo changes sorted by their start row. Ties keep file order.
    #[must_use]
    pub fn sorted_bpm_segments(&self) -> Vec<SongBpmSegment> {
        let mut sorted = self.bpm_segments.clone();
        sorted.sort_by_key(|segment| segment.start_row);
        sorted
    }

    /// Returns the stops sorted by their start row. Ties keep file order.
    #[must_use]
    pub fn sorted_stop_segments(&self) -> Vec<SongStopSegment> {
        let mut sorted = self.stop_segments.clone();
        sorted.sort_by_key(|segment| segment.start_row);
        sorted
    }
}
