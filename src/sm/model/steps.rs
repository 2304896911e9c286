//! Definitions of a chart and its radar statistics.

use crate::sm::command::{StepsDifficulty, steps_type::StepsType};

use super::notes::StepsNoteData;

/// The statistics summarizing a chart, in the order they are written in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepsRadarValues {
    /// The density of stream patterns.
    pub stream: f64,
    /// The density of fast patterns.
    pub voltage: f64,
    /// The density of jumps.
    pub air: f64,
    /// The density of holds and rolls.
    pub freeze: f64,
    /// The density of tricky rhythms.
    pub chaos: f64,
    /// The number of taps and holds.
    pub taps_and_holds: u32,
    /// The number of jumps.
    pub jumps: u32,
    /// The number of holds.
    pub holds: u32,
    /// The number of mines.
    pub mines: u32,
    /// The number of hands.
    pub hands: u32,
    /// The number of rolls.
    pub rolls: u32,
}

impl StepsRadarValues {
    /// The number of scalars a radar value list must have.
    pub const FIELD_COUNT: usize = 11;
}

/// One playable chart of a song, for one step type and difficulty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Steps {
    /// The game-mode layout.
    pub steps_type: StepsType,
    /// The difficulty tier.
    pub difficulty: StepsDifficulty,
    /// The free-text description, often the chart author.
    pub description: String,
    /// The numeric rating.
    pub meter: i32,
    /// The radar statistics, absent if the list was malformed.
    pub radar_values: Option<StepsRadarValues>,
    /// The note grid.
    pub note_data: StepsNoteData,
}
