//! Definitions of time in the stepchart format.
//!
//! A stepchart places everything on rows, a fixed-point subdivision of beats. [`ROWS_PER_BEAT`] is the
//! smallest integer exactly divisible by 2, 3 and 4, so 8th, 12th and 16th notes land on integer rows.

/// The number of rows in one beat.
pub const ROWS_PER_BEAT: i64 = 48;

/// The number of beats in one measure of the note grid.
pub const BEATS_PER_MEASURE: i64 = 4;

/// The number of rows in one measure of the note grid.
pub const ROWS_PER_MEASURE: i64 = ROWS_PER_BEAT * BEATS_PER_MEASURE;

/// A row index on the chart timeline, [`ROWS_PER_BEAT`] rows per beat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowIndex(pub i64);

impl RowIndex {
    /// The first row of the chart.
    pub const ZERO: Self = Self(0);

    /// Returns the beat this row lies on, as a fraction of beats.
    #[must_use]
    pub fn as_beat(self) -> f64 {
        self.0 as f64 / ROWS_PER_BEAT as f64
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// Converts a time-like offset into a row index: `round(offset * ROWS_PER_BEAT)`.
///
/// Halves round to the nearest even row, so `4.5` rows becomes row 4 and `1.5` rows becomes row 2.
/// Segment offsets in `BPMS`/`STOPS` are fed to this conversion as written, without consulting the
/// governing tempo, so an offset in seconds only maps onto the right beat at 60 BPM.
#[must_use]
pub fn convert_offset_to_row(offset: f64) -> RowIndex {
    RowIndex((offset * ROWS_PER_BEAT as f64).round_ties_even() as i64)
}
