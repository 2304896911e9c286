//! Definitions of the note grid of a chart.
//!
//! A grid is a list of measures. Each measure spans [`BEATS_PER_MEASURE`](crate::sm::command::time::BEATS_PER_MEASURE) beats and holds any number of
//! rows spread evenly across it, and each row holds one [`NoteSymbol`] per track.

use crate::sm::command::time::{ROWS_PER_MEASURE, RowIndex};

/// A symbol on one track of a note row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteSymbol {
    /// `0`, nothing.
    #[default]
    Empty,
    /// `1`, a tap.
    Tap,
    /// `2`, the head of a hold.
    HoldHead,
    /// `3`, the tail of a hold or a roll.
    Tail,
    /// `4`, the head of a roll.
    RollHead,
    /// `M`, a mine.
    Mine,
    /// `L`, a lift.
    Lift,
    /// `F`, a fake note which is never judged.
    Fake,
    /// `K`, a keysound without a note.
    Keysound,
}

impl NoteSymbol {
    /// Parses a grid character, case-insensitively for letters.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '0' => Self::Empty,
            '1' => Self::Tap,
            '2' => Self::HoldHead,
            '3' => Self::Tail,
            '4' => Self::RollHead,
            'M' | 'm' => Self::Mine,
            'L' | 'l' => Self::Lift,
            'F' | 'f' => Self::Fake,
            'K' | 'k' => Self::Keysound,
            _ => return None,
        })
    }

    /// Returns the grid character of this symbol.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Tap => '1',
            Self::HoldHead => '2',
            Self::Tail => '3',
            Self::RollHead => '4',
            Self::Mine => 'M',
            Self::Lift => 'L',
            Self::Fake => 'F',
            Self::Keysound => 'K',
        }
    }

    /// Returns whether this symbol is [`NoteSymbol::Empty`].
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One row of a measure, one symbol per track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteRow(pub Vec<NoteSymbol>);

impl std::fmt::Display for NoteRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .try_for_each(|symbol| write!(f, "{}", symbol.to_char()))
    }
}

/// One measure of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    /// The rows spread evenly across the measure.
    pub rows: Vec<NoteRow>,
}

/// A non-empty symbol placed on the chart timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedNote {
    /// The absolute row of the note.
    pub row: RowIndex,
    /// The track, 0-based from the left.
    pub track: usize,
    /// The symbol.
    pub symbol: NoteSymbol,
}

/// The note grid of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepsNoteData {
    /// The number of tracks of each row.
    pub track_count: usize,
    /// The measures in order.
    pub measures: Vec<Measure>,
}

impl StepsNoteData {
    /// Returns the absolute row of the `row`-th row in the `measure`-th measure of `rows_in_measure` rows.
    ///
    /// Rows are spread evenly across the measure and rounded to the nearest row index.
    #[must_use]
    pub const fn row_index_at(measure: usize, row: usize, rows_in_measure: usize) -> RowIndex {
        let measure_start = measure as i64 * ROWS_PER_MEASURE;
        if rows_in_measure == 0 {
            return RowIndex(measure_start);
        }
        let n = rows_in_measure as i64;
        let in_measure = (row as i64 * ROWS_PER_MEASURE * 2 + n) / (n * 2);
        RowIndex(measure_start + in_measure)
    }

    /// Iterates every non-empty symbol with its absolute row, in grid order.
    pub fn notes(&self) -> impl Iterator<Item = PlacedNote> + '_ {
        self.measures
            .iter()
            .enumerate()
            .flat_map(|(measure_idx, measure)| {
                let rows_in_measure = measure.rows.len();
                measure
                    .rows
                    .iter()
                    .enumerate()
                    .flat_map(move |(row_idx, row)| {
                        let row_index = Self::row_index_at(measure_idx, row_idx, rows_in_measure);
                        row.0
                            .iter()
                            .enumerate()
                            .filter(|(_, symbol)| !symbol.is_empty())
                            .map(move |(track, &symbol)| PlacedNote {
                                row: row_index,
                                track,
                                symbol,
                            })
                    })
            })
    }

    /// Returns the number of rows over all measures.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.measures.iter().map(|measure| measure.rows.len()).sum()
    }
}
