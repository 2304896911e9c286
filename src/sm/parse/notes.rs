//! Parsing the note grid of a chart.
//!
//! Measures are separated by `,` and rows by line breaks. Each row holds one symbol per track.

use crate::sm::model::notes::{Measure, NoteRow, NoteSymbol, StepsNoteData};

use super::{ParseContext, ParseWarning};

/// Parses a note grid whose rows should be `track_count` symbols wide.
///
/// Unknown symbols are read as [`NoteSymbol::Empty`]. When `track_count` is nonzero, narrower rows are
/// padded with empty symbols and wider rows are truncated. A trailing empty measure, as left by a final
/// `,`, is dropped.
pub fn parse_note_grid(text: &str, track_count: usize, ctx: &mut ParseContext<'_>) -> StepsNoteData {
    let mut measures: Vec<Measure> = text
        .split(',')
        .enumerate()
        .map(|(measure_idx, measure)| parse_measure(measure_idx, measure, track_count, ctx))
        .collect();
    if measures.last().is_some_and(|measure| measure.rows.is_empty()) {
        measures.pop();
    }
    StepsNoteData {
        track_count,
        measures,
    }
}

fn parse_measure(
    measure_idx: usize,
    text: &str,
    track_count: usize,
    ctx: &mut ParseContext<'_>,
) -> Measure {
    let rows = text
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row_idx, line)| parse_row(measure_idx, row_idx, &line, track_count, ctx))
        .collect();
    Measure { rows }
}

fn parse_row(
    measure_idx: usize,
    row_idx: usize,
    line: &str,
    track_count: usize,
    ctx: &mut ParseContext<'_>,
) -> NoteRow {
    let mut symbols: Vec<NoteSymbol> = line
        .chars()
        .map(|c| {
            NoteSymbol::from_char(c).unwrap_or_else(|| {
                ctx.warn(ParseWarning::UnknownNoteSymbol(c));
                NoteSymbol::Empty
            })
        })
        .collect();
    if track_count != 0 && symbols.len() != track_count {
        ctx.warn(ParseWarning::NoteRowWidth {
            measure: measure_idx,
            row: row_idx,
            expected: track_count,
            found: symbols.len(),
        });
        symbols.resize(track_count, NoteSymbol::Empty);
    }
    NoteRow(symbols)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sm::command::{steps_type::StepsTypeRegistry, time::RowIndex};

    fn warnings(ctx: ParseContext<'_>) -> Vec<ParseWarning> {
        ctx.warnings.into_iter().map(|w| w.into_content()).collect()
    }

    #[test]
    fn measures_and_rows() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let data = parse_note_grid(
            "\n1000\n0000\n0100\n0000\n,\n0010\n0001\n,\n",
            4,
            &mut ctx,
        );
        assert_eq!(data.measures.len(), 2);
        assert_eq!(data.measures[0].rows.len(), 4);
        assert_eq!(data.measures[1].rows.len(), 2);
        let rows: Vec<_> = data.notes().map(|note| note.row).collect();
        assert_eq!(
            rows,
            vec![RowIndex(0), RowIndex(96), RowIndex(192), RowIndex(288)]
        );
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn empty_grid_has_no_measures() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        assert!(parse_note_grid("", 4, &mut ctx).measures.is_empty());
        assert!(parse_note_grid(" \n ", 4, &mut ctx).measures.is_empty());
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn rows_are_fitted_to_track_count() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let data = parse_note_grid("10\n000011\n", 4, &mut ctx);
        assert_eq!(data.measures[0].rows[0].to_string(), "1000");
        assert_eq!(data.measures[0].rows[1].to_string(), "0000");
        assert_eq!(
            warnings(ctx),
            vec![
                ParseWarning::NoteRowWidth {
                    measure: 0,
                    row: 0,
                    expected: 4,
                    found: 2,
                },
                ParseWarning::NoteRowWidth {
                    measure: 0,
                    row: 1,
                    expected: 4,
                    found: 6,
                },
            ]
        );
    }

    #[test]
    fn unknown_symbols_read_as_empty() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let data = parse_note_grid("1?0M", 4, &mut ctx);
        assert_eq!(data.measures[0].rows[0].to_string(), "100M");
        assert_eq!(warnings(ctx), vec![ParseWarning::UnknownNoteSymbol('?')]);
    }

    #[test]
    fn zero_track_count_keeps_row_widths() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let data = parse_note_grid("10\n0000", 0, &mut ctx);
        assert_eq!(data.measures[0].rows[0].0.len(), 2);
        assert_eq!(data.measures[0].rows[1].0.len(), 4);
        assert!(ctx.warnings.is_empty());
    }
}
