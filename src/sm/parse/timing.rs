//! Parsing `OFFSET`, `BPMS` and `STOPS`/`FREEZE` into the song timeline.
//!
//! `BPMS` and `STOPS` hold comma-separated `offset=value` pairs. A pair that cannot be read is skipped
//! alone, so its siblings keep their results and their order.

use crate::sm::{
    command::time::{RowIndex, convert_offset_to_row},
    lex::tag::SongTag,
    model::timing::{SongBpmSegment, SongStopSegment, SongTimingInfo},
};

use super::{ParseContext, ParseWarning};

/// Sets the first beat offset. A missing or invalid value sets `0.0`.
pub fn parse_offset(timing: &mut SongTimingInfo, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    let parsed = match tag.first_value() {
        Some(value) => value.parse().ok().or_else(|| {
            ctx.warn(ParseWarning::InvalidNumber {
                marker: tag.marker.clone(),
                value: value.to_string(),
            });
            None
        }),
        None => {
            ctx.warn(ParseWarning::MissingValue(tag.marker.clone()));
            None
        }
    };
    timing.first_beat_offset_seconds = parsed.unwrap_or(0.0);
}

/// Appends the tempo changes of a `BPMS` tag.
pub fn parse_bpms(timing: &mut SongTimingInfo, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    timing.bpm_segments.extend(
        parse_pairs(tag, ctx).into_iter().map(|(start_row, beats_per_minute)| SongBpmSegment {
            start_row,
            beats_per_minute,
        }),
    );
}

/// Appends the stops of a `STOPS` or `FREEZE` tag.
pub fn parse_stops(timing: &mut SongTimingInfo, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    timing.stop_segments.extend(
        parse_pairs(tag, ctx).into_iter().map(|(start_row, stop_seconds)| SongStopSegment {
            start_row,
            stop_seconds,
        }),
    );
}

/// Reads the well-formed pairs of the first value in list order.
fn parse_pairs(tag: &SongTag, ctx: &mut ParseContext<'_>) -> Vec<(RowIndex, f64)> {
    let Some(list) = tag.first_value() else {
        ctx.warn(ParseWarning::MissingValue(tag.marker.clone()));
        return Vec::new();
    };
    list.split(',')
        .map(str::trim)
        .filter(|expression| !expression.is_empty())
        .filter_map(|expression| parse_pair(&tag.marker, expression, ctx))
        .collect()
}

fn parse_pair(marker: &str, expression: &str, ctx: &mut ParseContext<'_>) -> Option<(RowIndex, f64)> {
    let Some((offset, value)) = expression
        .split_once('=')
        .map(|(offset, value)| (offset.trim(), value.trim()))
        .filter(|(offset, value)| !offset.is_empty() && !value.is_empty())
    else {
        ctx.warn(ParseWarning::MalformedSegment {
            marker: marker.to_string(),
            expression: expression.to_string(),
        });
        return None;
    };
    let Ok(offset_value) = offset.parse::<f64>() else {
        ctx.warn(ParseWarning::InvalidSegmentOffset {
            marker: marker.to_string(),
            value: offset.to_string(),
        });
        return None;
    };
    let Ok(magnitude) = value.parse::<f64>() else {
        ctx.warn(ParseWarning::InvalidSegmentValue {
            marker: marker.to_string(),
            value: value.to_string(),
        });
        return None;
    };
    Some((convert_offset_to_row(offset_value), magnitude))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sm::command::steps_type::StepsTypeRegistry;

    fn tag(marker: &str, values: &[&str]) -> SongTag {
        SongTag {
            marker: marker.into(),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn offset_defaults_to_zero_on_failure() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let mut timing = SongTimingInfo::default();
        parse_offset(&mut timing, &tag("OFFSET", &["-0.125"]), &mut ctx);
        assert!((timing.first_beat_offset_seconds + 0.125).abs() < f64::EPSILON);
        parse_offset(&mut timing, &tag("OFFSET", &["soon"]), &mut ctx);
        assert!(timing.first_beat_offset_seconds.abs() < f64::EPSILON);
        assert_eq!(ctx.warnings.len(), 1);
    }

    #[test]
    fn offset_without_value_is_reset_to_zero() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let mut timing = SongTimingInfo {
            first_beat_offset_seconds: 1.5,
            ..SongTimingInfo::default()
        };
        parse_offset(&mut timing, &tag("OFFSET", &[]), &mut ctx);
        assert!(timing.first_beat_offset_seconds.abs() < f64::EPSILON);
        let warnings: Vec<_> = ctx.into_warnings().into_iter().map(|w| w.into_content()).collect();
        assert_eq!(warnings, vec![ParseWarning::MissingValue("OFFSET".into())]);
    }

    #[test]
    fn bpms_keep_file_order() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let mut timing = SongTimingInfo::default();
        parse_bpms(&mut timing, &tag("BPMS", &["4=180,0=120,\n2=90"]), &mut ctx);
        assert_eq!(
            timing.bpm_segments,
            vec![
                SongBpmSegment {
                    start_row: RowIndex(192),
                    beats_per_minute: 180.0,
                },
                SongBpmSegment {
                    start_row: RowIndex(0),
                    beats_per_minute: 120.0,
                },
                SongBpmSegment {
                    start_row: RowIndex(96),
                    beats_per_minute: 90.0,
                },
            ]
        );
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn malformed_pairs_are_skipped_alone() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let mut timing = SongTimingInfo::default();
        parse_stops(
            &mut timing,
            &tag("STOPS", &["1=0.5,=2,3,x=1,5=long,6=0.25"]),
            &mut ctx,
        );
        assert_eq!(
            timing.stop_segments,
            vec![
                SongStopSegment {
                    start_row: RowIndex(48),
                    stop_seconds: 0.5,
                },
                SongStopSegment {
                    start_row: RowIndex(288),
                    stop_seconds: 0.25,
                },
            ]
        );
        let warnings: Vec<_> = ctx.warnings.into_iter().map(|w| w.into_content()).collect();
        assert_eq!(
            warnings,
            vec![
                ParseWarning::MalformedSegment {
                    marker: "STOPS".into(),
                    expression: "=2".into(),
                },
                ParseWarning::MalformedSegment {
                    marker: "STOPS".into(),
                    expression: "3".into(),
                },
                ParseWarning::InvalidSegmentOffset {
                    marker: "STOPS".into(),
                    value: "x".into(),
                },
                ParseWarning::InvalidSegmentValue {
                    marker: "STOPS".into(),
                    value: "long".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_list_is_a_missing_value() {
        let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
        let mut timing = SongTimingInfo::default();
        parse_bpms(&mut timing, &tag("BPMS", &[]), &mut ctx);
        assert!(timing.bpm_segments.is_empty());
        assert_eq!(
            ctx.warnings[0].content(),
            &ParseWarning::MissingValue("BPMS".into())
        );
    }
}
