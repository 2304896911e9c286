//! Handlers of the scalar song fields.

use std::{path::PathBuf, str::FromStr};

use crate::sm::{
    command::{DisplayBpm, SongVisibility},
    lex::tag::SongTag,
};

use super::{ParseContext, ParseWarning};

/// Returns the first value, or records [`ParseWarning::MissingValue`].
fn first_value<'t>(tag: &'t SongTag, ctx: &mut ParseContext<'_>) -> Option<&'t str> {
    let value = tag.first_value();
    if value.is_none() {
        ctx.warn(ParseWarning::MissingValue(tag.marker.clone()));
    }
    value
}

fn parse_number<T: FromStr>(tag: &SongTag, value: &str, ctx: &mut ParseContext<'_>) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        ctx.warn(ParseWarning::InvalidNumber {
            marker: tag.marker.clone(),
            value: value.to_string(),
        });
    }
    parsed
}

pub(super) fn assign_text(field: &mut String, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    if let Some(value) = first_value(tag, ctx) {
        value.clone_into(field);
    }
}

pub(super) fn assign_path(field: &mut PathBuf, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    if let Some(value) = first_value(tag, ctx) {
        *field = PathBuf::from(value);
    }
}

pub(super) fn assign_float(field: &mut f64, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    if let Some(parsed) = first_value(tag, ctx).and_then(|value| parse_number(tag, value, ctx)) {
        *field = parsed;
    }
}

pub(super) fn assign_flag(field: &mut bool, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    if let Some(parsed) =
        first_value(tag, ctx).and_then(|value| parse_number::<i64>(tag, value, ctx))
    {
        *field = parsed != 0;
    }
}

/// Sums `H:M:S` components into seconds. Missing leading components are zero.
fn parse_time(components: &[String]) -> Option<f64> {
    let (hours, minutes, seconds) = match components {
        [s] => ("0", "0", s.as_str()),
        [m, s] => ("0", m.as_str(), s.as_str()),
        [h, m, s] => (h.as_str(), m.as_str(), s.as_str()),
        _ => return None,
    };
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    Some(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Assigns an `H:M:S` time. The tokenizer splits the literal at `:`, so each value is one component.
pub(super) fn assign_time(field: &mut f64, tag: &SongTag, ctx: &mut ParseContext<'_>) {
    match parse_time(&tag.values) {
        Some(seconds) => *field = seconds,
        None => {
            *field = 0.0;
            ctx.warn(ParseWarning::InvalidTime {
                marker: tag.marker.clone(),
                value: tag.values.join(":"),
            });
        }
    }
}

pub(super) fn assign_visibility(
    field: &mut SongVisibility,
    tag: &SongTag,
    ctx: &mut ParseContext<'_>,
) {
    let Some(literal) = first_value(tag, ctx) else {
        return;
    };
    match SongVisibility::from_literal(literal) {
        Some(visibility) => *field = visibility,
        None => ctx.warn(ParseWarning::UnknownVisibility(literal.to_string())),
    }
}

pub(super) fn assign_display_bpm(
    field: &mut DisplayBpm,
    tag: &SongTag,
    ctx: &mut ParseContext<'_>,
) {
    let Some(first) = first_value(tag, ctx) else {
        return;
    };
    if first == "*" {
        *field = DisplayBpm::Random;
        return;
    }
    let Some(min) = parse_number::<f64>(tag, first, ctx) else {
        return;
    };
    let max = match tag.values.get(1) {
        Some(second) => match parse_number::<f64>(tag, second, ctx) {
            Some(max) => max,
            None => return,
        },
        None => min,
    };
    *field = DisplayBpm::Specified { min, max };
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

    fn context() -> ParseContext<'static> {
        ParseContext::new(StepsTypeRegistry::builtin())
    }

    fn warnings(ctx: ParseContext<'_>) -> Vec<ParseWarning> {
        ctx.warnings.into_iter().map(|w| w.into_content()).collect()
    }

    #[test]
    fn text_takes_the_first_value() {
        let mut ctx = context();
        let mut title = String::new();
        assign_text(&mut title, &tag("TITLE", &["Re", "Born"]), &mut ctx);
        assert_eq!(title, "Re");
        assign_text(&mut title, &tag("TITLE", &[]), &mut ctx);
        assert_eq!(title, "Re");
        assert_eq!(warnings(ctx), vec![ParseWarning::MissingValue("TITLE".into())]);
    }

    #[test]
    fn float_keeps_previous_value_on_failure() {
        let mut ctx = context();
        let mut length = 0.0;
        assign_float(&mut length, &tag("MUSICLENGTH", &["95.25"]), &mut ctx);
        assign_float(&mut length, &tag("MUSICLENGTH", &["ninety"]), &mut ctx);
        assert!((length - 95.25).abs() < f64::EPSILON);
        assert_eq!(
            warnings(ctx),
            vec![ParseWarning::InvalidNumber {
                marker: "MUSICLENGTH".into(),
                value: "ninety".into(),
            }]
        );
    }

    #[test]
    fn flag_is_nonzero_integer() {
        let mut ctx = context();
        let mut flag = false;
        assign_flag(&mut flag, &tag("HASMUSIC", &["2"]), &mut ctx);
        assert!(flag);
        assign_flag(&mut flag, &tag("HASMUSIC", &["0"]), &mut ctx);
        assert!(!flag);
        assign_flag(&mut flag, &tag("HASMUSIC", &["yes"]), &mut ctx);
        assert!(!flag);
        assert_eq!(warnings(ctx).len(), 1);
    }

    #[test]
    fn time_pads_missing_components() {
        let mut ctx = context();
        let mut seconds = 0.0;
        assign_time(&mut seconds, &tag("SAMPLESTART", &["1", "02.5"]), &mut ctx);
        assert!((seconds - 62.5).abs() < f64::EPSILON);
        assign_time(&mut seconds, &tag("SAMPLESTART", &["2.5"]), &mut ctx);
        assert!((seconds - 2.5).abs() < f64::EPSILON);
        assign_time(&mut seconds, &tag("SAMPLESTART", &["1", "0", "0.5"]), &mut ctx);
        assert!((seconds - 3600.5).abs() < f64::EPSILON);
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn bad_time_component_zeroes_the_field() {
        let mut ctx = context();
        let mut seconds = 12.0;
        assign_time(&mut seconds, &tag("SAMPLELENGTH", &["x", "10"]), &mut ctx);
        assert!(seconds.abs() < f64::EPSILON);
        assert_eq!(
            warnings(ctx),
            vec![ParseWarning::InvalidTime {
                marker: "SAMPLELENGTH".into(),
                value: "x:10".into(),
            }]
        );
    }

    #[test]
    fn visibility_keeps_default_on_unknown_literal() {
        let mut ctx = context();
        let mut visibility = SongVisibility::default();
        assign_visibility(&mut visibility, &tag("SELECTABLE", &["maybe"]), &mut ctx);
        assert_eq!(visibility, SongVisibility::Visible);
        assign_visibility(&mut visibility, &tag("SELECTABLE", &["ROULETTE"]), &mut ctx);
        assert_eq!(visibility, SongVisibility::RouletteOnly);
        assert_eq!(
            warnings(ctx),
            vec![ParseWarning::UnknownVisibility("maybe".into())]
        );
    }

    #[test]
    fn display_bpm_policies() {
        let mut ctx = context();
        let mut policy = DisplayBpm::default();
        assign_display_bpm(&mut policy, &tag("DISPLAYBPM", &["*"]), &mut ctx);
        assert_eq!(policy, DisplayBpm::Random);

        assign_display_bpm(&mut policy, &tag("DISPLAYBPM", &["150"]), &mut ctx);
        assert_eq!(policy, DisplayBpm::Specified { min: 150.0, max: 150.0 });

        assign_display_bpm(&mut policy, &tag("DISPLAYBPM", &["90", "180"]), &mut ctx);
        assert_eq!(policy, DisplayBpm::Specified { min: 90.0, max: 180.0 });
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn display_bpm_failure_leaves_policy_unset() {
        let mut ctx = context();
        let mut policy = DisplayBpm::default();
        assign_display_bpm(&mut policy, &tag("DISPLAYBPM", &["fast"]), &mut ctx);
        assign_display_bpm(&mut policy, &tag("DISPLAYBPM", &["90", "fast"]), &mut ctx);
        assert_eq!(policy, DisplayBpm::Unspecified);
        assert_eq!(warnings(ctx).len(), 2);
    }
}
