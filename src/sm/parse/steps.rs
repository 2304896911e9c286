//! Parsing a `NOTES` tag into a [`Steps`].
//!
//! The tag values are positional: step type, description, difficulty, meter, radar values, note grid.
//! A seventh value is required but carries nothing for the chart.

use itertools::Itertools;

use crate::{
    sm::{
        command::{StepsDifficulty, steps_type::StepsType},
        lex::tag::SongTag,
        model::steps::{Steps, StepsRadarValues},
    },
    util::parse_count,
};

use super::{ParseContext, ParseWarning, notes::parse_note_grid};

/// The least number of values a chart tag must have to produce a chart.
pub const MIN_CHART_VALUE_COUNT: usize = 7;

/// Parses a chart tag, or returns `None` if it has too few values.
pub fn parse_steps(tag: &SongTag, ctx: &mut ParseContext<'_>) -> Option<Steps> {
    let [steps_type, description, difficulty, meter, radar, notes, _, ..] = tag.values.as_slice()
    else {
        ctx.warn(ParseWarning::TooFewChartValues {
            found: tag.values.len(),
            required: MIN_CHART_VALUE_COUNT,
        });
        return None;
    };

    let (steps_type, track_count) = resolve_steps_type(steps_type, ctx);
    let difficulty = resolve_difficulty(difficulty, description, ctx);
    let meter = meter.parse().unwrap_or_else(|_| {
        ctx.warn(ParseWarning::InvalidMeter(meter.clone()));
        0
    });
    let radar_values = parse_radar_values(radar, ctx);
    let note_data = parse_note_grid(notes, track_count, ctx);
    log::trace!(
        "parsed chart {steps_type:?} {difficulty:?} with {} rows",
        note_data.row_count()
    );

    Some(Steps {
        steps_type,
        difficulty,
        description: description.clone(),
        meter,
        radar_values,
        note_data,
    })
}

fn resolve_steps_type(name: &str, ctx: &mut ParseContext<'_>) -> (StepsType, usize) {
    let registry = ctx.registry();
    if let Some(entry) = registry.resolve(name) {
        return (entry.steps_type, entry.track_count);
    }
    ctx.warn(ParseWarning::UnknownStepsType(name.to_string()));
    registry.fallback().map_or((StepsType::default(), 0), |entry| {
        (entry.steps_type, entry.track_count)
    })
}

fn resolve_difficulty(
    label: &str,
    description: &str,
    ctx: &mut ParseContext<'_>,
) -> StepsDifficulty {
    let difficulty = StepsDifficulty::from_label(label).unwrap_or_else(|| {
        ctx.warn(ParseWarning::UnknownDifficulty(label.to_string()));
        StepsDifficulty::Easy
    });
    if StepsDifficulty::description_forces_challenge(description) {
        StepsDifficulty::Challenge
    } else {
        difficulty
    }
}

/// Parses the comma-separated radar scalars. Anything but exactly
/// [`StepsRadarValues::FIELD_COUNT`] numbers yields `None`.
fn parse_radar_values(list: &str, ctx: &mut ParseContext<'_>) -> Option<StepsRadarValues> {
    let scalars = list.split(',').map(str::trim).collect_vec();
    let &[stream, voltage, air, freeze, chaos, taps_and_holds, jumps, holds, mines, hands, rolls] =
        scalars.as_slice()
    else {
        ctx.warn(ParseWarning::RadarValueCount {
            expected: StepsRadarValues::FIELD_COUNT,
            found: scalars.len(),
        });
        return None;
    };

    let mut invalid = None;
    let mut ratio = |value: &str| {
        value.parse::<f64>().unwrap_or_else(|_| {
            invalid.get_or_insert_with(|| value.to_string());
            0.0
        })
    };
    let ratios = [
        ratio(stream),
        ratio(voltage),
        ratio(air),
        ratio(freeze),
        ratio(chaos),
    ];
    let mut count = |value: &str| {
        parse_count(value).unwrap_or_else(|| {
            invalid.get_or_insert_with(|| value.to_string());
            0
        })
    };
    let counts = [
        count(taps_and_holds),
        count(jumps),
        count(holds),
        count(mines),
        count(hands),
        count(rolls),
    ];
    if let Some(value) = invalid {
        ctx.warn(ParseWarning::InvalidRadarValue(value));
        return None;
    }

    let [stream, voltage, air, freeze, chaos] = ratios;
    let [taps_and_holds, jumps, holds, mines, hands, rolls] = counts;
    Some(StepsRadarValues {
        stream,
        voltage,
        air,
        freeze,
        chaos,
        taps_and_holds,
        jumps,
        holds,
        mines,
        hands,
        rolls,
    })
}
