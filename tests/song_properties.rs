//! Whole-file behaviors of the parser.

use pretty_assertions::assert_eq;
use stepchart_rs::sm::{
    SmError, SmOutput, SmWarning,
    command::{
        DisplayBpm, StepsDifficulty,
        steps_type::{StepsType, StepsTypeRegistry},
        time::{RowIndex, convert_offset_to_row},
    },
    lex::{LexWarning, tag::SongTag},
    parse::{ParseContext, ParseWarning, steps::parse_steps},
    parse_sm,
};

const RADAR: &str = "0.5,0.5,0.5,0.5,0.5,10,1,1,1,1,1";

fn chart(steps_type: &str, difficulty: &str, radar: &str, row: &str) -> String {
    format!("#NOTES:{steps_type}:desc:{difficulty}:4:{radar}:\n{row}\n{row}\n:;\n")
}

#[test]
fn test_duplicate_title_keeps_first() {
    let SmOutput { song, warnings } = parse_sm("#TITLE:A;#TITLE:B;").unwrap();
    assert_eq!(song.title, "A");
    assert_eq!(warnings.len(), 1);
    let SmWarning::Lex(warning) = &warnings[0] else {
        panic!("duplicates are reported by the tokenizer");
    };
    assert_eq!(
        warning.content(),
        &LexWarning::DuplicateTag {
            marker: "TITLE".into()
        }
    );
}

#[test]
fn test_identical_charts_are_all_kept() {
    let one = chart("dance-single", "Easy", RADAR, "1000");
    let source = format!("{one}{one}");
    let SmOutput { song, warnings } = parse_sm(&source).unwrap();
    assert_eq!(song.steps.len(), 2);
    assert_eq!(song.steps[0], song.steps[1]);
    assert!(warnings.is_empty());
}

#[test]
fn test_short_chart_is_dropped_and_parsing_continues() {
    let source = "#NOTES:dance-single:desc:Easy:4:0000;\n#ARTIST:Later;\n#BPMS:0=150;";
    let SmOutput { song, warnings } = parse_sm(source).unwrap();
    assert!(song.steps.is_empty());
    assert_eq!(song.artist, "Later");
    assert_eq!(song.timing.bpm_segments.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        SmWarning::Parse(warning)
            if matches!(warning.content(), ParseWarning::TooFewChartValues { found: 5, required: 7 })
    ));
}

#[test]
fn test_radar_value_count_must_be_eleven() {
    for radar in ["1,2,3,4,5,6,7,8,9,10", "1,2,3,4,5,6,7,8,9,10,11,12"] {
        let source = chart("pump-double", "Hard", radar, "1000000001");
        let SmOutput { song, warnings } = parse_sm(&source).unwrap();
        let steps = &song.steps[0];
        assert_eq!(steps.radar_values, None);
        assert_eq!(steps.meter, 4);
        assert_eq!(steps.steps_type, StepsType::PumpDouble);
        assert_eq!(steps.difficulty, StepsDifficulty::Hard);
        assert_eq!(warnings.len(), 1);
    }
}

#[test]
fn test_sample_times() {
    let song = parse_sm("#SAMPLESTART:1:02.5;\n#SAMPLELENGTH:2.5;")
        .unwrap()
        .into_strict()
        .unwrap();
    assert!((song.sample_start_seconds - 62.5).abs() < 1e-9);
    assert!((song.sample_length_seconds - 2.5).abs() < 1e-9);
}

#[test]
fn test_step_type_aliases() {
    let registry = StepsTypeRegistry::builtin();
    let para = registry.resolve("para").unwrap();
    let para_single = registry.resolve("para-single").unwrap();
    assert_eq!(para, para_single);
    assert_eq!(para.track_count, 5);
    assert_eq!(
        registry.resolve("EZ2-Single-Hard"),
        registry.resolve("ez2-single")
    );

    let source = format!(
        "{}{}",
        chart("para", "Easy", RADAR, "10000"),
        chart("ez2-single-hard", "Easy", RADAR, "00001")
    );
    let song = parse_sm(&source).unwrap().into_strict().unwrap();
    assert_eq!(song.steps[0].steps_type, StepsType::ParaSingle);
    assert_eq!(song.steps[1].steps_type, StepsType::Ez2Single);
}

#[test]
fn test_notes2_charts_are_kept_in_order() {
    let source = format!(
        "{}#NOTES2:pump-single:desc:Hard:6:{RADAR}:\n10000\n00001\n:;\n",
        chart("dance-single", "Easy", RADAR, "1000")
    );
    let song = parse_sm(&source).unwrap().into_strict().unwrap();
    assert_eq!(song.steps.len(), 2);
    assert_eq!(song.steps[0].steps_type, StepsType::DanceSingle);
    let notes2 = &song.steps[1];
    assert_eq!(notes2.steps_type, StepsType::PumpSingle);
    assert_eq!(notes2.difficulty, StepsDifficulty::Hard);
    assert_eq!(notes2.meter, 6);
    assert_eq!(notes2.note_data.track_count, 5);
    assert_eq!(notes2.note_data.notes().count(), 2);
}

#[test]
fn test_offset_without_value() {
    let SmOutput { song, warnings } = parse_sm("#OFFSET;\n#TITLE:A;").unwrap();
    assert_eq!(song.title, "A");
    assert!(song.timing.first_beat_offset_seconds.abs() < f64::EPSILON);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        SmWarning::Parse(warning)
            if warning.content() == &ParseWarning::MissingValue("OFFSET".into())
    ));
}

#[test]
fn test_segment_rows_round_half_to_even() {
    let song = parse_sm("#BPMS:0.09375=120,0.03125=140;")
        .unwrap()
        .into_strict()
        .unwrap();
    let rows: Vec<_> = song
        .timing
        .bpm_segments
        .iter()
        .map(|segment| segment.start_row)
        .collect();
    assert_eq!(rows, vec![RowIndex(4), RowIndex(2)]);
}

#[test]
fn test_display_bpm_random() {
    let song = parse_sm("#DISPLAYBPM:*;").unwrap().into_strict().unwrap();
    assert_eq!(song.display_bpm, DisplayBpm::Random);
}

#[test]
fn test_segments_survive_malformed_siblings() {
    let SmOutput { song, warnings } =
        parse_sm("#BPMS:0=120,1=,2=140,=3,x=1,4=160;").unwrap();
    let bpms: Vec<_> = song
        .timing
        .bpm_segments
        .iter()
        .map(|segment| (segment.start_row, segment.beats_per_minute))
        .collect();
    assert_eq!(
        bpms,
        vec![
            (RowIndex(0), 120.0),
            (RowIndex(96), 140.0),
            (RowIndex(192), 160.0),
        ]
    );
    assert_eq!(warnings.len(), 3);
}

#[test]
fn test_offset_to_row_is_monotonic() {
    assert_eq!(convert_offset_to_row(0.0), RowIndex(0));
    let mut previous = RowIndex(0);
    for step in 0..2000 {
        let row = convert_offset_to_row(f64::from(step) * 0.0037);
        assert!(row >= previous, "{row} < {previous} at step {step}");
        previous = row;
    }
}

#[test]
fn test_unknown_tags_do_not_abort() {
    let SmOutput { song, warnings } =
        parse_sm("#TITLE:Known;\n#EDITABLE:1;\n#KEYSOUNDS:a.wav;\n#ARTIST:Still;").unwrap();
    assert_eq!(song.title, "Known");
    assert_eq!(song.artist, "Still");
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_sm("   \n"), Err(SmError::EmptyInput));
}

#[test]
fn test_strict_rejects_warnings() {
    let result = parse_sm("#OFFSET:soon;").unwrap().into_strict();
    assert!(matches!(result, Err(SmError::Strict(warnings)) if warnings.len() == 1));
}

#[test]
fn test_handlers_run_outside_a_full_parse() {
    let tag = SongTag::from_raw(
        "notes",
        ["dance-single", "", "Expert", "x", RADAR, "1000", ""]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    let mut ctx = ParseContext::new(StepsTypeRegistry::builtin());
    ctx.set_span(3..17);
    let steps = parse_steps(&tag, &mut ctx).unwrap();
    assert_eq!(steps.difficulty, StepsDifficulty::Challenge);
    assert_eq!(steps.meter, 0);

    let warnings = ctx.into_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].range(), 3..17);
    assert!(matches!(warnings[0].content(), ParseWarning::InvalidMeter(_)));
}
