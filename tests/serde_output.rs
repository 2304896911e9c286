//! The parse output survives a JSON round trip when the `serde` feature is enabled.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use stepchart_rs::sm::{SmOutput, parse_sm};

#[test]
fn test_output_json_round_trip() {
    let source = include_str!("files/legacy_freeze.sm");
    let output = parse_sm(source).unwrap();
    assert!(!output.warnings.is_empty());

    let json = serde_json::to_string(&output).unwrap();
    let restored: SmOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, output);
}

#[test]
fn test_json_shape() {
    let output = parse_sm("#TITLE:Shape;\n#SELECTABLE:NO;\n#BPMS:1=150;").unwrap();
    let value = serde_json::to_value(&output.song).unwrap();
    assert_eq!(value["title"], "Shape");
    assert_eq!(value["visibility"], "Hidden");
    assert_eq!(value["timing"]["bpm_segments"][0]["start_row"], 48);
    assert_eq!(value["display_bpm"], "Unspecified");
}
