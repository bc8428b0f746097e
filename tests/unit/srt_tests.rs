/*!
 * Tests for SRT conversion, parsing and timing refinement
 */

use subtidy::{
    compose, convert, convert_with_config, refine, srt, to_notation_lines, AdjustmentKind,
    ConvertConfig, RefineConfig, Severity,
};

use crate::common;

/// Test conversion of a clean response into a golden SRT document
#[test]
fn test_convert_withCleanResponse_shouldRenderExpectedDocument() {
    let conversion = convert(common::clean_notation_text()).unwrap();

    assert!(conversion.diagnostics.is_empty());
    assert_eq!(
        conversion.document,
        "1\n00:00:06,100 --> 00:00:12,700\nHello there.\n\n\
         2\n00:00:12,700 --> 00:00:15,000\nGeneral Kenobi.\n\n\
         3\n00:00:16,000 --> 00:00:19,400\nYou are a bold one.\n\n"
    );
}

/// Test conversion of a messy response: survivors in, problems reported
#[test]
fn test_convert_withMessyResponse_shouldKeepOnlySurvivors() {
    common::init_logging();
    let conversion = convert(common::messy_notation_text()).unwrap();

    assert_eq!(conversion.entries.len(), 2);
    assert_eq!(conversion.entries[0].content, "First line. {unsure}");
    assert_eq!(conversion.entries[1].content, "Last good line.");
    // indices are sequential regardless of what was dropped in between
    assert_eq!(conversion.entries[0].index, 1);
    assert_eq!(conversion.entries[1].index, 2);
    assert!(conversion
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error));
}

/// Test that a parseable in-range line always lands in the output once
#[test]
fn test_convert_withValidLines_shouldEmitEachExactlyOnce() {
    let conversion = convert(common::clean_notation_text()).unwrap();
    let texts: Vec<&str> = conversion
        .entries
        .iter()
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(
        texts,
        vec!["Hello there.", "General Kenobi.", "You are a bold one."]
    );
}

/// Test the composed document parses back to the same entries
#[test]
fn test_compose_thenParse_shouldRoundTrip() {
    let entries = vec![
        common::create_entry(1, 6_100, 12_700, "Hello there."),
        common::create_entry(2, 12_700, 15_000, "General Kenobi."),
    ];
    let parsed = srt::parse(&compose(&entries)).unwrap();
    assert_eq!(parsed, entries);
}

/// Test the full repair loop shape: convert, refine, back to notation
#[test]
fn test_convert_refine_toNotation_shouldProduceReviewableLines() {
    let text = "[0:01,0 - 0:02,0] A\n[0:02,2 - 0:03,0] B";
    let conversion = convert(text).unwrap();
    let refined = refine(&conversion.entries);

    // the 200ms gap was narrowed to 100ms
    assert_eq!(refined.entries[0].end_ms, 2_100);
    assert_eq!(
        to_notation_lines(&refined.entries),
        "[00:01,0 - 00:02,1] A\n[00:02,2 - 00:03,0] B"
    );
}

/// Test refinement of the classic small-overlap sequence
#[test]
fn test_refine_withSmallOverlap_shouldShrinkEarlierEnd() {
    let entries = vec![
        common::create_entry(1, 0, 5_000, "A"),
        common::create_entry(2, 4_800, 6_000, "B"),
    ];

    let result = refine(&entries);

    // A's end pulls back to B's start minus 50ms
    assert_eq!(result.entries[0].end_ms, 4_750);
    assert_eq!(result.entries[1].start_ms, 4_800);
    assert_eq!(result.changes.len(), 1);
    assert_eq!(
        result.changes[0].kind,
        AdjustmentKind::OverlapResolved { overlap_ms: 200 }
    );
    assert!(result.changes[0].to_string().contains("overlap of 200ms"));
}

/// Test custom conversion thresholds flowing through the whole call
#[test]
fn test_convert_withCustomThresholds_shouldUseThem() {
    let config = ConvertConfig {
        min_duration_ms: 500,
        overlap_tolerance_ms: 0,
        overlap_nudge_ms: 10,
        ..ConvertConfig::default()
    };
    // 40ms overlap would pass the default 50ms tolerance, not this one
    let text = "[0:05,0 - 0:07,0] A\n[0:06,96 - 0:09,0] B";
    let valid_text = "[0:05,0 - 0:07,0] A\n[0:06,9 - 0:09,0] B";

    let conversion = convert_with_config(valid_text, &config).unwrap();
    assert_eq!(conversion.entries[1].start_ms, 7_010);
    // and the 2-digit-tenths variant cannot parse at all
    assert_eq!(convert_with_config(text, &config).unwrap().entries.len(), 1);
}

/// Test refinement thresholds flowing through a custom config
#[test]
fn test_refine_withCustomMinGap_shouldLeaveThatGap() {
    let config = RefineConfig {
        min_gap_ms: 250,
        ..RefineConfig::default()
    };
    let entries = vec![
        common::create_entry(1, 1_000, 2_000, "First"),
        common::create_entry(2, 2_400, 3_400, "Second"),
    ];

    let result = subtidy::srt::refine_with_config(&entries, &config);

    assert_eq!(result.entries[0].end_ms, 2_150);
}
