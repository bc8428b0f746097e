/*!
 * End-to-end tests over the whole timing pipeline
 */

use rand::Rng;

use subtidy::{
    analyze, convert, extract, parse_line, refine, srt, ConvertError, Severity, SrtEntry,
    SubtitleEvent, Timecode,
};

use crate::common;

/// A transcript line parses cleanly and converts without diagnostics
#[test]
fn test_pipeline_withWellFormedLine_shouldPassUntouched() {
    let line = "[0:06,1 - 0:12,7] Hello there";

    let segment = parse_line(line, 1).unwrap();
    assert_eq!(segment.start.as_millis(), 6_100);
    assert_eq!(segment.end.as_millis(), 12_700);
    assert_eq!(segment.text, "Hello there");

    assert!(analyze(line).is_empty());
}

/// An inverted range is reported by analysis and dropped by conversion
#[test]
fn test_pipeline_withInvertedRange_shouldReportAndDrop() {
    let bad = "[0:10,0 - 0:08,0] Bad";
    let diagnostics = analyze(bad);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(diagnostics[0].message.contains("not strictly before"));

    let text = format!("{}\n[0:11,0 - 0:13,0] Good", bad);
    let conversion = convert(&text).unwrap();
    assert_eq!(conversion.entries.len(), 1);
    assert_eq!(conversion.entries[0].content, "Good");
}

/// A small overlap survives conversion and is resolved by refinement
#[test]
fn test_pipeline_withOverlappingPair_shouldResolveInRefinement() {
    let entries = vec![
        common::create_entry(1, 0, 5_000, "A"),
        common::create_entry(2, 4_800, 6_000, "B"),
    ];

    let refined = refine(&entries);

    assert_eq!(refined.entries[0].end_ms, 4_750);
    assert_eq!(refined.changes.len(), 1);
    assert!(refined.changes[0].to_string().contains("resolved"));
}

/// Second-to-minute carry and tenth rounding in one rendering
#[test]
fn test_pipeline_withCarryingMillis_shouldRenderRoundedTimecode() {
    assert_eq!(Timecode::from_millis(65_260).to_string(), "01:05,3");
}

/// Drawing and styling-only events map to their placeholders
#[test]
fn test_pipeline_withNonTextEvents_shouldYieldPlaceholders() {
    let events = vec![
        SubtitleEvent::drawing(1_000, 2_000, "m 0 0 l 50 0 50 50"),
        SubtitleEvent::dialogue(2_000, 3_000, r"{\blur2\pos(640,360)}"),
    ];
    assert_eq!(extract(&events), vec!["(shape)", "(empty)"]);
}

/// A whole messy response makes it to reviewable notation and back
#[test]
fn test_pipeline_withMessyResponse_shouldSurviveFullLoop() {
    common::init_logging();
    let conversion = convert(common::messy_notation_text()).unwrap();
    let refined = refine(&conversion.entries);
    let notation = srt::to_notation_lines(&refined.entries);

    // the re-rendered notation is clean to the analyzer
    assert!(analyze(&notation).is_empty());

    // and converts again without losing anything
    let second = convert(&notation).unwrap();
    assert_eq!(second.entries.len(), refined.entries.len());
}

/// Conversion with nothing to keep fails loudly, with the evidence attached
#[test]
fn test_pipeline_withHopelessResponse_shouldFailWithDiagnostics() {
    let err = convert("I could not transcribe this audio, sorry!").unwrap_err();
    let ConvertError::NoUsableEntries { diagnostics } = err;
    assert!(!diagnostics.is_empty());
}

/// Timecode parse/format fixpoint over random millisecond values
#[test]
fn test_property_timecodeRoundTrip_withRandomMillis_shouldBeFixpoint() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let ms = rng.random_range(0..36_000_000u64);
        let rendered = Timecode::from_millis(ms).to_string();

        let (minutes, rest) = rendered.split_once(':').unwrap();
        let (seconds, tenths) = rest.split_once(',').unwrap();
        let reparsed = Timecode::parse(minutes, seconds, tenths).unwrap();

        assert_eq!(reparsed.to_string(), rendered, "for {}ms", ms);
    }
}

/// The refiner never produces an inverted entry and never moves starts
#[test]
fn test_property_refine_withRandomDocuments_shouldKeepInvariants() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let mut entries: Vec<SrtEntry> = Vec::new();
        let mut cursor = 0u64;
        for i in 0..rng.random_range(1..12usize) {
            let start = cursor + rng.random_range(0..2_000u64);
            let duration = rng.random_range(150..4_000u64);
            // half the time, let the next entry bite into this one
            let overshoot = if rng.random_range(0..2u32) == 0 {
                rng.random_range(0..duration)
            } else {
                0
            };
            entries.push(common::create_entry(i + 1, start, start + duration, "x"));
            cursor = start + duration - overshoot;
        }

        let refined = refine(&entries);

        assert_eq!(refined.entries.len(), entries.len());
        for (before, after) in entries.iter().zip(refined.entries.iter()) {
            assert_eq!(before.start_ms, after.start_ms);
            assert!(after.end_ms > after.start_ms, "inverted entry produced");
        }
    }
}
