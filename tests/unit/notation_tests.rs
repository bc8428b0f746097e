/*!
 * Tests for notation parsing, analysis and normalization
 */

use subtidy::{analyze, normalize, parse_line, Category, Severity, Timecode};

use crate::common;

/// Test parsing the full grammar surface in one pass
#[test]
fn test_parse_line_withGrammarVariants_shouldAcceptAll() {
    // canonical, unpadded, comma separator, extra interior spacing
    let variants = [
        "[00:06,1 - 00:12,7] text",
        "[0:06,1 - 0:12,7] text",
        "[0,06,1 - 0,12,7] text",
        "[ 0:06,1 -  0:12,7 ]   text",
    ];

    for line in variants {
        let segment = parse_line(line, 1).unwrap();
        assert_eq!(segment.start.as_millis(), 6_100, "start of {:?}", line);
        assert_eq!(segment.end.as_millis(), 12_700, "end of {:?}", line);
        assert_eq!(segment.text, "text", "text of {:?}", line);
    }
}

/// Test the timecode values a parsed segment carries
#[test]
fn test_parse_line_withValidLine_shouldMatchManualTimecodes() {
    let segment = parse_line("[12:34,5 - 13:00,0] midway", 9).unwrap();
    assert_eq!(segment.start, Timecode::new(12, 34, 5));
    assert_eq!(segment.end, Timecode::new(13, 0, 0));
}

/// Test analysis of a messy response end to end
#[test]
fn test_analyze_withMessyResponse_shouldClassifyEveryProblem() {
    common::init_logging();
    let diagnostics = analyze(common::messy_notation_text());

    // chatter, inverted range, malformed block, duplicate (plus its
    // overlap against the first line), nothing for the last good line
    assert_eq!(diagnostics.len(), 5);

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    assert_eq!(errors, 3);
    assert_eq!(warnings, 2);

    assert!(diagnostics
        .iter()
        .any(|d| d.category == Category::Duplicate && d.message.contains("identical to L2")));
}

/// Test that analysis reports and rendering agree on line numbers
#[test]
fn test_analyze_withBlankLines_shouldKeepAbsoluteLineNumbers() {
    let text = "\n\n[0:10,0 - 0:08,0] bad\n";
    let diagnostics = analyze(text);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 3);
    assert_eq!(
        diagnostics[0].to_string(),
        format!("L3: LOGIC ERROR - {}", diagnostics[0].message)
    );
}

/// Test normalization across a clean response
#[test]
fn test_normalize_withCleanResponse_shouldOnlyPadTimecodes() {
    let result = normalize(common::clean_notation_text());
    assert_eq!(result.lines.len(), 3);
    assert_eq!(result.lines[0], "[00:06,1 - 00:12,7] Hello there.");
    assert!(result
        .log
        .iter()
        .all(|entry| entry.severity == Severity::Info));
}

/// Test the normalize-twice fixpoint over a messy response
#[test]
fn test_normalize_withMessyResponse_shouldReachFixpointInOnePass() {
    let first = normalize(common::messy_notation_text());
    let second = normalize(&first.text());

    assert_eq!(second.lines, first.lines);
    assert!(second
        .log
        .iter()
        .all(|entry| entry.severity != Severity::Info));
    // what stays broken keeps being reported on both passes
    let first_errors = first
        .log
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .count();
    let second_errors = second
        .log
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .count();
    assert_eq!(first_errors, second_errors);
}

/// Test that normalization never changes the number of lines
#[test]
fn test_normalize_withAnyResponse_shouldPreserveLineCount() {
    for text in [
        common::clean_notation_text().to_string(),
        common::messy_notation_text().to_string(),
        "\n\n\n".to_string(),
        "single prose line".to_string(),
    ] {
        let result = normalize(&text);
        assert_eq!(result.lines.len(), text.lines().count(), "for {:?}", text);
    }
}
