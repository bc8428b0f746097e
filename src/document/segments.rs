/*!
 * Numbered segment-list round trip for translation prompts.
 *
 * Extracted slots travel to a model as `[Segment N]: text` lines and come
 * back the same way, so the response can be split into exactly the slots
 * that were sent. Parsing tolerates chatter before the first marker (it is
 * counted, not kept) and multi-line segment bodies, but the caller decides
 * what to do when the recovered count does not match what was sent.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// A `[Segment N]:` marker at the start of a line.
static SEGMENT_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[Segment (\d+)\]:").expect("Invalid segment marker regex"));

/// Renders slots as a numbered segment list, 1-based, one marker per slot.
pub fn render_segment_list(segments: &[String]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, text)| format!("[Segment {}]: {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of splitting a model response back into segments.
#[derive(Debug, Clone)]
pub struct SegmentListOutcome {
    /// Recovered segment bodies, in response order.
    pub segments: Vec<String>,
    /// How many segments the caller sent out.
    pub expected: usize,
    /// Non-blank lines that belonged to no segment (chatter before the
    /// first marker).
    pub unmarked: usize,
}

impl SegmentListOutcome {
    /// Whether the response yielded exactly the expected number of segments.
    pub fn is_complete(&self) -> bool {
        self.segments.len() == self.expected
    }

    /// Number of segments actually recovered.
    pub fn found(&self) -> usize {
        self.segments.len()
    }
}

/// Splits a model response into marker-delimited segments.
///
/// Each `[Segment N]:` line starts a segment; following lines belong to it
/// until the next marker. Non-blank lines before the first marker are
/// dropped but counted as unmarked, blank lines are dropped silently, and
/// marker numbering is not trusted for ordering; segments come back in
/// encounter order. The caller compares `found()` against `expected` before
/// using the result.
pub fn parse_segment_list(response: &str, expected: usize) -> SegmentListOutcome {
    let mut segments: Vec<String> = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    let mut unmarked = 0usize;

    for raw in response.trim().lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(marker) = SEGMENT_MARKER_REGEX.find(line) {
            if let Some(body) = current.take() {
                segments.push(body.join("\n").trim().to_string());
            }
            current = Some(vec![line[marker.end()..].trim()]);
        } else if let Some(body) = current.as_mut() {
            body.push(line);
        } else {
            unmarked += 1;
        }
    }
    if let Some(body) = current.take() {
        segments.push(body.join("\n").trim().to_string());
    }

    if unmarked > 0 {
        warn!(
            "segment list parse: {} unmarked line(s) before the first marker were dropped",
            unmarked
        );
    }
    if segments.len() == expected {
        debug!("segment list parse: recovered all {} segment(s)", expected);
    } else {
        warn!(
            "segment list parse: expected {} segment(s), recovered {}",
            expected,
            segments.len()
        );
    }

    SegmentListOutcome {
        segments,
        expected,
        unmarked,
    }
}
