/*!
 * Single-line grammar for the AI timestamp notation.
 *
 * A well-formed line reads `[MM:SS,t - MM:SS,t] text {note}` where the
 * trailing braced note is optional and the minute/second separator tolerates
 * `:` or `,`, since models drift between the two. Lines that do not match
 * are classified by how close to the grammar they look, so callers can tell
 * a malformed timestamp from ordinary prose.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::diagnostics::{preview, Category, Diagnostic};
use crate::timecode::Timecode;

/// Full-line grammar. Capture groups: start minutes/seconds/tenths, end
/// minutes/seconds/tenths, text, optional note body.
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*\[\s*(\d+)(?::|,)(\d{1,2}),(\d)\s*-\s*(\d+)(?::|,)(\d{1,2}),(\d)\s*\]\s*(.*?)(?:\s*\{([^}]+)\})?\s*$",
    )
    .expect("Invalid notation line regex")
});

/// Loose search for a well-formed timestamp block anywhere in a line, used
/// to tell "block present but line malformed" from "no block at all".
static TIMESTAMP_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*\d+(?::|,)\d{1,2},\d\s*-\s*\d+(?::|,)\d{1,2},\d\s*\]")
        .expect("Invalid timestamp block regex")
});

/// One parsed notation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Start timecode.
    pub start: Timecode,
    /// End timecode.
    pub end: Timecode,
    /// Subtitle text with surrounding whitespace removed; may be empty.
    pub text: String,
    /// Trailing `{note}` body, absent when empty after trimming.
    pub note: Option<String>,
}

impl std::fmt::Display for Segment {
    /// Canonical notation rendering: padded timecodes, single spaces, the
    /// note re-wrapped in braces when present.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)?;
        if !self.text.is_empty() {
            write!(f, " {}", self.text)?;
        }
        if let Some(note) = &self.note {
            write!(f, " {{{}}}", note)?;
        }
        Ok(())
    }
}

/// Parses one notation line.
///
/// On failure the returned diagnostic carries `line_no` and classifies the
/// mismatch: a line with a recognizable timestamp block (or with `:`/`,`/`-`
/// all present) is a format error, anything else a warning, and a matching
/// line with an out-of-range component a parse error.
pub fn parse_line(line: &str, line_no: usize) -> Result<Segment, Diagnostic> {
    let trimmed = line.trim();
    let Some(caps) = LINE_REGEX.captures(trimmed) else {
        return Err(classify_mismatch(trimmed, line_no));
    };

    let start = timecode_from_captures(&caps, 1, "start", line_no)?;
    let end = timecode_from_captures(&caps, 4, "end", line_no)?;
    let text = caps
        .get(7)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let note = caps
        .get(8)
        .map(|m| m.as_str().trim().to_string())
        .filter(|n| !n.is_empty());

    Ok(Segment {
        start,
        end,
        text,
        note,
    })
}

/// Builds a timecode from three consecutive capture groups starting at
/// `base`. The regex guarantees digit shapes, so the only realistic
/// rejections are seconds above 59 and absurdly long minute runs.
fn timecode_from_captures(
    caps: &Captures<'_>,
    base: usize,
    which: &str,
    line_no: usize,
) -> Result<Timecode, Diagnostic> {
    let minutes = caps.get(base).map_or("", |m| m.as_str());
    let seconds = caps.get(base + 1).map_or("", |m| m.as_str());
    let tenths = caps.get(base + 2).map_or("", |m| m.as_str());
    Timecode::parse(minutes, seconds, tenths).map_err(|e| {
        Diagnostic::error(
            line_no,
            Category::Parse,
            format!("could not parse {} time: {}", which, e),
        )
    })
}

fn classify_mismatch(trimmed: &str, line_no: usize) -> Diagnostic {
    if TIMESTAMP_BLOCK_REGEX.is_match(trimmed) {
        Diagnostic::error(
            line_no,
            Category::Format,
            format!(
                "timestamp block present but the line does not follow '[m:s,x - m:s,x] text'. Original: '{}'",
                preview(trimmed, 80)
            ),
        )
    } else if trimmed.contains(':') && trimmed.contains(',') && trimmed.contains('-') {
        Diagnostic::error(
            line_no,
            Category::Format,
            format!(
                "line has time-like elements but not the '[m<sep>s,x - m<sep>s,x] text' pattern. Original: '{}'",
                preview(trimmed, 80)
            ),
        )
    } else {
        Diagnostic::warning(
            line_no,
            Category::Format,
            format!(
                "line does not appear to contain a timestamp block. Content: '{}'",
                preview(trimmed, 80)
            ),
        )
    }
}
