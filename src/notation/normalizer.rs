/*!
 * Line-preserving normalization of notation text.
 *
 * Re-renders every parseable line in canonical form (zero-padded timecodes,
 * `:` separator, single spacing, notes re-wrapped) while leaving everything
 * else untouched, so output lines stay 1:1 with input lines. Problems that
 * normalization cannot fix are logged, never fixed by dropping content.
 */

use log::debug;

use crate::diagnostics::{preview, Category, Diagnostic};
use crate::notation::parser::parse_line;

/// Result of normalizing a notation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// One output line per input line, in order.
    pub lines: Vec<String>,
    /// What was rewritten, what could not be parsed, what stays broken.
    pub log: Vec<Diagnostic>,
}

impl Normalized {
    /// The normalized text, lines rejoined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Normalizes notation text line by line.
///
/// Parseable lines are re-rendered canonically, with an INFO entry when the
/// rewrite changed anything and a LOGIC error when the range still runs
/// backwards. Unparseable lines pass through trimmed but otherwise
/// unchanged with an error log entry, prose included. Commentary lines
/// (`#`, `//`) and blanks pass through silently. Output line count always
/// equals input count.
pub fn normalize(text: &str) -> Normalized {
    let mut lines = Vec::new();
    let mut log = Vec::new();
    let mut rewritten = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with("//") {
            lines.push(trimmed.to_string());
            continue;
        }

        match parse_line(trimmed, line_no) {
            Ok(segment) => {
                let rebuilt = segment.to_string();
                if rebuilt != trimmed {
                    rewritten += 1;
                    log.push(Diagnostic::info(
                        line_no,
                        Category::Format,
                        format!(
                            "auto-normalized timestamp notation: '{}' -> '[{} - {}]'",
                            visual_block(trimmed),
                            segment.start,
                            segment.end
                        ),
                    ));
                }
                if segment.start.as_millis() >= segment.end.as_millis() {
                    log.push(Diagnostic::error(
                        line_no,
                        Category::Logic,
                        format!(
                            "start >= end survives normalization. Line: '{}'",
                            preview(&rebuilt, 80)
                        ),
                    ));
                }
                lines.push(rebuilt);
            }
            Err(diag) => {
                // the line is kept as-is; the log always gets an error,
                // even when the parser classified bare prose as a warning
                log.push(Diagnostic::error(line_no, diag.category, diag.message));
                lines.push(trimmed.to_string());
            }
        }
    }

    debug!(
        "normalization rewrote {} of {} line(s), {} log entr(ies)",
        rewritten,
        lines.len(),
        log.len()
    );
    Normalized { lines, log }
}

/// The visual `[...]` span of a raw line, for log messages. Falls back to
/// the whole line when the brackets cannot be located.
fn visual_block(line: &str) -> &str {
    match (line.find('['), line.find(']')) {
        (Some(open), Some(close)) if close > open => &line[open..=close],
        _ => line,
    }
}
