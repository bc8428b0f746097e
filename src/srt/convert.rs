/*!
 * Conversion from notation text to an SRT document.
 *
 * The strict counterpart to analysis: every line either becomes an SRT
 * entry or is dropped with a diagnostic explaining why. Small overlaps
 * against the previously accepted entry are repaired by nudging the start
 * forward; anything unrepairable is dropped rather than emitted broken.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::diagnostics::{preview, Category, Diagnostic, Severity};
use crate::errors::ConvertError;
use crate::notation::normalizer::normalize;
use crate::notation::parser::parse_line;
use crate::srt::entry::{compose, SrtEntry};
use crate::timecode::Timecode;

/// Configuration for notation-to-SRT conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Run normalization first and fold its errors into the diagnostics.
    #[serde(default = "default_apply_normalization")]
    pub apply_normalization: bool,

    /// Entries shorter than this many milliseconds are dropped.
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,

    /// Overlaps up to this many milliseconds are accepted as-is.
    #[serde(default = "default_overlap_tolerance_ms")]
    pub overlap_tolerance_ms: u64,

    /// Repaired starts land this many milliseconds after the previous end.
    #[serde(default = "default_overlap_nudge_ms")]
    pub overlap_nudge_ms: u64,
}

fn default_apply_normalization() -> bool {
    true
}

fn default_min_duration_ms() -> u64 {
    100
}

fn default_overlap_tolerance_ms() -> u64 {
    50
}

fn default_overlap_nudge_ms() -> u64 {
    25
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            apply_normalization: default_apply_normalization(),
            min_duration_ms: default_min_duration_ms(),
            overlap_tolerance_ms: default_overlap_tolerance_ms(),
            overlap_nudge_ms: default_overlap_nudge_ms(),
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rendered SRT document.
    pub document: String,
    /// The entries behind the document, indexed 1..=n in timeline order.
    pub entries: Vec<SrtEntry>,
    /// Everything dropped, repaired or otherwise worth knowing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts notation text with the default configuration.
pub fn convert(text: &str) -> Result<Conversion, ConvertError> {
    convert_with_config(text, &ConvertConfig::default())
}

/// Converts notation text into an SRT document.
///
/// Lines starting with `#` or `//` are treated as commentary and skipped
/// silently, blank lines likewise. A line is dropped (with a diagnostic)
/// when it does not parse, its range is inverted or shorter than the
/// minimum duration, its text is empty, or it overlaps the previous
/// accepted entry beyond tolerance and the nudge repair would leave too
/// little duration. Erring out only happens when nothing survives.
pub fn convert_with_config(text: &str, config: &ConvertConfig) -> Result<Conversion, ConvertError> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let normalized_lines;
    let lines: Vec<&str> = if config.apply_normalization {
        let normalized = normalize(text);
        for entry in &normalized.log {
            if entry.severity == Severity::Error {
                diagnostics.push(Diagnostic {
                    message: format!("normalization: {}", entry.message),
                    ..entry.clone()
                });
            }
        }
        normalized_lines = normalized.lines;
        normalized_lines.iter().map(String::as_str).collect()
    } else {
        text.lines().collect()
    };

    let mut entries: Vec<SrtEntry> = Vec::new();
    let mut last_accepted_end_ms: Option<u64> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let segment = match parse_line(line, line_no) {
            Ok(segment) => segment,
            Err(diag) => {
                let message = if diag.category == Category::Parse {
                    format!("{}; skipped", diag.message)
                } else {
                    format!(
                        "does not match the '[m<sep>s,x - m<sep>s,x] text' format; skipped. Content: '{}'",
                        preview(line, 70)
                    )
                };
                diagnostics.push(Diagnostic::error(line_no, diag.category, message));
                continue;
            }
        };

        let mut start_ms = segment.start.as_millis();
        let end_ms = segment.end.as_millis();

        if start_ms >= end_ms {
            diagnostics.push(Diagnostic::error(
                line_no,
                Category::Logic,
                format!(
                    "start time ({}) not before end time ({}); skipped",
                    segment.start, segment.end
                ),
            ));
            continue;
        }

        if end_ms - start_ms < config.min_duration_ms {
            diagnostics.push(Diagnostic::error(
                line_no,
                Category::Logic,
                format!(
                    "duration {}ms is below the {}ms minimum; skipped ({} - {})",
                    end_ms - start_ms,
                    config.min_duration_ms,
                    segment.start,
                    segment.end
                ),
            ));
            continue;
        }

        if let Some(prev_end_ms) = last_accepted_end_ms {
            if start_ms < prev_end_ms && prev_end_ms - start_ms > config.overlap_tolerance_ms {
                let candidate_ms = prev_end_ms + config.overlap_nudge_ms;
                if candidate_ms < end_ms && end_ms - candidate_ms >= config.min_duration_ms {
                    diagnostics.push(Diagnostic::info(
                        line_no,
                        Category::Logic,
                        format!(
                            "start adjusted from {} to {} to resolve overlap with the previous entry",
                            Timecode::from_millis(start_ms),
                            Timecode::from_millis(candidate_ms)
                        ),
                    ));
                    start_ms = candidate_ms;
                } else {
                    diagnostics.push(Diagnostic::error(
                        line_no,
                        Category::Logic,
                        format!(
                            "unrepairable overlap: starts at {} but the previous entry ends at {}; skipped",
                            Timecode::from_millis(start_ms),
                            Timecode::from_millis(prev_end_ms)
                        ),
                    ));
                    continue;
                }
            }
        }

        let content = match &segment.note {
            Some(note) => format!("{} {{{}}}", segment.text, note),
            None => segment.text.clone(),
        };
        if content.trim().is_empty() {
            diagnostics.push(Diagnostic::error(
                line_no,
                Category::Format,
                format!("empty text; skipped ({} - {})", segment.start, segment.end),
            ));
            continue;
        }

        entries.push(SrtEntry::new(entries.len() + 1, start_ms, end_ms, content));
        last_accepted_end_ms = Some(end_ms);
    }

    if entries.is_empty() {
        warn!(
            "conversion produced no usable entries from {} line(s)",
            lines.len()
        );
        return Err(ConvertError::NoUsableEntries { diagnostics });
    }

    debug!(
        "converted {} line(s) into {} SRT entries, {} diagnostic(s)",
        lines.len(),
        entries.len(),
        diagnostics.len()
    );
    let document = compose(&entries);
    Ok(Conversion {
        document,
        entries,
        diagnostics,
    })
}
