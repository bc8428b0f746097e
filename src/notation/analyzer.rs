/*!
 * Read-only integrity analysis for notation text.
 *
 * Walks a whole model response line by line and reports findings without
 * modifying anything: grammar mismatches, inverted time ranges, overlaps
 * with the previous valid line, and repeated timestamp blocks. Hosts render
 * the findings for review before any conversion is attempted.
 */

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Category, Diagnostic};
use crate::notation::parser::parse_line;
use crate::timecode::Timecode;

/// Configuration for sequence analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Backwards jumps up to this many milliseconds against the previous
    /// line's end are tolerated without a finding.
    #[serde(default = "default_overlap_tolerance_ms")]
    pub overlap_tolerance_ms: u64,
}

fn default_overlap_tolerance_ms() -> u64 {
    50
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            overlap_tolerance_ms: default_overlap_tolerance_ms(),
        }
    }
}

/// Analyzes notation text with the default configuration.
pub fn analyze(text: &str) -> Vec<Diagnostic> {
    analyze_with_config(text, &AnalyzeConfig::default())
}

/// Analyzes notation text, reporting one diagnostic per finding.
///
/// Blank lines are skipped. Line numbers are 1-based over the full input,
/// blanks included. Overlap is only measured against the end of the latest
/// line whose range ran forwards, and duplicate detection compares canonical
/// timecode pairs, so padding differences do not hide a repeat.
pub fn analyze_with_config(text: &str, config: &AnalyzeConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut previous_valid_end_ms: Option<u64> = None;
    let mut seen_blocks: HashMap<(Timecode, Timecode), usize> = HashMap::new();
    let mut inspected = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        inspected += 1;

        let segment = match parse_line(line, line_no) {
            Ok(segment) => segment,
            Err(diag) => {
                diagnostics.push(diag);
                continue;
            }
        };

        let start_ms = segment.start.as_millis();
        let end_ms = segment.end.as_millis();

        if start_ms >= end_ms {
            diagnostics.push(Diagnostic::error(
                line_no,
                Category::Logic,
                format!(
                    "start time ({}) not strictly before end time ({})",
                    segment.start, segment.end
                ),
            ));
        }

        if let Some(prev_end_ms) = previous_valid_end_ms {
            if start_ms < prev_end_ms && prev_end_ms - start_ms > config.overlap_tolerance_ms {
                diagnostics.push(Diagnostic::warning(
                    line_no,
                    Category::Logic,
                    format!(
                        "sequence overlap: starts ({}) {:.1}s before the previous line ended ({})",
                        segment.start,
                        (prev_end_ms - start_ms) as f64 / 1000.0,
                        Timecode::from_millis(prev_end_ms)
                    ),
                ));
            }
        }

        let block = (segment.start, segment.end);
        if let Some(&first_line) = seen_blocks.get(&block) {
            diagnostics.push(Diagnostic::error(
                line_no,
                Category::Duplicate,
                format!(
                    "timestamp block ({} - {}) is identical to L{}",
                    segment.start, segment.end, first_line
                ),
            ));
        } else {
            seen_blocks.insert(block, line_no);
        }

        if start_ms < end_ms {
            previous_valid_end_ms = Some(end_ms);
        }
    }

    debug!(
        "notation analysis inspected {} line(s), {} finding(s)",
        inspected,
        diagnostics.len()
    );
    diagnostics
}
