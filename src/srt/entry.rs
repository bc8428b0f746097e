/*!
 * SRT entry model and document parsing.
 *
 * An entry is index + millisecond range + content; `Display` renders the
 * standard numbered block with `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing.
 * Parsing is tolerant: invalid blocks are skipped with a warning, entries
 * are re-sorted by start time and renumbered, and only a document with no
 * valid block at all is an error.
 */

use std::fmt;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::SrtParseError;
use crate::timecode::Timecode;

/// SRT timing line. Hours take two or more digits so long recordings
/// survive a round trip through `format_timestamp`.
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2,}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2,}):(\d{2}):(\d{2}),(\d{3})")
        .expect("Invalid SRT timing regex")
});

/// Single SRT subtitle entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrtEntry {
    /// 1-based position in the document.
    pub index: usize,
    /// Start time in ms.
    pub start_ms: u64,
    /// End time in ms.
    pub end_ms: u64,
    /// Subtitle content, possibly multi-line.
    pub content: String,
}

impl SrtEntry {
    /// Creates a new entry.
    pub fn new(index: usize, start_ms: u64, end_ms: u64, content: String) -> Self {
        SrtEntry {
            index,
            start_ms,
            end_ms,
            content,
        }
    }

    /// Entry duration in ms; zero when the range is inverted.
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Start time as an SRT timestamp.
    pub fn format_start(&self) -> String {
        Self::format_timestamp(self.start_ms)
    }

    /// End time as an SRT timestamp.
    pub fn format_end(&self) -> String {
        Self::format_timestamp(self.end_ms)
    }

    /// Formats milliseconds as an SRT timestamp (HH:MM:SS,mmm).
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SrtEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start(), self.format_end())?;
        writeln!(f, "{}", self.content)?;
        writeln!(f)
    }
}

/// Renders entries as one SRT document, blocks in slice order.
pub fn compose(entries: &[SrtEntry]) -> String {
    entries.iter().map(ToString::to_string).collect()
}

/// Renders entries as notation lines, one `[MM:SS,t - MM:SS,t] text` line
/// per entry with internal newlines flattened to spaces. This is how a
/// refined document goes back to a model for further correction.
pub fn to_notation_lines(entries: &[SrtEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "[{} - {}] {}",
                Timecode::from_millis(entry.start_ms),
                Timecode::from_millis(entry.end_ms),
                entry.content.replace('\n', " ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parser position inside an SRT document.
enum ParseState {
    /// Before a block, expecting an index line.
    AwaitingIndex,
    /// Index seen, expecting the timing line.
    AwaitingTiming { index: usize },
    /// Timing seen, accumulating content lines until a blank.
    CollectingText {
        index: usize,
        start_ms: u64,
        end_ms: u64,
        text: String,
    },
}

/// Parses SRT document text into entries.
///
/// Blocks with an inverted time range or no content are skipped with a
/// warning rather than failing the whole document. Surviving entries are
/// sorted by start time and renumbered sequentially; overlaps are counted
/// and logged but preserved. Returns an error only when nothing parses.
pub fn parse(content: &str) -> Result<Vec<SrtEntry>, SrtParseError> {
    let mut entries: Vec<SrtEntry> = Vec::new();
    let mut state = ParseState::AwaitingIndex;

    let mut flush = |index: usize, start_ms: u64, end_ms: u64, text: &str| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            warn!("skipping subtitle entry {}: empty text", index);
        } else if end_ms <= start_ms {
            warn!(
                "skipping subtitle entry {}: end time {}ms is not after start time {}ms",
                index, end_ms, start_ms
            );
        } else {
            entries.push(SrtEntry::new(index, start_ms, end_ms, trimmed.to_string()));
        }
    };

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if let ParseState::CollectingText {
                index,
                start_ms,
                end_ms,
                ref text,
            } = state
            {
                if !text.is_empty() {
                    flush(index, start_ms, end_ms, text);
                    state = ParseState::AwaitingIndex;
                }
            }
            continue;
        }

        state = match state {
            ParseState::AwaitingIndex => match trimmed.parse::<usize>() {
                Ok(index) => ParseState::AwaitingTiming { index },
                Err(_) => {
                    warn!(
                        "unexpected text at line {} before an index line: {}",
                        line_no + 1,
                        trimmed
                    );
                    ParseState::AwaitingIndex
                }
            },
            ParseState::AwaitingTiming { index } => match TIMING_REGEX.captures(trimmed) {
                Some(caps) => ParseState::CollectingText {
                    index,
                    start_ms: timestamp_ms(&caps, 1),
                    end_ms: timestamp_ms(&caps, 5),
                    text: String::new(),
                },
                None => {
                    warn!(
                        "expected a timing line at line {}, got: {}",
                        line_no + 1,
                        trimmed
                    );
                    ParseState::AwaitingTiming { index }
                }
            },
            ParseState::CollectingText {
                index,
                start_ms,
                end_ms,
                mut text,
            } => {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
                ParseState::CollectingText {
                    index,
                    start_ms,
                    end_ms,
                    text,
                }
            }
        };
    }

    // Flush the final block, which may end without a trailing blank line
    if let ParseState::CollectingText {
        index,
        start_ms,
        end_ms,
        ref text,
    } = state
    {
        if !text.is_empty() {
            flush(index, start_ms, end_ms, text);
        }
    }

    if entries.is_empty() {
        warn!("no valid subtitle entries found in content");
        return Err(SrtParseError::NoEntries);
    }

    entries.sort_by_key(|entry| entry.start_ms);

    let mut overlap_count = 0;
    for pair in entries.windows(2) {
        if pair[0].end_ms > pair[1].start_ms {
            overlap_count += 1;
        }
    }
    if overlap_count > 0 {
        warn!("found {} overlapping subtitle entries", overlap_count);
    }

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.index = i + 1;
    }

    debug!("parsed {} subtitle entries", entries.len());
    Ok(entries)
}

/// Milliseconds from four consecutive timing captures starting at `base`.
/// The regex guarantees digits; only the open-ended hours capture can fail
/// to parse, and it saturates so the block is skipped as inverted rather
/// than relocated to the document start.
fn timestamp_ms(caps: &Captures<'_>, base: usize) -> u64 {
    let component = |offset: usize| -> u64 {
        caps.get(base + offset)
            .map_or(0, |m| m.as_str().parse().unwrap_or(u64::MAX))
    };
    // hours are open-ended, so the arithmetic saturates instead of wrapping
    component(0)
        .saturating_mul(3_600)
        .saturating_add(component(1) * 60)
        .saturating_add(component(2))
        .saturating_mul(1_000)
        .saturating_add(component(3))
}
