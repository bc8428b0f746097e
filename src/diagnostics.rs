/*!
 * Diagnostic records for batch subtitle analysis.
 *
 * Every stage of the pipeline reports problems as plain values instead of
 * aborting: a batch of imperfect AI output should still produce best-effort
 * results plus a list of findings. Diagnostics carry the line they refer to,
 * a severity, a coarse category, and a human-readable message in the shape
 * the host surfaces to users (`"L3: FORMAT ERROR - ..."`).
 */

use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The line is unusable or produced wrong output.
    Error,
    /// The line is usable but suspicious.
    Warning,
    /// Informational note, e.g. an auto-applied correction.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// What kind of problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The line does not match the expected grammar.
    Format,
    /// Grammar is fine but the timing makes no sense.
    Logic,
    /// A timestamp pair repeats an earlier line.
    Duplicate,
    /// A numeric component is out of range.
    Parse,
    /// Segment counts do not line up during reassembly.
    Resource,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Format => write!(f, "FORMAT"),
            Category::Logic => write!(f, "LOGIC"),
            Category::Duplicate => write!(f, "DUPLICATE"),
            Category::Parse => write!(f, "PARSE"),
            Category::Resource => write!(f, "RESOURCE"),
        }
    }
}

/// A single finding tied to an input line (or event position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line (or event) number the finding refers to.
    pub line: usize,
    /// Severity of the finding.
    pub severity: Severity,
    /// Category of the finding.
    pub category: Category,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }

    /// Create an info-severity diagnostic.
    pub fn info(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }

    /// Whether the finding should be surfaced to a user for action.
    /// Info entries document auto-corrections and are review-only.
    pub fn is_actionable(&self) -> bool {
        !matches!(self.severity, Severity::Info)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "L{}: {} {} - {}",
            self.line, self.category, self.severity, self.message
        )
    }
}

/// Truncate a line to at most `max_chars` characters for use inside a
/// diagnostic message, appending an ellipsis when content was cut.
pub(crate) fn preview(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
