/*!
 * Error types for the subtidy library.
 *
 * Expected-bad input (AI notation is assumed imperfect) never surfaces here:
 * per-line problems accumulate as [`crate::diagnostics::Diagnostic`] values
 * alongside best-effort output. These enums cover the outcomes that leave a
 * stage with nothing usable, using the thiserror crate for ergonomic
 * definitions.
 */

use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// Errors from parsing a minute/second/tenth timecode component triple.
/// Each variant names the offending component and carries its raw text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// The minutes component is not an unsigned digit sequence (or overflows).
    #[error("minutes component '{0}' is not a valid digit sequence")]
    InvalidMinutes(String),

    /// The seconds component is not 1-2 digits in the range 0-59.
    #[error("seconds component '{0}' must be 1-2 digits in range 0-59")]
    InvalidSeconds(String),

    /// The tenth-of-second component is not exactly one digit.
    #[error("tenth-of-second component '{0}' must be a single digit 0-9")]
    InvalidTenths(String),
}

/// Errors from converting notation text into an SRT document.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No line survived conversion; the diagnostics explain why.
    #[error("no processable subtitle lines found in input ({} issue(s) reported)", diagnostics.len())]
    NoUsableEntries {
        /// Everything reported while lines were being dropped.
        diagnostics: Vec<Diagnostic>,
    },
}

/// Errors from parsing SRT document text back into entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrtParseError {
    /// The content held no valid subtitle block at all.
    #[error("no valid subtitle entries were found in the SRT content")]
    NoEntries,
}

/// Errors from reassembling a translated subtitle document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReassembleError {
    /// There are no original events to rebuild from.
    #[error("original event list is empty, nothing to reassemble")]
    EmptyDocument,
}

/// Library-wide error type that wraps all other errors, for hosts that
/// funnel every pipeline stage through one result type.
#[derive(Error, Debug)]
pub enum SubtidyError {
    /// Error from timecode component parsing.
    #[error("timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from notation-to-SRT conversion.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Error from SRT document parsing.
    #[error("SRT parse error: {0}")]
    SrtParse(#[from] SrtParseError),

    /// Error from document reassembly.
    #[error("reassembly error: {0}")]
    Reassemble(#[from] ReassembleError),
}
