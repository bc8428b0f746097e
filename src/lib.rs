/*!
 * # subtidy - Subtitle timing integrity for AI subbing pipelines
 *
 * A Rust library that keeps AI-generated subtitle timing sane: it parses
 * the compact `[MM:SS,t - MM:SS,t]` notation transcription models emit,
 * reports what is broken, repairs what can be repaired, and moves text
 * between rich subtitle documents and flat translation prompts.
 *
 * ## Features
 *
 * - Parse and validate the model-emitted timestamp notation
 *   (separator drift, unpadded minutes, trailing `{notes}`)
 * - Normalize notation text to canonical form without losing lines
 * - Convert notation into clean SRT, dropping or repairing bad entries
 * - Refine SRT timing: narrow reading gaps, resolve overlaps
 * - Extract translatable text from styled documents and reassemble
 *   translated documents with styling intact
 * - Round-trip numbered `[Segment N]:` lists for prompt building
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: The minute-based `MM:SS,t` time model
 * - `notation`: Line parsing, sequence analysis and normalization:
 *   - `notation::parser`: Single-line grammar
 *   - `notation::analyzer`: Read-only diagnostics over whole texts
 *   - `notation::normalizer`: Canonical line-preserving rewrite
 * - `srt`: SRT entries, conversion and timing refinement:
 *   - `srt::entry`: Entry model, compose/parse
 *   - `srt::convert`: Notation-to-SRT conversion
 *   - `srt::refine`: Pairwise gap/overlap refinement
 * - `document`: Rich-document extraction and reassembly:
 *   - `document::events`: Event model and text cleanup
 *   - `document::mapper`: Slot extraction and document rebuild
 *   - `document::segments`: Numbered segment-list round trip
 * - `diagnostics`: Severity/category tagged findings
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod diagnostics;
pub mod document;
pub mod errors;
pub mod notation;
pub mod srt;
pub mod timecode;

// Re-export main types for easier usage
pub use diagnostics::{Category, Diagnostic, Severity};
pub use document::{
    extract, parse_segment_list, reassemble, render_segment_list, DialogueFields, EventKind,
    Reassembly, SegmentListOutcome, SubtitleEvent,
};
pub use errors::{ConvertError, ReassembleError, SrtParseError, SubtidyError, TimecodeError};
pub use notation::{analyze, normalize, parse_line, AnalyzeConfig, Normalized, Segment};
pub use srt::{
    compose, convert, convert_with_config, refine, to_notation_lines, AdjustmentKind, Conversion,
    ConvertConfig,
    Refined, RefineConfig, SrtEntry, TimingAdjustment,
};
pub use timecode::Timecode;
