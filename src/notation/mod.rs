/*!
 * Parsing and integrity checking for the AI timestamp notation.
 *
 * This module handles the compact `[MM:SS,t - MM:SS,t] text` line format
 * that transcription and translation models emit:
 * - Line parsing (grammar, timecode extraction, trailing `{note}` capture)
 * - Sequence analysis (format, logic, duplicate findings per line)
 * - Normalization (canonical re-rendering without dropping lines)
 *
 * # Architecture
 *
 * - `parser`: Single-line grammar and mismatch classification
 * - `analyzer`: Read-only pass producing diagnostics for a whole text
 * - `normalizer`: Line-preserving rewrite into canonical form
 */

pub mod analyzer;
pub mod normalizer;
pub mod parser;

// Re-export main types
pub use analyzer::{analyze, analyze_with_config, AnalyzeConfig};
pub use normalizer::{normalize, Normalized};
pub use parser::{parse_line, Segment};
