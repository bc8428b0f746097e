/*!
 * SRT document handling.
 *
 * Everything that touches the standard numbered `HH:MM:SS,mmm` exchange
 * format lives here:
 * - Entry model, rendering and tolerant document parsing
 * - Conversion from notation text into a clean SRT document
 * - Pairwise timing refinement of an existing document
 *
 * # Architecture
 *
 * - `entry`: `SrtEntry`, `compose`/`parse`, notation re-rendering
 * - `convert`: strict notation-to-SRT conversion with overlap repair
 * - `refine`: gap narrowing and overlap resolution over parsed entries
 */

pub mod convert;
pub mod entry;
pub mod refine;

// Re-export main types
pub use convert::{convert, convert_with_config, Conversion, ConvertConfig};
pub use entry::{compose, parse, to_notation_lines, SrtEntry};
pub use refine::{refine, refine_with_config, AdjustmentKind, Refined, RefineConfig, TimingAdjustment};
