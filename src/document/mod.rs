/*!
 * Rich-document side of the translation round trip.
 *
 * Styled subtitle documents carry more than dialogue: comments, vector
 * drawings, per-event styling. This module maps such a document to and
 * from the flat text a translation model can work with:
 * - Event model (closed tagged union, metadata on Dialogue only)
 * - Extraction of translatable slots and reassembly of a new document
 * - The numbered `[Segment N]:` list format used in prompts
 *
 * # Architecture
 *
 * - `events`: `SubtitleEvent`/`EventKind` model and text cleanup helpers
 * - `mapper`: `extract` and `reassemble` between events and slots
 * - `segments`: render/parse of the numbered segment list
 */

pub mod events;
pub mod mapper;
pub mod segments;

// Re-export main types
pub use events::{clean_dialogue_text, strip_inline_tags, DialogueFields, EventKind, SubtitleEvent};
pub use mapper::{extract, reassemble, Reassembly, EMPTY_PLACEHOLDER, SHAPE_PLACEHOLDER};
pub use segments::{parse_segment_list, render_segment_list, SegmentListOutcome};
