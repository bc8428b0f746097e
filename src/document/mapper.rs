/*!
 * Extraction and reassembly between a rich document and flat text.
 *
 * `extract` flattens every translatable event into one string slot, in
 * document order, so a translation model sees clean prose. `reassemble`
 * walks the original events again and rebuilds a complete document from
 * the translated slots, keeping comments and unknown events untouched and
 * carrying dialogue styling metadata across.
 */

use log::{debug, warn};

use crate::diagnostics::{Category, Diagnostic};
use crate::document::events::{clean_dialogue_text, DialogueFields, EventKind, SubtitleEvent};
use crate::errors::ReassembleError;

/// Slot text standing in for a vector drawing.
pub const SHAPE_PLACEHOLDER: &str = "(shape)";

/// Slot text standing in for a dialogue with no visible text.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Extracts one translatable string per Dialogue/Drawing event, in order.
///
/// Drawings become [`SHAPE_PLACEHOLDER`]; dialogue text is cleaned of
/// styling and collapsed, with [`EMPTY_PLACEHOLDER`] standing in when
/// nothing visible remains. Comment/Other events contribute no slot.
pub fn extract(events: &[SubtitleEvent]) -> Vec<String> {
    let mut segments = Vec::new();

    for event in events {
        match &event.kind {
            EventKind::Drawing { .. } => {
                debug!(
                    "drawing event at {}-{}ms becomes a placeholder slot",
                    event.start_ms, event.end_ms
                );
                segments.push(SHAPE_PLACEHOLDER.to_string());
            }
            EventKind::Dialogue(fields) => {
                let cleaned = clean_dialogue_text(&fields.text);
                if cleaned.is_empty() {
                    debug!(
                        "styling-only dialogue at {}-{}ms becomes a placeholder slot",
                        event.start_ms, event.end_ms
                    );
                    segments.push(EMPTY_PLACEHOLDER.to_string());
                } else {
                    segments.push(cleaned);
                }
            }
            EventKind::Comment { .. } | EventKind::Other { .. } => {}
        }
    }

    debug!(
        "extracted {} translatable slot(s) from {} event(s)",
        segments.len(),
        events.len()
    );
    segments
}

/// Result of rebuilding a document from translated slots.
#[derive(Debug, Clone)]
pub struct Reassembly {
    /// The rebuilt events, same length and order as the originals.
    pub events: Vec<SubtitleEvent>,
    /// Slot exhaustion and count mismatches, if any.
    pub warnings: Vec<Diagnostic>,
}

/// Rebuilds a document by pairing each translatable event with the next
/// translated slot.
///
/// Every Dialogue/Drawing event becomes a new Dialogue at the same timing
/// holding the translated text; styling metadata is copied only when the
/// source was itself Dialogue. Comment/Other events are cloned unchanged.
/// When the slots run out early the original event is re-inserted
/// untranslated and the condition is reported; a final consumed-versus-
/// provided count mismatch is reported as a warning. Only an empty
/// original document is an error.
pub fn reassemble(
    original: &[SubtitleEvent],
    translated: &[String],
) -> Result<Reassembly, ReassembleError> {
    if original.is_empty() {
        return Err(ReassembleError::EmptyDocument);
    }

    let mut events = Vec::with_capacity(original.len());
    let mut warnings = Vec::new();
    let mut consumed = 0usize;

    for (position, event) in original.iter().enumerate() {
        if !event.is_translatable() {
            events.push(event.clone());
            continue;
        }

        match translated.get(consumed) {
            Some(text) => {
                let fields = match &event.kind {
                    EventKind::Dialogue(source) => DialogueFields {
                        text: text.clone(),
                        ..source.clone()
                    },
                    _ => DialogueFields {
                        text: text.clone(),
                        ..DialogueFields::default()
                    },
                };
                events.push(SubtitleEvent {
                    start_ms: event.start_ms,
                    end_ms: event.end_ms,
                    kind: EventKind::Dialogue(fields),
                });
                consumed += 1;
            }
            None => {
                warn!(
                    "translated slots exhausted at event {}; keeping the original text",
                    position + 1
                );
                warnings.push(Diagnostic::warning(
                    position + 1,
                    Category::Resource,
                    format!(
                        "translated slots exhausted at event {}-{}ms; original kept untranslated",
                        event.start_ms, event.end_ms
                    ),
                ));
                events.push(event.clone());
            }
        }
    }

    if consumed != translated.len() {
        warn!(
            "slot count mismatch after reassembly: consumed {} of {}",
            consumed,
            translated.len()
        );
        warnings.push(Diagnostic::warning(
            original.len(),
            Category::Resource,
            format!(
                "slot count mismatch: consumed {} of {} translated slot(s)",
                consumed,
                translated.len()
            ),
        ));
    }

    debug!(
        "reassembled {} event(s) with {} warning(s)",
        events.len(),
        warnings.len()
    );
    Ok(Reassembly { events, warnings })
}
