/*!
 * Rich subtitle document events.
 *
 * A closed model of the event list found in styled subtitle documents
 * (ASS and friends): dialogue with its styling metadata, comments,
 * vector drawings, and a catch-all for anything else a loader may hand
 * over. Loading and saving the document belongs to the host; this model
 * only carries what extraction and reassembly need.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// `{...}` override blocks embedded in styled dialogue text.
static OVERRIDE_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("Invalid override tag regex"));

/// Runs of whitespace, collapsed to single spaces during cleanup.
static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace run regex"));

/// Styling metadata carried by a dialogue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueFields {
    /// Dialogue text, possibly with `{...}` overrides and `\N` breaks.
    pub text: String,
    /// Style name.
    pub style: String,
    /// Speaker / actor field.
    pub actor: String,
    /// Left margin override.
    pub margin_l: i32,
    /// Right margin override.
    pub margin_r: i32,
    /// Vertical margin override.
    pub margin_v: i32,
    /// Render layer.
    pub layer: i32,
    /// Transition or effect field.
    pub effect: String,
    /// Name field, kept distinct from `actor` for loaders that separate them.
    pub name: String,
}

impl Default for DialogueFields {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: "Default".to_string(),
            actor: String::new(),
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            layer: 0,
            effect: String::new(),
            name: "Default".to_string(),
        }
    }
}

/// The event variants a document can hold. Only `Dialogue` carries
/// styling metadata; a `Drawing` has nothing translatable beyond its
/// placeholder and `Comment`/`Other` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Spoken or displayed text with styling metadata.
    Dialogue(DialogueFields),
    /// Commentary, never rendered.
    Comment { text: String },
    /// Vector drawing commands.
    Drawing { commands: String },
    /// Anything else (e.g. format extensions), kept verbatim.
    Other { kind: String, text: String },
}

/// One timed event in a rich subtitle document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEvent {
    /// Start time in ms.
    pub start_ms: u64,
    /// End time in ms.
    pub end_ms: u64,
    /// What the event is.
    pub kind: EventKind,
}

impl SubtitleEvent {
    /// Creates a dialogue event with default styling.
    pub fn dialogue(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            kind: EventKind::Dialogue(DialogueFields {
                text: text.into(),
                ..DialogueFields::default()
            }),
        }
    }

    /// Creates a comment event.
    pub fn comment(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            kind: EventKind::Comment { text: text.into() },
        }
    }

    /// Creates a drawing event.
    pub fn drawing(start_ms: u64, end_ms: u64, commands: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            kind: EventKind::Drawing {
                commands: commands.into(),
            },
        }
    }

    /// Whether this event occupies a translatable-text slot.
    pub fn is_translatable(&self) -> bool {
        matches!(
            self.kind,
            EventKind::Dialogue(_) | EventKind::Drawing { .. }
        )
    }
}

/// Removes `{...}` override blocks from styled dialogue text.
pub fn strip_inline_tags(text: &str) -> String {
    OVERRIDE_TAG_REGEX.replace_all(text, "").into_owned()
}

/// Flattens dialogue text for translation: override tags removed, soft and
/// hard breaks (`\N`, `\n`, `\h`) and literal newlines turned into spaces,
/// whitespace runs collapsed, ends trimmed.
pub fn clean_dialogue_text(text: &str) -> String {
    let stripped = strip_inline_tags(text);
    let unbroken = stripped
        .replace("\\N", " ")
        .replace("\\n", " ")
        .replace("\\h", " ")
        .replace('\n', " ");
    WHITESPACE_RUN_REGEX
        .replace_all(&unbroken, " ")
        .trim()
        .to_string()
}
