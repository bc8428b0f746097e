/*!
 * Common test utilities for the subtidy test suite
 */

use std::sync::Once;

use subtidy::{SrtEntry, SubtitleEvent};

static INIT_LOGGING: Once = Once::new();

/// Installs the env_logger backend once for the whole suite, so
/// `RUST_LOG=debug cargo test -- --nocapture` shows the library's logging
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates an SRT entry with plain text content
pub fn create_entry(index: usize, start_ms: u64, end_ms: u64, text: &str) -> SrtEntry {
    SrtEntry::new(index, start_ms, end_ms, text.to_string())
}

/// A small well-formed model response in notation form
pub fn clean_notation_text() -> &'static str {
    "[0:06,1 - 0:12,7] Hello there.\n\
     [0:12,7 - 0:15,0] General Kenobi.\n\
     [0:16,0 - 0:19,4] You are a bold one."
}

/// A model response with the usual mistakes mixed in: prose chatter,
/// a malformed block, an inverted range and a duplicated block
pub fn messy_notation_text() -> &'static str {
    "Here are the subtitles you asked for:\n\
     [0:01,0 - 0:03,5] First line. {unsure}\n\
     [0:03,5 - 0:02,0] Inverted range.\n\
     [0:04:0 - 0:05,0] Malformed block.\n\
     [0:01,0 - 0:03,5] Duplicate of the first.\n\
     [0:06,0 - 0:08,0] Last good line."
}

/// A small rich document with one of each interesting event kind
pub fn sample_document() -> Vec<SubtitleEvent> {
    vec![
        SubtitleEvent::dialogue(0, 1_000, r"{\an8}First line\Nsecond part"),
        SubtitleEvent::comment(1_000, 1_500, "checked by QC"),
        SubtitleEvent::drawing(1_000, 2_000, "m 0 0 l 100 0 100 100"),
        SubtitleEvent::dialogue(2_000, 3_000, "Plain dialogue."),
    ]
}
