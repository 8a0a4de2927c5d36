//! Auto-convert trigger: the seam between the engine and a host editor.
//!
//! The host calls [`edit_for_whitespace`] after an edit that inserted a
//! space or newline, passing the post-edit buffer and cursor position, and
//! gets back the span to replace, or `None`. Applying the edit — and not
//! re-firing this trigger on the resulting programmatic change (echo
//! suppression) — is the host's responsibility.

use crate::boundary::find_word_before;
use crate::config::Config;
use crate::engine::Transliterator;

/// A replacement edit, in character offsets into the buffer the host
/// passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Convert the word just finished at `pos`, if conversion is enabled and
/// actually changes the text.
pub fn edit_for_whitespace(
    config: &Config,
    engine: &Transliterator,
    buffer: &str,
    pos: usize,
) -> Option<SpanEdit> {
    if !config.enabled || !config.convert_on_space {
        return None;
    }
    let span = find_word_before(buffer, pos)?;
    let converted = engine.transliterate_word(&span.text);
    if converted == span.text {
        return None;
    }
    Some(SpanEdit {
        start: span.start,
        end: span.end,
        text: converted,
    })
}
