//! Word-boundary detection in a text buffer.
//!
//! Offsets are character offsets, not bytes: hosts address editor buffers
//! by character position, and the buffer may hold arbitrary Unicode.

use crate::unicode::is_word_char;

/// Half-open span of word-constituent characters, plus the text it covers.
/// Constructed per lookup and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Find the word ending at or before `pos` — typically the cursor position
/// just after an inserted space.
///
/// Scans left from `pos - 1`: first over whitespace, then over word
/// characters. Returns `None` when nothing but whitespace precedes `pos`,
/// or when the nearest non-whitespace character is not a word character
/// (Arabic text, punctuation). `pos` past the end of the buffer is
/// clamped.
pub fn find_word_before(buffer: &str, pos: usize) -> Option<WordSpan> {
    let chars: Vec<char> = buffer.chars().take(pos).collect();

    let mut end = chars.len();
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if end == 0 {
        return None;
    }

    let mut start = end;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    if start == end {
        return None;
    }

    Some(WordSpan {
        start,
        end,
        text: chars[start..end].iter().collect(),
    })
}
