//! Character-level classification for Arabizi input and Arabic output.

/// Word-constituent characters for boundary detection and text
/// segmentation: ASCII letters and digits, apostrophe, underscore, hyphen.
/// Everything else — whitespace, punctuation, Arabic script — acts as a
/// boundary.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\'' | '_' | '-')
}

/// Whether a token contains anything the engine would convert: at least
/// one ASCII letter or digit. Pure Arabic text, punctuation-only tokens,
/// and the empty string do not qualify.
pub fn is_convertible(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphanumeric())
}

/// Main Arabic block (U+0600..U+06FF). Covers every character the default
/// rule table emits.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}
