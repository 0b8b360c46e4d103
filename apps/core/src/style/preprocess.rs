//! Text preprocessing: trimming, sentence splitting and whitespace tokenization.
//!
//! No case folding, punctuation stripping or Unicode normalization happens here.
//! Lexicon matching downstream is exact, so tokens are passed through verbatim.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable for a constant pattern compiled once at startup
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?。\n]+").expect("Invalid regex: sentence boundary"));

/// Whitespace test used for trimming and tokenizing.
///
/// Besides Unicode White_Space this includes the ASCII information separators
/// U+001C..=U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing whitespace
pub fn normalize(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Split text into trimmed, non-empty sentences.
///
/// Boundaries are runs of `.`, `!`, `?`, `。` or newlines. Fragments that are
/// empty or whitespace-only after splitting are dropped; order is preserved.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(|s| s.trim_matches(is_separator))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Split text on runs of whitespace. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
