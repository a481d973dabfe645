//! Keyword Extractor — normalizes free text into a deduplicated set of
//! significant tokens.
//!
//! Pipeline: lowercase → strip non-word characters → split on whitespace →
//! drop short tokens and stop words → dedupe. Total over every string input,
//! pure and deterministic; the only shared data is the immutable stop-word
//! table below.

use std::collections::BTreeSet;

/// A deduplicated set of normalized keywords. Iteration order carries no
/// meaning for callers; the display layer may sort however it likes.
pub type KeywordSet = BTreeSet<String>;

/// Common English words excluded from keyword consideration.
///
/// Plain ASCII words only — bullet glyphs and other list markers are
/// non-word characters and are removed during punctuation stripping, so
/// they never reach this table. Sorted, so membership is a binary search
/// over a `static` with no lazy init and no synchronization.
static STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all",
    "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "did", "do", "does", "doing", "don", "down",
    "during", "each", "few", "for", "from", "further", "get", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "like", "me", "more", "most",
    "my", "myself", "new", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "s", "same", "she", "should", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "use", "using",
    "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your",
    "yours", "yourself", "yourselves",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// A word character survives punctuation stripping. Unicode alphanumerics
/// plus `_`, so accented names and non-Latin scripts tokenize instead of
/// vanishing.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extracts the keyword set from arbitrary text.
///
/// Punctuation is removed (not replaced with a space) before splitting, so
/// `"data-driven,"` yields the single token `datadriven` rather than
/// spurious fragments. Tokens of length ≤ 2 (in characters) and stop words
/// are dropped.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| token.chars().count() > 2 && !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
