//! One-line complaint summaries

use complaint_triage_core::SENTENCE_TERMINATORS;

/// Fragments this short (in characters) are not treated as sentences
const MIN_SENTENCE_CHARS: usize = 10;

/// First real sentence of `text`, cut to `max_length` characters plus an
/// ellipsis. Without any sentence longer than ten characters the whole
/// trimmed text comes back untruncated.
pub fn summarize(text: &str, max_length: usize) -> String {
    let first = text
        .split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .find(|s| s.chars().count() > MIN_SENTENCE_CHARS);

    match first {
        Some(sentence) if sentence.chars().count() > max_length => {
            let mut cut: String = sentence.chars().take(max_length).collect();
            cut.push_str("...");
            cut
        }
        Some(sentence) => sentence.to_string(),
        None => text.trim().to_string(),
    }
}
