//! Banglish to Bengali transliteration
//!
//! Token-level dictionary lookup: exact match first, then the closest
//! dictionary key by normalized Levenshtein similarity. Tokens with no
//! match pass through untouched.

use complaint_triage_config::Lexicon;
use complaint_triage_core::Script;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Minimum token length, in characters, for a fuzzy lookup
const MIN_FUZZY_LENGTH: usize = 3;

/// Dictionary-driven Banglish normalizer
#[derive(Debug, Clone)]
pub struct BanglishNormalizer {
    lexicon: Arc<Lexicon>,
    /// Minimum similarity in (0, 1] for a fuzzy match
    cutoff: f64,
}

/// Record of one replaced token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub original: String,
    pub replacement: String,
    /// 1.0 for an exact dictionary hit
    pub similarity: f64,
}

impl BanglishNormalizer {
    pub fn new(lexicon: Arc<Lexicon>, cutoff: f64) -> Self {
        Self { lexicon, cutoff }
    }

    /// Transliterate known Banglish words, leaving everything else as is
    pub fn to_bengali(&self, text: &str) -> String {
        self.transliterate(text).0
    }

    /// Transliterate and report each substitution made
    pub fn transliterate(&self, text: &str) -> (String, Vec<Substitution>) {
        let mut substitutions = Vec::new();
        let mut words = Vec::new();

        for token in text.split_whitespace() {
            let (lead, core, trail) = split_punctuation(token);
            match self.lookup(core) {
                Some((replacement, similarity)) => {
                    substitutions.push(Substitution {
                        original: core.to_string(),
                        replacement: replacement.to_string(),
                        similarity,
                    });
                    words.push(format!("{}{}{}", lead, replacement, trail));
                }
                None => words.push(token.to_string()),
            }
        }

        let fuzzy = substitutions.iter().filter(|s| s.similarity < 1.0).count();
        if fuzzy > 0 {
            tracing::debug!(
                replaced = substitutions.len(),
                fuzzy,
                "Transliterated Banglish tokens"
            );
        }

        (words.join(" "), substitutions)
    }

    /// Bengali word for one bare token, with the match similarity
    fn lookup(&self, core: &str) -> Option<(&str, f64)> {
        if core.is_empty() {
            return None;
        }

        let lower = core.to_lowercase();
        if let Some(bengali) = self.lexicon.translate_word(&lower) {
            return Some((bengali, 1.0));
        }

        if core.chars().any(|c| Script::of(c) == Script::Bengali) || is_numeric(core) {
            return None;
        }

        if lower.chars().count() < MIN_FUZZY_LENGTH {
            return None;
        }

        self.closest_match(&lower)
    }

    /// Most similar dictionary key at or above the cutoff. Ties go to the
    /// first key in lexical order.
    pub fn closest_match(&self, word: &str) -> Option<(&str, f64)> {
        let word_len = word.chars().count();
        let mut best: Option<(&str, f64)> = None;

        for (key, bengali) in self.lexicon.banglish_entries() {
            let key_len = key.chars().count();
            let longest = word_len.max(key_len).max(1);

            // Length difference alone bounds the similarity
            let len_diff = word_len.abs_diff(key_len);
            if 1.0 - (len_diff as f64 / longest as f64) < self.cutoff {
                continue;
            }

            let similarity = similarity(word, key);
            if similarity < self.cutoff {
                continue;
            }
            match best {
                Some((_, best_similarity)) if similarity <= best_similarity => {}
                _ => best = Some((bengali, similarity)),
            }
        }

        best
    }
}

/// Normalized similarity: `1 - distance / max(len)`, in [0, 1]
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Levenshtein edit distance over chars, two-row dynamic programming
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row: Vec<usize> = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] { 0 } else { 1 };

            curr_row[j] = std::cmp::min(
                std::cmp::min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

fn is_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_numeric())
        && token.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '/'))
}

/// Split `"(dam!"` into `("(", "dam", "!")`
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let is_punct = |c: char| c.is_ascii_punctuation() || c == '।';
    let core_start = token.find(|c: char| !is_punct(c)).unwrap_or(token.len());
    let core_end = token
        .rfind(|c: char| !is_punct(c))
        .map(|i| i + token[i..].chars().next().map(char::len_utf8).unwrap_or(1))
        .unwrap_or(core_start);
    let core_end = core_end.max(core_start);
    (
        &token[..core_start],
        &token[core_start..core_end],
        &token[core_end..],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> BanglishNormalizer {
        BanglishNormalizer::new(Arc::new(Lexicon::builtin()), 0.85)
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("দাম", "দম"), 1);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert!((similarity("kinechhi", "kinechi") - 0.875).abs() < 1e-9);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_exact_lookup() {
        let n = normalizer();
        assert_eq!(
            n.to_bengali("Ami ei shop theke kharap product kinechi."),
            "আমি এই দোকান থেকে খারাপ পণ্য কিনেছি."
        );
    }

    #[test]
    fn test_fuzzy_lookup() {
        let n = normalizer();
        // one extra letter in an eight-letter word: similarity 0.875
        let (text, subs) = n.transliterate("kinechhi");
        assert_eq!(text, "কিনেছি");
        assert_eq!(subs.len(), 1);
        assert!(subs[0].similarity < 1.0);
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let n = normalizer();
        assert_eq!(n.to_bengali("xyzzy quux"), "xyzzy quux");
        assert_eq!(n.to_bengali("500 taka"), "500 টাকা");
        assert_eq!(n.to_bengali("দাম beshi"), "দাম বেশি");
    }

    #[test]
    fn test_short_tokens_skip_fuzzy() {
        let n = normalizer();
        // "ab" is two edits from "ami" but too short to try
        assert_eq!(n.to_bengali("ab"), "ab");
    }

    #[test]
    fn test_punctuation_is_reattached() {
        let n = normalizer();
        assert_eq!(n.to_bengali("(dam!"), "(দাম!");
        assert_eq!(n.to_bengali("..."), "...");
    }

    #[test]
    fn test_split_punctuation() {
        assert_eq!(split_punctuation("\"hello,\""), ("\"", "hello", ",\""));
        assert_eq!(split_punctuation("দাম।"), ("", "দাম", "।"));
        assert_eq!(split_punctuation("!!"), ("!!", "", ""));
    }
}
