//! Feature extraction over normalized text

use complaint_triage_core::{Features, Language, Script};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::LanguageIdentifier;
use crate::normalizer::without_emoji_names;

/// Four or more Latin consonants in a row (`y` counts as a vowel)
static CONSONANT_CLUSTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[bcdfghjklmnpqrstvwxz]{4,}").unwrap());

/// Minimum run length counted by `repeated_char_ratio`
const REPEAT_RUN: usize = 3;

/// Computes the feature vector every scorer reads
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    identifier: LanguageIdentifier,
}

impl FeatureExtractor {
    pub fn new(identifier: LanguageIdentifier) -> Self {
        Self { identifier }
    }

    /// Language of normalizer output, ignoring demojized `:name:` tokens
    pub fn identify(&self, cleaned: &str) -> Language {
        self.identifier.identify(&without_emoji_names(cleaned))
    }

    /// Extract features from normalizer output. Never fails.
    pub fn extract(&self, cleaned: &str) -> Features {
        let language = self.identify(cleaned);
        extract_with_language(cleaned, language)
    }
}

/// Feature extraction with the language already decided
pub fn extract_with_language(cleaned: &str, language: Language) -> Features {
    let char_count = cleaned.chars().count();
    let denom = char_count.max(1) as f64;

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let word_count = words.len();

    let mut has_numbers = false;
    let mut has_bengali = false;
    let mut has_english = false;
    let mut exclamation_count = 0;
    let mut question_count = 0;
    let mut uppercase = 0usize;
    let mut vowel_signs = 0usize;
    let mut spaces = 0usize;

    for c in cleaned.chars() {
        has_numbers |= c.is_ascii_digit();
        match Script::of(c) {
            Script::Bengali => {
                has_bengali = true;
                if is_bengali_vowel_sign(c) {
                    vowel_signs += 1;
                }
            }
            Script::Latin => has_english = true,
            Script::Other => {}
        }
        match c {
            '!' => exclamation_count += 1,
            '?' => question_count += 1,
            ' ' => spaces += 1,
            _ => {}
        }
        if c.is_uppercase() {
            uppercase += 1;
        }
    }

    let avg_word_length = if word_count == 0 {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    };

    Features {
        language,
        word_count,
        char_count,
        has_numbers,
        has_bengali,
        has_english,
        exclamation_count,
        question_count,
        capital_ratio: uppercase as f64 / denom,
        is_short: word_count < 5,
        is_long: word_count > 100,
        repeated_char_ratio: repeated_runs(cleaned) as f64 / denom,
        consonant_clusters: CONSONANT_CLUSTER.find_iter(cleaned).count(),
        vowel_ratio: if has_bengali {
            vowel_signs as f64 / denom
        } else {
            0.0
        },
        space_ratio: spaces as f64 / denom,
        avg_word_length,
    }
}

/// Dependent vowel signs (kar) of the Bengali block
pub fn is_bengali_vowel_sign(c: char) -> bool {
    matches!(
        c,
        '\u{09BE}'..='\u{09C4}' | '\u{09C7}' | '\u{09C8}' | '\u{09CB}' | '\u{09CC}' | '\u{09D7}'
    )
}

/// Runs of three or more identical characters
fn repeated_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut len = 0usize;

    for c in text.chars() {
        if Some(c) == prev {
            len += 1;
        } else {
            if len >= REPEAT_RUN {
                runs += 1;
            }
            prev = Some(c);
            len = 1;
        }
    }
    if len >= REPEAT_RUN {
        runs += 1;
    }
    runs
}
