//! Language identification
//!
//! Script ratios decide first. Latin-only text is then split between
//! English and romanized Bengali using stop-word and Banglish lexicon hits.
//! Text that neither script dominates goes to a fallback detector; when that
//! fails too the result degrades to English.

mod fallback;

pub use fallback::WhatlangDetector;

use complaint_triage_config::Lexicon;
use complaint_triage_core::{Language, LanguageDetector, Script};
use std::sync::Arc;

/// Both scripts above this ratio => mixed
const MIXED_RATIO: f64 = 0.15;
/// A single script above this ratio dominates
const DOMINANT_RATIO: f64 = 0.3;

/// Character counts per script over a text span
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptRatios {
    pub bengali: f64,
    pub latin: f64,
    /// At least one alphabetic character of any script
    pub has_letters: bool,
}

impl ScriptRatios {
    pub fn measure(text: &str) -> Self {
        let mut total = 0usize;
        let mut bengali = 0usize;
        let mut latin = 0usize;
        let mut has_letters = false;

        for c in text.chars() {
            total += 1;
            match Script::of(c) {
                Script::Bengali => bengali += 1,
                Script::Latin => latin += 1,
                Script::Other => {}
            }
            has_letters |= c.is_alphabetic();
        }

        let denom = total.max(1) as f64;
        Self {
            bengali: bengali as f64 / denom,
            latin: latin as f64 / denom,
            has_letters: has_letters || bengali > 0,
        }
    }
}

/// Classifies text as Bengali, English, Banglish or unknown
#[derive(Clone)]
pub struct LanguageIdentifier {
    lexicon: Arc<Lexicon>,
    fallback: Arc<dyn LanguageDetector>,
}

impl std::fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageIdentifier")
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl LanguageIdentifier {
    /// Identifier with the `whatlang` fallback
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_fallback(lexicon, Arc::new(WhatlangDetector::new()))
    }

    pub fn with_fallback(lexicon: Arc<Lexicon>, fallback: Arc<dyn LanguageDetector>) -> Self {
        Self { lexicon, fallback }
    }

    /// Identify the language regime of `text`. Never fails.
    pub fn identify(&self, text: &str) -> Language {
        let ratios = ScriptRatios::measure(text);

        if !ratios.has_letters {
            return Language::Unknown;
        }

        if ratios.bengali > MIXED_RATIO && ratios.latin > MIXED_RATIO {
            return Language::Mixed;
        }

        if ratios.bengali > DOMINANT_RATIO {
            return Language::Bengali;
        }

        if ratios.latin > DOMINANT_RATIO {
            return self.split_latin(text);
        }

        match self.fallback.detect(text) {
            Some(language) => {
                tracing::debug!(
                    detector = self.fallback.name(),
                    language = language.code(),
                    "Script ratios inconclusive, used fallback detector"
                );
                language
            }
            None => {
                tracing::warn!(
                    detector = self.fallback.name(),
                    "Fallback language detection failed, defaulting to English"
                );
                Language::English
            }
        }
    }

    /// English or Banglish, for text written in Latin script
    fn split_latin(&self, text: &str) -> Language {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Language::English;
        }
        let total = tokens.len() as f64;

        let stop_words = tokens
            .iter()
            .filter(|t| self.lexicon.is_stop_word(t))
            .count();
        if stop_words >= 2 || (tokens.len() > 3 && stop_words as f64 / total > 0.2) {
            return Language::English;
        }

        let markers = tokens
            .iter()
            .filter(|t| self.lexicon.is_banglish_marker(t) && !self.lexicon.is_stop_word(t))
            .count();
        if markers >= 2 || markers as f64 / total > 0.3 {
            return Language::Mixed;
        }

        Language::English
    }
}

/// Lower-cased whitespace tokens with surrounding ASCII punctuation removed
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
