//! Per-text feature vector

use serde::{Deserialize, Serialize};

use crate::Language;

/// Statistical and structural signals derived once per cleaned text.
///
/// Every ratio is computed against `max(char_count, 1)`. The gibberish
/// signals (`repeated_char_ratio`, `consonant_clusters`, `vowel_ratio`,
/// `space_ratio`, `avg_word_length`) only feed validity scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Features {
    pub language: Language,
    pub word_count: usize,
    pub char_count: usize,
    pub has_numbers: bool,
    pub has_bengali: bool,
    pub has_english: bool,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Uppercase chars / char_count
    pub capital_ratio: f64,
    /// word_count < 5
    pub is_short: bool,
    /// word_count > 100
    pub is_long: bool,
    /// Runs of 3+ identical chars / char_count
    pub repeated_char_ratio: f64,
    /// Runs of 4+ consecutive Latin consonants
    pub consonant_clusters: usize,
    /// Bengali vowel signs / char_count, 0 without Bengali
    pub vowel_ratio: f64,
    /// Spaces / char_count
    pub space_ratio: f64,
    pub avg_word_length: f64,
}

impl Features {
    /// Latin script only, no Bengali
    pub fn is_latin_only(&self) -> bool {
        self.has_english && !self.has_bengali
    }
}
