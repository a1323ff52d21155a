//! General-purpose language detection for text the script ratios cannot
//! settle

use complaint_triage_core::{Language, LanguageDetector};
use whatlang::Lang;

/// Trigram-based detector backed by `whatlang`
#[derive(Debug, Clone, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    /// Bengali maps to `bn`, every other detected language to `en`
    fn detect(&self, text: &str) -> Option<Language> {
        let info = whatlang::detect(text)?;
        if info.lang() == Lang::Ben {
            Some(Language::Bengali)
        } else {
            Some(Language::English)
        }
    }

    fn name(&self) -> &str {
        "whatlang"
    }
}
