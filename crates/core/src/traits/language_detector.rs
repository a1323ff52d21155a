//! Fallback language detection

use crate::Language;

/// General-purpose language detector consulted when script ratios are
/// inconclusive.
///
/// Returning `None` means detection failed; callers degrade to a default
/// language instead of surfacing an error.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`
    fn detect(&self, text: &str) -> Option<Language>;

    /// Detector name for logs
    fn name(&self) -> &str;
}

/// Detector that never detects anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLanguageDetector;

impl LanguageDetector for NoopLanguageDetector {
    fn detect(&self, _text: &str) -> Option<Language> {
        None
    }

    fn name(&self) -> &str {
        "noop"
    }
}
