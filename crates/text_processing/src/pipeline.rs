//! Complaint analysis pipeline
//!
//! normalize -> extract features (identifies language) -> category ->
//! priority/severity (given the category) -> sentiment -> validity ->
//! summary. Stateless per call; the analyzer itself is immutable and can be
//! shared across threads.

use complaint_triage_config::{Lexicon, ScoringConfig, Settings};
use complaint_triage_core::{
    AnalysisMetadata, AnalysisResult, ComplaintContext, ComplaintRequest, Features, Language,
    LanguageDetector,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    banglish::BanglishNormalizer,
    features::FeatureExtractor,
    language::{LanguageIdentifier, WhatlangDetector},
    normalizer::normalize,
    scoring::ScoringEngine,
    summary::summarize,
    Result,
};

/// Per-call analysis switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// For Banglish complaints, attach a Bengali rendering and run the
    /// keyword scorers over it
    #[serde(default)]
    pub translate_banglish: bool,
}

/// The complaint triage pipeline
#[derive(Debug, Clone)]
pub struct ComplaintAnalyzer {
    extractor: FeatureExtractor,
    banglish: BanglishNormalizer,
    scoring: ScoringEngine,
}

impl Default for ComplaintAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), ScoringConfig::default())
    }
}

impl ComplaintAnalyzer {
    /// Analyzer with the `whatlang` fallback detector
    pub fn new(lexicon: Lexicon, config: ScoringConfig) -> Self {
        Self::with_detector(lexicon, config, Arc::new(WhatlangDetector::new()))
    }

    /// Analyzer with a caller-supplied fallback detector
    pub fn with_detector(
        lexicon: Lexicon,
        config: ScoringConfig,
        detector: Arc<dyn LanguageDetector>,
    ) -> Self {
        let lexicon = Arc::new(lexicon);
        let identifier = LanguageIdentifier::with_fallback(lexicon.clone(), detector);

        tracing::info!(
            banglish_entries = lexicon.banglish_len(),
            fuzzy_cutoff = config.fuzzy_match_cutoff,
            "Complaint analyzer ready"
        );

        Self {
            extractor: FeatureExtractor::new(identifier),
            banglish: BanglishNormalizer::new(lexicon.clone(), config.fuzzy_match_cutoff),
            scoring: ScoringEngine::new(lexicon, config),
        }
    }

    /// Validate settings and load the configured lexicon. Any lexicon
    /// problem aborts construction.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let lexicon = Lexicon::from_source(&settings.lexicon)?;
        Ok(Self::new(lexicon, settings.scoring.clone()))
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scoring.config()
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.scoring.lexicon()
    }

    /// Analyze one complaint with default options
    pub fn analyze(&self, raw_text: &str) -> AnalysisResult {
        self.analyze_with(raw_text, AnalyzeOptions::default())
    }

    pub fn analyze_with(&self, raw_text: &str, options: AnalyzeOptions) -> AnalysisResult {
        let cleaned = normalize(raw_text);
        let features = self.extractor.extract(&cleaned);

        let translated = (options.translate_banglish && features.language == Language::Mixed)
            .then(|| self.banglish.to_bengali(&cleaned));
        let scoring_text = translated.as_deref().unwrap_or(&cleaned);

        let result = self.score(raw_text, cleaned.clone(), scoring_text, &features);
        let result = AnalysisResult {
            translated_text: translated,
            ..result
        };

        record_metrics(&result);
        tracing::debug!(
            language = result.language.code(),
            category = result.category.category.id(),
            priority = result.priority.level.as_str(),
            severity = result.severity.level.as_str(),
            valid = result.validity.is_valid,
            "Analyzed complaint"
        );
        result
    }

    /// Analyze a request, echoing its id and context
    pub fn analyze_request(
        &self,
        request: &ComplaintRequest,
        options: AnalyzeOptions,
    ) -> AnalysisResult {
        let result = self.analyze_with(&request.text, options);
        AnalysisResult {
            id: request.id.clone(),
            context: request.context.clone(),
            ..result
        }
    }

    /// Analyze requests in order, one result per request
    pub fn analyze_batch(
        &self,
        requests: &[ComplaintRequest],
        options: AnalyzeOptions,
    ) -> Vec<AnalysisResult> {
        requests
            .iter()
            .map(|request| self.analyze_request(request, options))
            .collect()
    }

    /// Bengali rendering of Banglish text
    pub fn translate(&self, text: &str) -> String {
        self.banglish.to_bengali(&normalize(text))
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.extractor.identify(&normalize(text))
    }

    pub fn extract_features(&self, text: &str) -> Features {
        self.extractor.extract(&normalize(text))
    }

    /// Run every scorer. Category comes first since priority and severity
    /// depend on it; validity always judges the cleaned original.
    fn score(
        &self,
        original: &str,
        cleaned: String,
        scoring_text: &str,
        features: &Features,
    ) -> AnalysisResult {
        let category = self.scoring.classify_category(scoring_text);
        let label = category.category;
        let priority = self.scoring.classify_priority(scoring_text, features, label);
        let severity = self.scoring.classify_severity(scoring_text, features, label);
        let sentiment = self.scoring.score_sentiment(scoring_text, features);
        let validity = self.scoring.score_validity(&cleaned, features);
        let summary = summarize(&cleaned, self.config().summary_max_length);

        AnalysisResult {
            id: None,
            validity,
            category,
            priority,
            severity,
            sentiment,
            summary,
            language: features.language,
            original_text: original.to_string(),
            cleaned_text: cleaned,
            translated_text: None,
            metadata: AnalysisMetadata {
                word_count: features.word_count,
                char_count: features.char_count,
                has_numbers: features.has_numbers,
            },
            context: ComplaintContext::default(),
        }
    }
}

fn record_metrics(result: &AnalysisResult) {
    metrics::counter!("complaints_analyzed_total", "language" => result.language.code())
        .increment(1);
    if !result.validity.is_valid {
        metrics::counter!("complaints_invalid_total").increment(1);
    }
    if result.validity.is_gibberish {
        metrics::counter!("complaints_gibberish_total").increment(1);
    }
}
