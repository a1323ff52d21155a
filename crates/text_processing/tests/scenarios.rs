//! End-to-end complaint scenarios through the analyzer
//!
//! Each test feeds raw complaint text through `ComplaintAnalyzer` and checks
//! the combined triage record.

use complaint_triage_config::{Lexicon, ScoringConfig};
use complaint_triage_core::{
    Category, ComplaintRequest, Language, PriorityLevel, SentimentLabel, SeverityLevel,
};
use complaint_triage_text_processing::{normalize, AnalyzeOptions, ComplaintAnalyzer};

const SPAM: &str = "WIN A FREE PRIZE CLICK HERE NOW!!! অফার পুরস্কার লটারি";
const KEYBOARD_MASH: &str = "aaaa bbbb cccc dddd eeee ffff gggg";
const HEALTH: &str =
    "জরুরি! আমার বাচ্চা এই দোকানের পণ্য খেয়ে অসুস্থ হয়েছে। দ্রুত ব্যবস্থা নিন।";
const BANGLISH: &str = "Ami ei shop theke kharap product kinechi. Dam o beshi niche.";

/// Spam is rejected by validity without touching the category decision
#[test]
fn test_spam_complaint() {
    let analyzer = ComplaintAnalyzer::default();
    let result = analyzer.analyze(SPAM);

    assert!(!result.validity.is_valid);
    assert!(result
        .validity
        .reasons
        .iter()
        .any(|r| r.starts_with("Spam keywords")));

    let engine = complaint_triage_text_processing::ScoringEngine::new(
        std::sync::Arc::new(Lexicon::builtin()),
        ScoringConfig::default(),
    );
    let category = engine.classify_category(&normalize(SPAM));
    assert_eq!(result.category, category);
}

/// Keyboard mashing is flagged as gibberish
#[test]
fn test_gibberish_complaint() {
    let analyzer = ComplaintAnalyzer::default();
    let result = analyzer.analyze(KEYBOARD_MASH);

    assert!(result.validity.is_gibberish);
    assert!(!result.validity.is_valid);
    assert!(result
        .validity
        .reasons
        .iter()
        .any(|r| r == "Excessive repeated characters"));

    let features = analyzer.extract_features(KEYBOARD_MASH);
    assert!(features.repeated_char_ratio > 0.15);
}

/// A sick child is the most urgent and severe kind of complaint
#[test]
fn test_health_complaint() {
    let analyzer = ComplaintAnalyzer::default();
    let result = analyzer.analyze(HEALTH);

    assert_eq!(result.language, Language::Bengali);
    assert_eq!(result.category.category, Category::HealthIssues);
    assert_eq!(result.priority.level, PriorityLevel::Urgent);
    assert_eq!(result.severity.level, SeverityLevel::Critical);
    assert!(result.validity.is_valid);
    assert_eq!(result.metadata.word_count, 12);
    assert_eq!(
        result.summary,
        normalize("আমার বাচ্চা এই দোকানের পণ্য খেয়ে অসুস্থ হয়েছে")
    );
}

/// Romanized Bengali reads as a real, well-formed complaint
#[test]
fn test_banglish_complaint() {
    let analyzer = ComplaintAnalyzer::default();
    let result = analyzer.analyze(BANGLISH);

    assert_eq!(result.language, Language::Mixed);
    assert!(result.validity.is_valid);
    assert!(!result.validity.is_gibberish);
    assert_eq!(result.validity.score, 1.0);
    for gibberish in [
        "Excessive repeated characters",
        "Too few spaces for natural text",
        "Too few vowels for English or Banglish",
    ] {
        assert!(!result.validity.reasons.iter().any(|r| r == gibberish));
    }
    assert_eq!(result.sentiment.label, SentimentLabel::Negative);
}

/// Transliterated Banglish identifies as Bengali, not mixed
#[test]
fn test_banglish_round_trip() {
    let analyzer = ComplaintAnalyzer::default();
    let bengali = analyzer.translate(BANGLISH);

    assert!(!bengali.chars().any(|c| c.is_ascii_alphabetic()));
    assert_eq!(analyzer.detect_language(&bengali), Language::Bengali);
}

#[test]
fn test_translate_mode_keeps_original_validity() {
    let analyzer = ComplaintAnalyzer::default();
    let plain = analyzer.analyze(BANGLISH);
    let translated = analyzer.analyze_with(
        BANGLISH,
        AnalyzeOptions {
            translate_banglish: true,
        },
    );

    assert_eq!(translated.validity, plain.validity);
    assert_eq!(translated.cleaned_text, plain.cleaned_text);
    assert_eq!(translated.language, Language::Mixed);
    assert_eq!(
        translated.translated_text.as_deref(),
        Some(normalize("আমি এই দোকান থেকে খারাপ পণ্য কিনেছি. দাম ও বেশি নিয়েছে.").as_str())
    );
    assert_eq!(translated.category.category, Category::PriceIssues);
}

#[test]
fn test_degenerate_inputs_produce_results() {
    let analyzer = ComplaintAnalyzer::default();
    for text in ["", "   ", "!!!???", "🙂🙂🙂", "।।।"] {
        let result = analyzer.analyze(text);
        assert!(!result.validity.is_valid, "{:?} should be invalid", text);
        assert_eq!(result.category.category, Category::Other);
        assert_eq!(result.original_text, text);
    }
}

#[test]
fn test_result_serializes_as_json_line() {
    let analyzer = ComplaintAnalyzer::default();
    let mut request = ComplaintRequest::new(HEALTH);
    request.id = Some("42".to_string());

    let result = analyzer.analyze_request(&request, AnalyzeOptions::default());
    let line = result.to_json_line().unwrap();
    assert!(!line.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["id"], "42");
    assert_eq!(value["language"], "bn");
    assert!(value.get("translated_text").is_none());
}
