//! Sentiment scoring
//!
//! Complaints lean negative, so the base score is -0.5 before any word
//! is counted.

use complaint_triage_core::{EmotionIntensity, Features, SentimentResult};

use super::{clamp_score, keyword_hits, ScoringEngine};

impl ScoringEngine {
    pub fn score_sentiment(&self, text: &str, features: &Features) -> SentimentResult {
        let lower = text.to_lowercase();
        let words = &self.lexicon.keywords().sentiment;
        let mut score = -0.5;
        let mut reasons = Vec::new();

        let negative = keyword_hits(&lower, &words.negative);
        if negative > 0 {
            score -= 0.1 * negative as f64;
            reasons.push(format!("Negative words ({})", negative));
        }

        let positive = keyword_hits(&lower, &words.positive);
        if positive > 0 {
            score += 0.15 * positive as f64;
            reasons.push(format!("Positive words ({})", positive));
        }

        if features.exclamation_count >= 2 {
            score -= 0.1;
            reasons.push("Emphatic punctuation".to_string());
        }

        let score = clamp_score(score, -1.0, 1.0);
        let emotion_intensity = if score.abs() > 0.6 {
            EmotionIntensity::High
        } else {
            EmotionIntensity::Medium
        };

        SentimentResult {
            score,
            label: self.config.sentiment_label(score),
            emotion_intensity,
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, features};
    use super::*;
    use complaint_triage_core::SentimentLabel;

    fn sentiment(text: &str) -> SentimentResult {
        engine().score_sentiment(text, &features(text))
    }

    #[test]
    fn test_neutral_text_defaults_negative() {
        let result = sentiment("the shop closes at nine");
        assert_eq!(result.score, -0.5);
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.emotion_intensity, EmotionIntensity::Medium);
    }

    #[test]
    fn test_negative_words_deepen() {
        let result = sentiment("terrible, the worst rice! damaged bag!");
        // terrible, worst, damaged, plus two exclamations
        assert_eq!(result.score, -0.9);
        assert_eq!(result.emotion_intensity, EmotionIntensity::High);
    }

    #[test]
    fn test_positive_words_lift() {
        let result = sentiment("good rice, great service, satisfied, thanks");
        assert_eq!(result.score, 0.1);
        assert_eq!(result.label, SentimentLabel::Neutral);

        let result = sentiment("good great satisfied thanks ধন্যবাদ সন্তুষ্ট");
        assert_eq!(result.score, 0.4);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_score_is_clamped() {
        let result = sentiment(
            "bad terrible damaged angry loss fraud worst disappointed খারাপ নষ্ট বাজে!!",
        );
        assert_eq!(result.score, -1.0);
        assert_eq!(result.label, SentimentLabel::Negative);
    }
}
