//! Priority classification

use complaint_triage_core::{Category, Confidence, Features, PriorityResult};

use super::{any_keyword, clamp_score, ScoringEngine};

impl ScoringEngine {
    /// Priority from urgency/safety keywords, emphasis and the category
    pub fn classify_priority(
        &self,
        text: &str,
        features: &Features,
        category: Category,
    ) -> PriorityResult {
        let lower = text.to_lowercase();
        let keywords = &self.lexicon.keywords().priority;
        let mut score = 0.5;
        let mut reasons = Vec::new();

        if any_keyword(&lower, &keywords.urgent) {
            score += 0.3;
            reasons.push("Urgent language".to_string());
        }

        if any_keyword(&lower, &keywords.high) {
            score += 0.2;
            reasons.push("Health or safety concern".to_string());
        }

        if features.exclamation_count >= 2 {
            score += 0.1;
            reasons.push("Emphatic punctuation".to_string());
        }

        if category.is_high_priority() {
            score += 0.15;
            reasons.push(format!("High-priority category: {}", category));
        }

        if features.word_count > 50 {
            score += 0.05;
            reasons.push("Detailed complaint".to_string());
        }

        let score = clamp_score(score, 0.0, 1.0);

        PriorityResult {
            score,
            level: self.config.priority_level(score),
            reasons,
            confidence: Confidence::from_score_distance(score),
        }
    }
}
