//! Severity classification

use complaint_triage_core::{Category, Confidence, Features, SeverityResult};

use super::{any_keyword, clamp_score, ScoringEngine};

impl ScoringEngine {
    /// Severity from harm keywords, the category and health/money impact
    pub fn classify_severity(
        &self,
        text: &str,
        _features: &Features,
        category: Category,
    ) -> SeverityResult {
        let lower = text.to_lowercase();
        let tables = self.lexicon.keywords();
        let mut score = 0.5;
        let mut reasons = Vec::new();

        if any_keyword(&lower, &tables.severity.critical) {
            score += 0.3;
            reasons.push("Critical harm reported".to_string());
        }

        if any_keyword(&lower, &tables.severity.major) {
            score += 0.2;
            reasons.push("Major defect reported".to_string());
        }

        if any_keyword(&lower, &tables.severity.moderate) {
            score += 0.1;
            reasons.push("Moderate problem reported".to_string());
        }

        match category {
            Category::HealthIssues | Category::Fraud => {
                score += 0.2;
                reasons.push(format!("Serious category: {}", category));
            }
            Category::ExpiredProducts | Category::QualityIssues => {
                score += 0.15;
                reasons.push(format!("Product safety category: {}", category));
            }
            _ => {}
        }

        if any_keyword(&lower, &tables.health_impact) {
            score += 0.15;
            reasons.push("Health impact".to_string());
        }

        if any_keyword(&lower, &tables.financial_loss) {
            score += 0.05;
            reasons.push("Financial loss".to_string());
        }

        let score = clamp_score(score, 0.0, 1.0);

        SeverityResult {
            score,
            level: self.config.severity_level(score),
            reasons,
            confidence: Confidence::from_score_distance(score),
        }
    }
}
