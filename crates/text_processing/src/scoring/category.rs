//! Category classification by bilingual keyword hits

use complaint_triage_core::{Category, CategoryResult, Confidence};
use std::collections::BTreeMap;

use super::{keyword_hits, ScoringEngine};

impl ScoringEngine {
    /// Category with the most keyword hits. Ties go to the earlier
    /// category in declaration order; no hits at all yields `Other`.
    pub fn classify_category(&self, text: &str) -> CategoryResult {
        let lower = text.to_lowercase();
        let mut all_scores = BTreeMap::new();
        let mut best: Option<(Category, usize)> = None;

        for category in Category::SCORED {
            let hits = keyword_hits(&lower, self.lexicon.category_keywords(category));
            if hits == 0 {
                continue;
            }
            all_scores.insert(category, hits);
            match best {
                Some((_, best_hits)) if hits <= best_hits => {}
                _ => best = Some((category, hits)),
            }
        }

        match best {
            Some((category, hits)) => CategoryResult {
                category,
                confidence: if hits >= 2 {
                    Confidence::High
                } else {
                    Confidence::Medium
                },
                matched_keywords: hits,
                all_scores,
            },
            None => CategoryResult {
                category: Category::Other,
                confidence: Confidence::Low,
                matched_keywords: 0,
                all_scores,
            },
        }
    }
}
