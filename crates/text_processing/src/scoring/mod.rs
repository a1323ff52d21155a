//! Scoring engine
//!
//! Five independent heuristic scorers over text and features. Each starts
//! from a base score, applies additive adjustments, clamps to its range and
//! maps the result onto a threshold ladder from [`ScoringConfig`]. Scores
//! are rounded to three decimals before any label is derived, so labels and
//! flags always agree with the reported score.
//!
//! Category runs first: priority and severity take its label as input.

mod category;
mod priority;
mod sentiment;
mod severity;
mod validity;

use complaint_triage_config::{Lexicon, ScoringConfig};
use std::sync::Arc;

/// Keyword and threshold driven scorers sharing one lexicon
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    lexicon: Arc<Lexicon>,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(lexicon: Arc<Lexicon>, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

/// Number of distinct keywords found in `lower` as substrings
pub(crate) fn keyword_hits(lower: &str, keywords: &[String]) -> usize {
    keywords.iter().filter(|k| lower.contains(k.as_str())).count()
}

pub(crate) fn any_keyword(lower: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Clamp into `[min, max]`, then round to three decimals
pub(crate) fn clamp_score(score: f64, min: f64, max: f64) -> f64 {
    let clamped = score.clamp(min, max);
    (clamped * 1000.0).round() / 1000.0
}
