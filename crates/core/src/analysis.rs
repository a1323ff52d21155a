//! Analysis result records
//!
//! One `AnalysisResult` is produced per complaint. It aggregates five
//! independent sub-results; only the category label flows into priority and
//! severity scoring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Category, Language, Result};

/// Coarse confidence attached to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// `High` when a unit-interval score sits more than 0.3 away from 0.5
    pub fn from_score_distance(score: f64) -> Self {
        if (score - 0.5).abs() > 0.3 {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }
}

/// "Is this a real complaint?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityResult {
    /// In [0, 1]
    pub score: f64,
    pub is_valid: bool,
    pub is_gibberish: bool,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    pub confidence: Confidence,
    /// Keyword hits for the winning category
    pub matched_keywords: usize,
    /// Hit counts for every category that matched at least once
    pub all_scores: BTreeMap<Category, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    Urgent,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    /// In [0, 1]
    pub score: f64,
    pub level: PriorityLevel,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    Critical,
    Major,
    Moderate,
    Minor,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Moderate => "Moderate",
            Self::Minor => "Minor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    /// In [0, 1]
    pub score: f64,
    pub level: SeverityLevel,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionIntensity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// In [-1, 1]
    pub score: f64,
    pub label: SentimentLabel,
    pub emotion_intensity: EmotionIntensity,
    pub reasons: Vec<String>,
}

/// Counts echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisMetadata {
    pub word_count: usize,
    pub char_count: usize,
    pub has_numbers: bool,
}

/// Optional request context echoed into the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComplaintContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl ComplaintContext {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none() && self.shop_name.is_none() && self.product_name.is_none()
    }
}

/// A complaint as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComplaintRequest {
    /// Caller-side identifier, echoed back untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "complaint_text", alias = "description")]
    pub text: String,
    #[serde(flatten)]
    pub context: ComplaintContext,
}

impl ComplaintRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Full triage record for one complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub validity: ValidityResult,
    pub category: CategoryResult,
    pub priority: PriorityResult,
    pub severity: SeverityResult,
    pub sentiment: SentimentResult,
    pub summary: String,
    pub language: Language,
    /// Text exactly as submitted
    pub original_text: String,
    /// Normalizer output, the text all features were computed on
    pub cleaned_text: String,
    /// Bengali rendering of Banglish input, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    pub metadata: AnalysisMetadata,
    #[serde(default, skip_serializing_if = "ComplaintContext::is_empty")]
    pub context: ComplaintContext,
}

impl AnalysisResult {
    /// Single-line JSON record, as written by batch jobs
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
