//! Scoring thresholds
//!
//! Every label the analyzer emits is a threshold ladder over a clamped
//! score. The ladders live here so deployments can tune them without
//! touching the scorers.

use complaint_triage_core::{PriorityLevel, SentimentLabel, SeverityLevel};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Scoring configuration, the `scoring` section of the settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub validity: ValidityThresholds,
    #[serde(default)]
    pub priority: PriorityThresholds,
    #[serde(default)]
    pub severity: SeverityThresholds,
    #[serde(default)]
    pub sentiment: SentimentThresholds,
    /// Minimum similarity for a fuzzy Banglish dictionary match
    #[serde(default = "default_fuzzy_match_cutoff")]
    pub fuzzy_match_cutoff: f64,
    /// Summary length in characters, before the ellipsis
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: usize,
}

fn default_fuzzy_match_cutoff() -> f64 {
    0.85
}

fn default_summary_max_length() -> usize {
    100
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            validity: ValidityThresholds::default(),
            priority: PriorityThresholds::default(),
            severity: SeverityThresholds::default(),
            sentiment: SentimentThresholds::default(),
            fuzzy_match_cutoff: default_fuzzy_match_cutoff(),
            summary_max_length: default_summary_max_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityThresholds {
    /// score >= valid => is_valid
    pub valid: f64,
    /// score < gibberish => is_gibberish
    pub gibberish: f64,
}

impl Default for ValidityThresholds {
    fn default() -> Self {
        Self {
            valid: 0.6,
            gibberish: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    pub urgent: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            urgent: 0.85,
            high: 0.70,
            medium: 0.40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    pub critical: f64,
    pub major: f64,
    pub moderate: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: 0.8,
            major: 0.65,
            moderate: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentThresholds {
    /// score <= negative => Negative
    pub negative: f64,
    /// score >= positive => Positive
    pub positive: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            negative: -0.4,
            positive: 0.2,
        }
    }
}

impl ScoringConfig {
    pub fn is_valid(&self, score: f64) -> bool {
        score >= self.validity.valid
    }

    pub fn is_gibberish(&self, score: f64) -> bool {
        score < self.validity.gibberish
    }

    /// Priority level for a clamped priority score
    pub fn priority_level(&self, score: f64) -> PriorityLevel {
        if score >= self.priority.urgent {
            PriorityLevel::Urgent
        } else if score >= self.priority.high {
            PriorityLevel::High
        } else if score >= self.priority.medium {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    /// Severity level for a clamped severity score
    pub fn severity_level(&self, score: f64) -> SeverityLevel {
        if score >= self.severity.critical {
            SeverityLevel::Critical
        } else if score >= self.severity.major {
            SeverityLevel::Major
        } else if score >= self.severity.moderate {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Minor
        }
    }

    /// Sentiment label for a score in [-1, 1]
    pub fn sentiment_label(&self, score: f64) -> SentimentLabel {
        if score <= self.sentiment.negative {
            SentimentLabel::Negative
        } else if score >= self.sentiment.positive {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("scoring.validity.valid", self.validity.valid)?;
        unit_interval("scoring.validity.gibberish", self.validity.gibberish)?;
        if self.validity.gibberish > self.validity.valid {
            return Err(ConfigError::InvalidValue {
                field: "scoring.validity.gibberish".to_string(),
                message: format!(
                    "Must not exceed scoring.validity.valid ({}), got {}",
                    self.validity.valid, self.validity.gibberish
                ),
            });
        }

        descending(
            "scoring.priority",
            &[
                ("urgent", self.priority.urgent),
                ("high", self.priority.high),
                ("medium", self.priority.medium),
            ],
        )?;
        descending(
            "scoring.severity",
            &[
                ("critical", self.severity.critical),
                ("major", self.severity.major),
                ("moderate", self.severity.moderate),
            ],
        )?;

        let s = &self.sentiment;
        if !(-1.0..=1.0).contains(&s.negative) || !(-1.0..=1.0).contains(&s.positive) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.sentiment".to_string(),
                message: format!(
                    "Thresholds must be between -1.0 and 1.0, got {} / {}",
                    s.negative, s.positive
                ),
            });
        }
        if s.negative >= s.positive {
            return Err(ConfigError::InvalidValue {
                field: "scoring.sentiment.negative".to_string(),
                message: format!(
                    "Must be below scoring.sentiment.positive ({}), got {}",
                    s.positive, s.negative
                ),
            });
        }

        if !(0.0 < self.fuzzy_match_cutoff && self.fuzzy_match_cutoff <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.fuzzy_match_cutoff".to_string(),
                message: format!("Must be in (0.0, 1.0], got {}", self.fuzzy_match_cutoff),
            });
        }

        if self.summary_max_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.summary_max_length".to_string(),
                message: "Must be positive".to_string(),
            });
        }

        Ok(())
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("Must be between 0.0 and 1.0, got {}", value),
        });
    }
    Ok(())
}

/// Ladder rungs must sit in the unit interval, strictly descending
fn descending(section: &str, rungs: &[(&str, f64)]) -> Result<(), ConfigError> {
    for (name, value) in rungs {
        unit_interval(&format!("{}.{}", section, name), *value)?;
    }
    for pair in rungs.windows(2) {
        let (upper, lower) = (pair[0], pair[1]);
        if lower.1 >= upper.1 {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.{}", section, lower.0),
                message: format!(
                    "Must be below {}.{} ({}), got {}",
                    section, upper.0, upper.1, lower.1
                ),
            });
        }
    }
    Ok(())
}
