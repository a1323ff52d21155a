//! Core traits and types for the complaint triage pipeline
//!
//! This crate provides foundational types used across all other crates:
//! - Language regimes (Bengali, English, code-mixed Banglish)
//! - Complaint categories with bilingual labels
//! - The per-text feature vector consumed by every scorer
//! - Analysis result records (validity, category, priority, severity, sentiment)
//! - Error types
//! - Traits for pluggable collaborators (fallback language detection)

pub mod analysis;
pub mod category;
pub mod error;
pub mod features;
pub mod language;
pub mod traits;

pub use analysis::{
    AnalysisMetadata, AnalysisResult, CategoryResult, ComplaintContext, ComplaintRequest,
    Confidence, EmotionIntensity, PriorityLevel, PriorityResult, SentimentLabel, SentimentResult,
    SeverityLevel, SeverityResult, ValidityResult,
};
pub use category::Category;
pub use error::{Error, Result};
pub use features::Features;
pub use language::{Language, Script, SENTENCE_TERMINATORS};
pub use traits::{LanguageDetector, NoopLanguageDetector};
