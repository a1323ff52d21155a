//! Complaint text analysis
//!
//! This crate turns raw consumer complaints (Bengali, English or Banglish)
//! into structured triage records:
//! - **Normalization**: URLs, emails, emoji, punctuation runs, Bengali digits
//! - **Language Identification**: script ratios, Banglish lexicon, fallback detector
//! - **Banglish Transliteration**: dictionary lookup with fuzzy matching
//! - **Features**: counts and ratios shared by every scorer
//! - **Scoring**: validity, category, priority, severity, sentiment
//! - **Summary**: first meaningful sentence, truncated
//!
//! # Example
//!
//! ```ignore
//! use complaint_triage_text_processing::ComplaintAnalyzer;
//!
//! let analyzer = ComplaintAnalyzer::default();
//! let result = analyzer.analyze("জরুরি! আমার বাচ্চা অসুস্থ হয়েছে।");
//! println!("{} / {}", result.category.category, result.priority.level.as_str());
//! ```

pub mod banglish;
pub mod features;
pub mod language;
pub mod normalizer;
pub mod scoring;
pub mod summary;

mod error;
mod pipeline;

pub use error::{Result, TextProcessingError};
pub use pipeline::{AnalyzeOptions, ComplaintAnalyzer};

pub use banglish::{BanglishNormalizer, Substitution};
pub use features::FeatureExtractor;
pub use language::{LanguageIdentifier, ScriptRatios, WhatlangDetector};
pub use normalizer::normalize;
pub use scoring::ScoringEngine;
pub use summary::summarize;
