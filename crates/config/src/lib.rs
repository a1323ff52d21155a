//! Configuration for complaint triage
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (COMPLAINT_TRIAGE__ prefix)
//!
//! The lexicon store lives here as well: built-in keyword tables and the
//! Banglish dictionary, optionally extended from files named in settings.

pub mod lexicon;
pub mod scoring;
pub mod settings;

pub use lexicon::{
    KeywordTables, Lexicon, LexiconError, LexiconSource, PriorityKeywords, SentimentKeywords,
    SeverityKeywords,
};
pub use scoring::{
    PriorityThresholds, ScoringConfig, SentimentThresholds, SeverityThresholds,
    ValidityThresholds,
};
pub use settings::{
    load_settings, load_settings_from, selected_environment, BatchConfig, ObservabilityConfig,
    RuntimeEnvironment, Settings, ENV_PREFIX, ENV_SELECTOR,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
