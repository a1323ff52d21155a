//! Error types for the text processing crate
//!
//! Only analyzer construction can fail. Every per-text operation is total.

use complaint_triage_config::{ConfigError, LexiconError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
