//! Error types shared across the triage crates

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown label when parsing an enum from text
    #[error("Unknown {kind}: '{value}'")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias using the core error
pub type Result<T> = std::result::Result<T, Error>;
