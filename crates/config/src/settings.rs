//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ConfigError, LexiconSource, ScoringConfig};

/// Environment variable prefix, e.g. `COMPLAINT_TRIAGE__BATCH__WORKERS=8`
pub const ENV_PREFIX: &str = "COMPLAINT_TRIAGE";

/// Variable naming the environment-specific config file to layer in
pub const ENV_SELECTOR: &str = "COMPLAINT_TRIAGE_ENV";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Relaxed validation, warnings only
    #[default]
    Development,
    Staging,
    /// All validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Thresholds for every scorer
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Optional lexicon files
    #[serde(default)]
    pub lexicon: LexiconSource,

    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// EnvFilter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Concurrent analysis workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Attach Bengali translations for Banglish complaints
    #[serde(default)]
    pub translate_banglish: bool,
}

fn default_workers() -> usize {
    4
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            translate_banglish: false,
        }
    }
}

const MAX_WORKERS: usize = 256;

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.validate_batch()?;
        self.validate_lexicon()?;
        Ok(())
    }

    fn validate_batch(&self) -> Result<(), ConfigError> {
        if self.batch.workers == 0 || self.batch.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidValue {
                field: "batch.workers".to_string(),
                message: format!(
                    "Must be between 1 and {}, got {}",
                    MAX_WORKERS, self.batch.workers
                ),
            });
        }
        Ok(())
    }

    /// Missing lexicon files are fatal in strict environments and caught
    /// again at lexicon load everywhere else
    fn validate_lexicon(&self) -> Result<(), ConfigError> {
        let paths = [
            ("lexicon.banglish_path", &self.lexicon.banglish_path),
            ("lexicon.keywords_path", &self.lexicon.keywords_path),
        ];
        for (field, path) in paths {
            let Some(path) = path else { continue };
            if path.exists() {
                continue;
            }
            if self.environment.is_strict() {
                return Err(ConfigError::FileNotFound(format!(
                    "{}: {}",
                    field,
                    path.display()
                )));
            }
            tracing::warn!(field, path = %path.display(), "Configured lexicon file does not exist");
        }
        Ok(())
    }
}

/// Load settings from `config/default`, then `config/{env}`, then
/// `COMPLAINT_TRIAGE__*` environment variables
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Same layering as [`load_settings`] with config files read from
/// `config_dir`. Absent files are skipped; present but broken ones and
/// settings that fail [`Settings::validate`] are errors.
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_file = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_file.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_file = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_file.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

/// Environment name from `COMPLAINT_TRIAGE_ENV`, if set
pub fn selected_environment() -> Option<String> {
    std::env::var(ENV_SELECTOR).ok().filter(|s| !s.trim().is_empty())
}
