//! Command-line arguments and subcommand dispatch

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use complaint_triage_config::{load_settings_from, selected_environment, Settings};
use complaint_triage_core::{Category, Language};
use complaint_triage_text_processing::{AnalyzeOptions, ComplaintAnalyzer};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

use crate::batch::{parse_requests, render_json_lines, run_batch};

#[derive(Parser, Debug)]
#[command(
    name = "complaint-triage",
    version,
    about = "Triage Bengali, English and Banglish consumer complaints"
)]
pub struct Cli {
    /// Configuration environment (overrides COMPLAINT_TRIAGE_ENV)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Banglish dictionary file (JSON object or YAML mapping)
    #[arg(long, global = true)]
    pub banglish_lexicon: Option<PathBuf>,

    /// Keyword tables file (YAML or JSON)
    #[arg(long, global = true)]
    pub keywords: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one complaint and print the result as JSON
    Analyze {
        /// Complaint text; read from stdin when omitted
        text: Option<String>,

        /// Attach a Bengali translation for Banglish text
        #[arg(long)]
        translate: bool,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Analyze complaints line by line and write JSON lines
    Batch {
        /// Input file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Concurrent workers (defaults to `batch.workers`)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Attach Bengali translations for Banglish complaints
        #[arg(long)]
        translate: bool,
    },

    /// Transliterate Banglish text to Bengali script
    Translate { text: String },

    /// Print the identified language code
    DetectLanguage { text: String },

    /// Print active thresholds, categories and language regimes
    Info,
}

impl Cli {
    /// Configuration environment: `--env`, else `COMPLAINT_TRIAGE_ENV`
    pub fn environment(&self) -> Option<String> {
        self.env.clone().or_else(selected_environment)
    }

    /// Load layered settings from `config_dir`, fold in command-line
    /// overrides and validate the result. Any failure is fatal.
    pub fn resolve_settings(&self, config_dir: &Path) -> Result<Settings> {
        let env = self.environment();
        let mut settings = load_settings_from(config_dir, env.as_deref()).with_context(|| {
            format!(
                "Failed to load settings (env: {})",
                env.as_deref().unwrap_or("default")
            )
        })?;
        self.apply_overrides(&mut settings);
        settings
            .validate()
            .context("Invalid settings after command-line overrides")?;
        Ok(settings)
    }

    /// Fold command-line overrides into loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(path) = &self.banglish_lexicon {
            settings.lexicon.banglish_path = Some(path.clone());
        }
        if let Some(path) = &self.keywords {
            settings.lexicon.keywords_path = Some(path.clone());
        }
        if let Command::Batch {
            workers, translate, ..
        } = &self.command
        {
            if let Some(workers) = workers {
                settings.batch.workers = *workers;
            }
            settings.batch.translate_banglish |= *translate;
        }
    }
}

/// Run a subcommand against a constructed analyzer
pub async fn execute(
    command: Command,
    analyzer: Arc<ComplaintAnalyzer>,
    settings: &Settings,
) -> Result<()> {
    match command {
        Command::Analyze {
            text,
            translate,
            pretty,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin().await?,
            };
            let options = AnalyzeOptions {
                translate_banglish: translate || settings.batch.translate_banglish,
            };
            let result = analyzer.analyze_with(&text, options);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
        }
        Command::Batch { input, output, .. } => {
            let raw = if input.as_os_str() == "-" {
                read_stdin().await?
            } else {
                tokio::fs::read_to_string(&input)
                    .await
                    .with_context(|| format!("Failed to read {}", input.display()))?
            };
            let requests = parse_requests(&raw)?;
            let options = AnalyzeOptions {
                translate_banglish: settings.batch.translate_banglish,
            };
            let results = run_batch(analyzer, requests, options, settings.batch.workers).await?;
            let rendered = render_json_lines(&results)?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, rendered)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), count = results.len(), "Wrote results");
                }
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(rendered.as_bytes()).await?;
                    stdout.flush().await?;
                }
            }
        }
        Command::Translate { text } => {
            println!("{}", analyzer.translate(&text));
        }
        Command::DetectLanguage { text } => {
            println!("{}", analyzer.detect_language(&text).code());
        }
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(&info(&analyzer))?);
        }
    }
    Ok(())
}

/// Thresholds and vocabulary of the running analyzer
pub fn info(analyzer: &ComplaintAnalyzer) -> serde_json::Value {
    let categories: Vec<_> = Category::SCORED
        .iter()
        .chain(std::iter::once(&Category::Other))
        .map(|c| {
            serde_json::json!({
                "id": c.id(),
                "label": c.label(),
                "bengali_label": c.bengali_label(),
                "high_priority": c.is_high_priority(),
            })
        })
        .collect();
    let languages: Vec<_> = Language::all()
        .iter()
        .map(|l| {
            serde_json::json!({
                "code": l.code(),
                "name": l.name(),
            })
        })
        .collect();

    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "languages": languages,
        "categories": categories,
        "scoring": analyzer.config(),
        "banglish_entries": analyzer.lexicon().banglish_len(),
    })
}

async fn read_stdin() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok::<_, anyhow::Error>(buf)
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_args() {
        let cli = Cli::try_parse_from([
            "complaint-triage",
            "batch",
            "--input",
            "complaints.jsonl",
            "--workers",
            "8",
            "--translate",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.batch.workers, 8);
        assert!(settings.batch.translate_banglish);
        match cli.command {
            Command::Batch { input, output, .. } => {
                assert_eq!(input, PathBuf::from("complaints.jsonl"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_lexicon_overrides() {
        let cli = Cli::try_parse_from([
            "complaint-triage",
            "detect-language",
            "dokan kharap",
            "--banglish-lexicon",
            "extra.json",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(
            settings.lexicon.banglish_path,
            Some(PathBuf::from("extra.json"))
        );
        assert_eq!(settings.batch.workers, 4);
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["complaint-triage", "serve"]).is_err());
    }

    #[test]
    fn test_info_lists_categories() {
        let value = info(&ComplaintAnalyzer::default());
        assert_eq!(value["categories"].as_array().unwrap().len(), 9);
        assert_eq!(value["languages"].as_array().unwrap().len(), 4);
        assert_eq!(value["languages"][2]["code"], "mixed");
        assert_eq!(value["languages"][2]["name"], "Banglish (Mixed)");
        assert_eq!(value["scoring"]["fuzzy_match_cutoff"], 0.85);
    }

    #[test]
    fn test_production_settings_with_missing_lexicon_fail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("production.yaml"),
            "environment: production\nlexicon:\n  banglish_path: /nonexistent/banglish.json\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from([
            "complaint-triage",
            "--env",
            "production",
            "detect-language",
            "dokan kharap",
        ])
        .unwrap();

        let err = cli.resolve_settings(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/banglish.json"));
    }

    #[test]
    fn test_production_override_to_missing_lexicon_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("production.yaml"), "environment: production\n").unwrap();
        let cli = Cli::try_parse_from([
            "complaint-triage",
            "--env",
            "production",
            "--keywords",
            "/nonexistent/keywords.yaml",
            "info",
        ])
        .unwrap();

        assert!(cli.resolve_settings(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_settings_without_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "complaint-triage",
            "--env",
            "development",
            "batch",
            "--workers",
            "3",
        ])
        .unwrap();

        let settings = cli.resolve_settings(dir.path()).unwrap();
        assert_eq!(settings.batch.workers, 3);
    }

    #[tokio::test]
    async fn test_batch_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        let output = dir.path().join("out.jsonl");
        std::fs::write(
            &input,
            "{\"id\": \"a\", \"text\": \"Dam onek beshi\"}\nThe rice was rotten\n",
        )
        .unwrap();

        let settings = Settings::default();
        let command = Command::Batch {
            input,
            output: Some(output.clone()),
            workers: None,
            translate: false,
        };
        execute(command, Arc::new(ComplaintAnalyzer::default()), &settings)
            .await
            .unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"id\":\"a\""));
        assert!(lines[1].contains("The rice was rotten"));
    }
}
