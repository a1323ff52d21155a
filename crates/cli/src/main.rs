//! Complaint Triage Entry Point

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use complaint_triage_cli::{execute, init_tracing, Cli};
use complaint_triage_text_processing::ComplaintAnalyzer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Priority: CLI flags > env vars > config/{env} > config/default > defaults
    let settings = cli.resolve_settings(Path::new("config"))?;

    init_tracing(&settings);
    tracing::debug!(
        environment = ?settings.environment,
        config_env = cli.environment().as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let analyzer = ComplaintAnalyzer::from_settings(&settings)
        .context("Failed to initialize complaint analyzer")?;

    execute(cli.command, Arc::new(analyzer), &settings).await
}
