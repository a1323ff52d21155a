//! Complaint triage command-line front end
//!
//! Argument parsing, settings overrides, tracing setup and the batch worker
//! pool. `main.rs` only wires these together.

pub mod batch;
pub mod commands;

pub use batch::{parse_requests, render_json_lines, run_batch};
pub use commands::{execute, Cli, Command};

use complaint_triage_config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Install the global subscriber. `RUST_LOG` wins over
/// `observability.log_level`; logs go to stderr so stdout stays parseable.
pub fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("complaint_triage={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
