//! Command-line entry points
//!
//! Each subcommand of the `esports-arena` binary has a `run_*` function here.
//! They share settings loading and logging setup.

pub mod access;
pub mod discover;
pub mod server;

use crate::{Settings, config::ConfigLoader, config::LoggingSettings};
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Long-running server output
    Stdout,
    /// One-shot commands keep stdout for their JSON result
    Stderr,
}

/// Load settings for a `--config` value. Without one, `ARENA_CONFIG` and
/// then the user config directory are tried. Environment overrides are
/// always applied.
pub fn load_settings(config: Option<&str>) -> crate::Result<Settings> {
    ConfigLoader::discover(config.map(Path::new)).load()
}

/// Log filter precedence: `--verbose`, then `RUST_LOG`, then the configured level
pub fn build_env_filter(verbose: bool, level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    }
}

/// Install the global subscriber. Later calls in the same process are no-ops.
pub fn init_logging(logging: &LoggingSettings, verbose: bool, target: LogTarget) {
    let filter = build_env_filter(verbose || logging.verbose, &logging.level);
    let writer = match target {
        LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
