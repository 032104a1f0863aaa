//! CLI command implementations.

pub mod api;
pub mod config;
pub mod emit;
pub mod features;
pub mod time;

use anyhow::{Context as _, Result};
use frontlog_core::console::StdConsole;
use frontlog_core::{hooks, Config, FrontendLogger};
use frontlog_types::{IntoLogLevel, LogFormat, LoggerConfig};
use std::sync::Arc;
use crate::cli::Cli;

/// Resolve the effective configuration: file, then environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    config.apply_process_env()?;
    let mut resolved = config.logger_config()?;

    if let Some(level) = &cli.level {
        resolved.level = level.into_level()?;
    }
    if let Some(format) = &cli.format {
        resolved.format = format.parse::<LogFormat>()?;
    }
    for feature in &cli.disabled {
        resolved.features.insert(feature.clone(), false);
    }

    Ok(resolved)
}

/// Build the process logger and install the global failure hooks.
pub fn build_logger(cli: &Cli) -> Result<Arc<FrontendLogger>> {
    let config = resolve_config(cli)?;
    let console = Arc::new(StdConsole::new(config.format));
    let logger = Arc::new(FrontendLogger::from_config(&config, console));

    hooks::install(logger.clone())?;
    tracing::debug!(level = %logger.level(), "Logger ready");
    Ok(logger)
}
