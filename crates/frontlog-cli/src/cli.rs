//! CLI structure and command definitions.

use clap::{Parser, Subcommand};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frontlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Leveled, category-tagged console logging", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "FRONTLOG_CONFIG", default_value = "frontlog.yml")]
    pub config: PathBuf,

    /// Minimum level (debug, info, warn, error or 0-3)
    #[arg(short, long, global = true)]
    pub level: Option<String>,

    /// Output format (pretty, compact, json)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Disable a logging feature (repeatable)
    #[arg(long = "disable", global = true, value_name = "FEATURE")]
    pub disabled: Vec<String>,

    /// Enable Frontlog's own diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit a single record
    Emit {
        /// Record level
        level: String,

        /// Category tag, e.g. API or UI
        category: String,

        /// Message text
        message: String,

        /// Context entries as key=value (value parsed as JSON when possible)
        #[arg(short = 'C', long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,

        /// Only emit if this feature is enabled
        #[arg(long)]
        feature: Option<String>,
    },

    /// Log an API call
    Api {
        /// HTTP method
        method: String,

        /// Request URL
        url: String,

        /// Response status (omit for calls without a response)
        #[arg(short, long)]
        status: Option<u16>,

        /// Request payload as JSON
        #[arg(long)]
        request: Option<String>,

        /// Response payload as JSON
        #[arg(long)]
        response: Option<String>,
    },

    /// Log a navigation
    Navigate {
        /// Previous location
        from: String,

        /// New location
        to: String,
    },

    /// Log a page load
    #[command(name = "page-load")]
    PageLoad {
        /// Page name
        name: String,

        /// Location to report
        #[arg(long)]
        url: Option<String>,
    },

    /// Run a command under a named timer
    Time {
        /// Timer label
        label: String,

        /// Command and arguments
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Show the feature flag table
    Features,

    /// Show the effective configuration
    Config,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        use crate::commands::*;

        // Printing the configuration must not install hooks or log
        if let Commands::Config = self.command {
            return config::execute(self);
        }

        let logger = build_logger(self)?;

        match &self.command {
            Commands::Emit { level, category, message, context, feature } => {
                emit::execute(&logger, level, category, message, context, feature.as_deref())
            }
            Commands::Api { method, url, status, request, response } => {
                api::execute(&logger, method, url, *status, request.as_deref(), response.as_deref())
            }
            Commands::Navigate { from, to } => {
                logger.navigation(from, to);
                Ok(())
            }
            Commands::PageLoad { name, url } => {
                if let Some(url) = url {
                    logger.set_location(url.as_str());
                }
                logger.page_load(name);
                Ok(())
            }
            Commands::Time { label, command } => {
                time::execute(&logger, label, command).await
            }
            Commands::Features => {
                features::execute(&logger)
            }
            Commands::Config => config::execute(self),
        }
    }
}
