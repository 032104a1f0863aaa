//! # Frontlog Core
//!
//! Console logging facade, named timers, global failure hooks and layered
//! configuration for Frontlog.
//!
//! This crate provides:
//!
//! - **Facade**: [`FrontendLogger`], level/category-aware logging with feature flags
//! - **Aliases**: [`Logger`], the short-hand surface fixed to the `APP` category
//! - **Consoles**: stdout/stderr, in-memory and `tracing` sinks
//! - **Timers**: `console.time` / `console.timeEnd` style named timers
//! - **Hooks**: panic and failed-task reporting through the facade
//! - **Configuration**: YAML file, environment and programmatic layers
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use frontlog_core::{config::Config, console::StdConsole, hooks, FrontendLogger, Logger};
//!
//! let mut config = Config::load("frontlog.yml")?;
//! config.apply_process_env()?;
//! let config = config.logger_config()?;
//!
//! let facade = Arc::new(FrontendLogger::from_config(&config, Arc::new(StdConsole::new(config.format))));
//! hooks::install(facade.clone())?;
//!
//! facade.page_load("Cart");
//! Logger::new(facade).info("ready");
//! # Ok::<(), frontlog_types::FrontlogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alias;
pub mod config;
pub mod console;
pub mod exception;
pub mod facade;
pub mod hooks;
pub mod host;
pub mod log;
pub mod term;
pub mod time;
pub mod timers;
pub mod util;

// Re-export commonly used items
pub use alias::{Logger, PerfAction};
pub use config::Config;
pub use exception::Exception;
pub use facade::{ApiResponse, FrontendLogger};
pub use host::HostEnvironment;
pub use frontlog_types::{context, Context, Feature, FrontlogError, LogLevel, Result};

/// Frontlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frontlog application name
pub const APP_NAME: &str = "frontlog";
