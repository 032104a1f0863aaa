//! Diagnostics for Frontlog itself.
//!
//! Frontlog reports its own housekeeping (configuration loading, hook
//! installation, rejected level changes) through `tracing`. These helpers
//! install a subscriber for those events; applications that already have one
//! do not need them. Records written through the facade are unaffected unless
//! the logger uses [`TracingConsole`](crate::console::TracingConsole).

use frontlog_types::{FrontlogError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "frontlog=info,frontlog_core=info";

/// Initialize diagnostics with `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_default() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_with(filter, false)
}

/// Initialize diagnostics with an explicit filter directive, optionally as JSON.
pub fn init_with_filter(directive: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| FrontlogError::Config(format!("Invalid log filter '{}': {}", directive, e)))?;
    init_with(filter, json)
}

fn init_with(filter: EnvFilter, json: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| FrontlogError::Other(format!("Failed to initialize diagnostics: {}", e)))
}
