//! # Frontlog Types
//!
//! Core types, traits, and enums shared across all Frontlog crates.
//!
//! This crate provides:
//!
//! - The ordered [`LogLevel`] and the console [`Channel`] it maps to
//! - [`LogRecord`] and its ordered key/value [`Context`]
//! - [`LoggerConfig`] and the well-known [`Feature`] flag names
//! - The [`Console`] sink trait
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use frontlog_types::{context, LogLevel, LogRecord};
//!
//! let level: LogLevel = "warn".parse().unwrap();
//! assert_eq!(level, LogLevel::Warn);
//! assert!(LogLevel::Error > level);
//!
//! let record = LogRecord::new(level, "CART", "stock low", context! { "sku" => "A-1" });
//! assert!(record.prefix().ends_with("[WARN] [CART]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod context;
pub mod record;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{FrontlogError, Result};
pub use enums::{Channel, IntoLogLevel, LogLevel};
pub use context::Context;
pub use record::LogRecord;
pub use traits::Console;
pub use config::{Feature, LogFormat, LoggerConfig};
