//! The ephemeral log record handed to console sinks.

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::{Channel, Context, LogLevel};

/// A single log record.
///
/// Records are built by the facade and immediately written out; nothing in
/// Frontlog retains them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Time the record was created
    pub timestamp: DateTime<Utc>,
    /// Severity
    pub level: LogLevel,
    /// Free-form grouping tag such as `API` or `UI`
    pub category: String,
    /// Primary message
    pub message: String,
    /// Additional context values
    #[serde(skip_serializing_if = "Context::is_empty")]
    pub context: Context,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        level: LogLevel,
        category: impl Into<String>,
        message: impl Into<String>,
        context: Context,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            category: category.into(),
            message: message.into(),
            context,
        }
    }

    /// Channel this record belongs on.
    pub fn channel(&self) -> Channel {
        self.level.channel()
    }

    /// Millisecond-precision UTC time of day, e.g. `14:03:27.512`.
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M:%S%.3f").to_string()
    }

    /// The `[time] [LEVEL] [CATEGORY]` prefix.
    pub fn prefix(&self) -> String {
        format!("[{}] [{}] [{}]", self.time_of_day(), self.level, self.category)
    }

    /// Full single-line rendering: prefix, message and, when present, the
    /// context as compact JSON.
    pub fn render(&self) -> String {
        if self.context.is_empty() {
            format!("{} {}", self.prefix(), self.message)
        } else {
            format!("{} {} {}", self.prefix(), self.message, self.context.to_json())
        }
    }
}
