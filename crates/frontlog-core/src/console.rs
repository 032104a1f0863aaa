//! Console sinks.
//!
//! - [`StdConsole`] writes to the process streams: the standard channel goes to
//!   stdout, warnings and errors to stderr.
//! - [`MemoryConsole`] keeps everything in memory, for tests and for embedding
//!   applications that want to inspect output.
//! - [`TracingConsole`] turns records into `tracing` events.

use colored::*;
use frontlog_types::{Channel, Console, LogFormat, LogLevel, LogRecord};
use parking_lot::Mutex;
use std::io::{self, Write};
use crate::term;

/// Console backed by stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole {
    format: LogFormat,
}

impl StdConsole {
    /// Create a console writing in `format`.
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }

    /// Output format in use.
    pub fn format(&self) -> LogFormat {
        self.format
    }

    fn line(&self, record: &LogRecord) -> String {
        match self.format {
            LogFormat::Json => serde_json::to_string(record).unwrap_or_else(|_| record.render()),
            LogFormat::Compact => record.render(),
            LogFormat::Pretty if term::is_terminal(record.channel()) => pretty(record),
            LogFormat::Pretty => record.render(),
        }
    }

    fn write(channel: Channel, line: &str) {
        // A console that cannot be written to is not the caller's problem.
        let _ = match channel {
            Channel::Standard => writeln!(io::stdout().lock(), "{}", line),
            Channel::Warn | Channel::Error => writeln!(io::stderr().lock(), "{}", line),
        };
    }
}

fn pretty(record: &LogRecord) -> String {
    let prefix = format!(
        "{} {} {}",
        format!("[{}]", record.time_of_day()).dimmed(),
        format!("[{}]", term::level_label(record.level)),
        format!("[{}]", record.category).cyan(),
    );
    let body = term::message_body(record.level, &record.message);

    if record.context.is_empty() {
        format!("{} {}", prefix, body)
    } else {
        format!("{} {} {}", prefix, body, record.context.to_json().to_string().dimmed())
    }
}

impl Console for StdConsole {
    fn record(&self, record: &LogRecord) {
        Self::write(record.channel(), &self.line(record));
    }

    fn print(&self, channel: Channel, text: &str) {
        Self::write(channel, text);
    }

    fn console_type(&self) -> &'static str {
        "stdio"
    }
}

/// Console that captures output in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    records: Mutex<Vec<LogRecord>>,
    printed: Mutex<Vec<(Channel, String)>>,
}

impl MemoryConsole {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Records written at `level`.
    pub fn records_at(&self, level: LogLevel) -> Vec<LogRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<LogRecord> {
        self.records.lock().last().cloned()
    }

    /// Plain platform messages written so far.
    pub fn printed(&self) -> Vec<(Channel, String)> {
        self.printed.lock().clone()
    }

    /// Drop everything captured.
    pub fn clear(&self) {
        self.records.lock().clear();
        self.printed.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn record(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }

    fn print(&self, channel: Channel, text: &str) {
        self.printed.lock().push((channel, text.to_string()));
    }

    fn console_type(&self) -> &'static str {
        "memory"
    }
}

/// Console that forwards into `tracing`.
///
/// Categories become the `category` field; context is attached as a JSON
/// string in the `context` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn record(&self, record: &LogRecord) {
        let category = record.category.as_str();
        let context = record.context.to_json().to_string();
        let message = record.message.as_str();

        match record.level {
            LogLevel::Debug => tracing::debug!(category, context = %context, "{}", message),
            LogLevel::Info => tracing::info!(category, context = %context, "{}", message),
            LogLevel::Warn => tracing::warn!(category, context = %context, "{}", message),
            LogLevel::Error => tracing::error!(category, context = %context, "{}", message),
        }
    }

    fn print(&self, channel: Channel, text: &str) {
        match channel {
            Channel::Standard => tracing::info!("{}", text),
            Channel::Warn => tracing::warn!("{}", text),
            Channel::Error => tracing::error!("{}", text),
        }
    }

    fn console_type(&self) -> &'static str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontlog_types::Context;

    #[test]
    fn test_memory_console_captures() {
        let console = MemoryConsole::new();
        console.record(&LogRecord::new(LogLevel::Info, "UI", "clicked", Context::new()));
        console.record(&LogRecord::new(LogLevel::Error, "API", "failed", Context::new()));
        console.print(Channel::Warn, "Timer 'x' does not exist");

        assert_eq!(console.records().len(), 2);
        assert_eq!(console.records_at(LogLevel::Error)[0].message, "failed");
        assert_eq!(console.last().unwrap().category, "API");
        assert_eq!(console.printed().len(), 1);

        console.clear();
        assert!(console.records().is_empty());
        assert!(console.printed().is_empty());
    }

    #[test]
    fn test_std_console_lines() {
        let record = LogRecord::new(LogLevel::Warn, "CART", "low stock", Context::new().with("sku", "A-1"));

        let json = StdConsole::new(LogFormat::Json).line(&record);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["category"], "CART");
        assert_eq!(value["context"]["sku"], "A-1");

        let compact = StdConsole::new(LogFormat::Compact).line(&record);
        assert_eq!(compact, record.render());
    }

    #[test]
    fn test_console_types() {
        assert_eq!(StdConsole::default().console_type(), "stdio");
        assert_eq!(MemoryConsole::new().console_type(), "memory");
        assert_eq!(TracingConsole.console_type(), "tracing");
    }
}
