//! Core trait definitions for Frontlog abstractions.

use crate::{Channel, LogRecord};

/// A platform console: the sink log records end up in.
///
/// Implementations must not fail; a console that cannot write drops the
/// output. They must also not log through the facade that feeds them, since
/// nothing guards against the resulting recursion.
pub trait Console: Send + Sync {
    /// Write a log record to the channel selected by its level.
    fn record(&self, record: &LogRecord);

    /// Write a plain platform message, such as a timer report or a timer
    /// misuse warning.
    fn print(&self, channel: Channel, text: &str);

    /// Get the console type name (e.g., "stdio", "memory").
    fn console_type(&self) -> &'static str;
}
