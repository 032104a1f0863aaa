//! Terminal utilities for colored output.

use colored::*;
use frontlog_types::{Channel, LogLevel};
use std::io::{self, IsTerminal};

/// Check if the stream behind a channel is an interactive terminal.
pub fn is_terminal(channel: Channel) -> bool {
    match channel {
        Channel::Standard => io::stdout().is_terminal(),
        Channel::Warn | Channel::Error => io::stderr().is_terminal(),
    }
}

/// Color a level name the way the pretty console shows it.
pub fn level_label(level: LogLevel) -> ColoredString {
    match level {
        LogLevel::Debug => level.name().dimmed(),
        LogLevel::Info => level.name().green(),
        LogLevel::Warn => level.name().yellow().bold(),
        LogLevel::Error => level.name().red().bold(),
    }
}

/// Color a message body for its level. Only warnings and errors are tinted.
pub fn message_body(level: LogLevel, message: &str) -> ColoredString {
    match level {
        LogLevel::Warn => message.yellow(),
        LogLevel::Error => message.red(),
        LogLevel::Debug | LogLevel::Info => message.normal(),
    }
}
