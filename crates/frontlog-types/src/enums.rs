//! Common enumerations used throughout Frontlog.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{FrontlogError, Result};

/// Severity of a log record.
///
/// Levels are totally ordered by their numeric rank; a record is shown when
/// its level is greater than or equal to the logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Verbose diagnostics
    Debug = 0,
    /// Informational messages
    Info = 1,
    /// Warnings
    Warn = 2,
    /// Errors
    Error = 3,
}

impl LogLevel {
    /// Every level, lowest rank first.
    pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Numeric rank of this level.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Upper-case name of this level.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Console channel records of this level are written to.
    pub fn channel(self) -> Channel {
        match self {
            LogLevel::Error => Channel::Error,
            LogLevel::Warn => Channel::Warn,
            LogLevel::Debug | LogLevel::Info => Channel::Standard,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl FromStr for LogLevel {
    type Err = FrontlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            other => other
                .parse::<u8>()
                .map_err(|_| FrontlogError::InvalidLevel(s.to_string()))
                .and_then(LogLevel::try_from),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = FrontlogError;

    fn try_from(value: u8) -> Result<Self> {
        LogLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| FrontlogError::InvalidLevel(value.to_string()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u8),
    Name(String),
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Number(n) => LogLevel::try_from(n).map_err(D::Error::custom),
            LevelRepr::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}

/// Anything that can name a log level: the enum itself, its case-insensitive
/// name, or its numeric rank.
pub trait IntoLogLevel {
    /// Resolve to a concrete level.
    fn into_level(self) -> Result<LogLevel>;
}

impl IntoLogLevel for LogLevel {
    fn into_level(self) -> Result<LogLevel> {
        Ok(self)
    }
}

impl IntoLogLevel for &str {
    fn into_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for String {
    fn into_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for &String {
    fn into_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for u8 {
    fn into_level(self) -> Result<LogLevel> {
        LogLevel::try_from(self)
    }
}

/// Console stream a record is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Regular output (`console.log`)
    Standard,
    /// Warning output (`console.warn`)
    Warn,
    /// Error output (`console.error`)
    Error,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Standard => write!(f, "log"),
            Channel::Warn => write!(f, "warn"),
            Channel::Error => write!(f, "error"),
        }
    }
}
