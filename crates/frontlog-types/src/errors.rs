//! Error types for Frontlog operations.

use thiserror::Error;

/// The main error type for Frontlog operations.
///
/// The logging facade itself never fails while emitting records; these errors
/// come from the edges: level parsing, configuration loading and hook setup.
#[derive(Error, Debug)]
pub enum FrontlogError {
    /// A level name or number that does not map to a `LogLevel`
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Global hooks were already registered for this process
    #[error("Global error hooks are already installed")]
    HooksInstalled,

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for Frontlog operations.
pub type Result<T> = std::result::Result<T, FrontlogError>;

/// Helper macro to bail out with a FrontlogError
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(Config, "Invalid configuration: {}", reason);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::FrontlogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::FrontlogError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::FrontlogError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::FrontlogError::Other(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(level: &str) -> Result<()> {
        bail!(InvalidLevel, level)
    }

    fn reject_formatted(key: &str) -> Result<()> {
        bail!(Config, "unknown key '{}'", key)
    }

    #[test]
    fn test_bail_variants() {
        let err = reject("LOUD").unwrap_err();
        assert!(matches!(err, FrontlogError::InvalidLevel(ref s) if s == "LOUD"));
        assert_eq!(err.to_string(), "Invalid log level: LOUD");

        let err = reject_formatted("colour").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: unknown key 'colour'");
    }
}
