//! Configuration types and structures.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use crate::LogLevel;

/// Well-known feature flag names.
///
/// Feature names are plain strings; these constants name the flags a fresh
/// logger starts with.
pub struct Feature;

impl Feature {
    /// API request/response logging
    pub const API_CALLS: &'static str = "API_CALLS";
    /// Clicks, inputs and other user interactions
    pub const USER_INTERACTIONS: &'static str = "USER_INTERACTIONS";
    /// Named timers
    pub const PERFORMANCE: &'static str = "PERFORMANCE";
    /// Shopping cart mutations
    pub const CART_OPERATIONS: &'static str = "CART_OPERATIONS";
    /// Form validation results
    pub const FORM_VALIDATION: &'static str = "FORM_VALIDATION";

    /// All default features, in registration order.
    pub const DEFAULTS: [&'static str; 5] = [
        Self::API_CALLS,
        Self::USER_INTERACTIONS,
        Self::PERFORMANCE,
        Self::CART_OPERATIONS,
        Self::FORM_VALIDATION,
    ];
}

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format, colored when writing to a terminal
    #[default]
    Pretty,
    /// Plain single-line format without colors
    Compact,
    /// One JSON object per record
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = crate::FrontlogError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(crate::FrontlogError::Config(format!("Invalid log format: {}", s))),
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level to emit
    #[serde(default)]
    pub level: LogLevel,

    /// Feature flags; entries are merged over the defaults
    #[serde(default = "default_features", deserialize_with = "merge_features")]
    pub features: IndexMap<String, bool>,

    /// Console output format
    #[serde(default)]
    pub format: LogFormat,

    /// Location reported with page loads and exceptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Client identification string reported with page loads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// The default feature table: every well-known feature enabled.
pub fn default_features() -> IndexMap<String, bool> {
    Feature::DEFAULTS
        .iter()
        .map(|name| (name.to_string(), true))
        .collect()
}

fn merge_features<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = IndexMap::<String, bool>::deserialize(deserializer)?;
    let mut features = default_features();
    features.extend(overrides);
    Ok(features)
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            features: default_features(),
            format: LogFormat::Pretty,
            location: None,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.features.len(), 5);
        assert!(config.features.values().all(|enabled| *enabled));
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_features_merge_over_defaults() {
        let yaml = "level: debug\nfeatures:\n  PERFORMANCE: false\n  CHECKOUT: true\n";
        let config: LoggerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.features.get(Feature::PERFORMANCE), Some(&false));
        assert_eq!(config.features.get(Feature::API_CALLS), Some(&true));
        assert_eq!(config.features.get("CHECKOUT"), Some(&true));
        assert_eq!(config.features.len(), 6);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: LoggerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
