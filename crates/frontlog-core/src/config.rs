//! Configuration management for Frontlog.
//!
//! This module provides multi-layer configuration support with:
//! - File-based configuration (YAML)
//! - Environment variable overrides
//! - Programmatic updates
//! - Schema validation
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables
//! 2. Programmatically set values
//! 3. Values loaded from file
//! 4. Default values
//!
//! ## Environment Variables
//!
//! | Variable              | Effect                                      |
//! |-----------------------|---------------------------------------------|
//! | `FRONTLOG_LEVEL`      | Minimum level                               |
//! | `FRONTLOG_FORMAT`     | `pretty`, `compact` or `json`               |
//! | `FRONTLOG_ENABLE`     | Comma-separated features to enable          |
//! | `FRONTLOG_DISABLE`    | Comma-separated features to disable         |
//! | `FRONTLOG_LOCATION`   | Location reported with page loads           |
//! | `FRONTLOG_USER_AGENT` | Client identification string                |
//!
//! ## Example
//!
//! ```no_run
//! use frontlog_core::config::Config;
//!
//! let mut config = Config::load("frontlog.yml")?;
//! config.apply_process_env()?;
//! config.set("level", "debug")?;
//! let logger_config = config.logger_config()?;
//! # Ok::<(), frontlog_types::FrontlogError>(())
//! ```

use frontlog_types::{bail, FrontlogError, LoggerConfig, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use crate::util::deep_merge;

/// Prefix shared by all recognised environment variables.
pub const ENV_PREFIX: &str = "FRONTLOG_";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
    /// Values from environment variables
    Environment = 3,
}

impl ConfigLayer {
    const BY_PRIORITY: [ConfigLayer; 4] = [
        ConfigLayer::Environment,
        ConfigLayer::Set,
        ConfigLayer::Loaded,
        ConfigLayer::Default,
    ];

    const BY_MERGE_ORDER: [ConfigLayer; 4] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Set,
        ConfigLayer::Environment,
    ];
}

/// Layered logger configuration.
#[derive(Clone, Debug)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Configuration holding only the defaults.
    pub fn new() -> Self {
        let mut layers = HashMap::new();
        // LoggerConfig's default always serializes
        if let Ok(defaults) = serde_json::to_value(LoggerConfig::default()) {
            layers.insert(ConfigLayer::Default, defaults);
        }

        Self {
            layers,
            file_path: None,
        }
    }

    /// Create a configuration from a YAML file.
    ///
    /// If the file doesn't exist, only the defaults are present.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::new();
        config.file_path = Some(path.to_path_buf());

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| FrontlogError::Config(format!("Failed to read config file: {}", e)))?;
            config.load_str(&content)?;
            tracing::debug!(path = %path.display(), "Loaded logger configuration");
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        }

        Ok(config)
    }

    /// Replace the loaded layer with a YAML document.
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| FrontlogError::Config(format!("Failed to parse config: {}", e)))?;

        match value {
            Value::Null => {
                self.layers.remove(&ConfigLayer::Loaded);
            }
            Value::Object(_) => {
                self.layers.insert(ConfigLayer::Loaded, value);
            }
            _ => bail!(Config, "Configuration must be a mapping"),
        }
        Ok(())
    }

    /// File this configuration was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Get a configuration value by dotted key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let path: Vec<&str> = key.split('.').collect();

        for layer in &ConfigLayer::BY_PRIORITY {
            if let Some(value) = self.layers.get(layer).and_then(|data| get_path(data, &path)) {
                if let Ok(typed_value) = serde_json::from_value(value.clone()) {
                    return Some(typed_value);
                }
            }
        }

        None
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let path: Vec<&str> = key.split('.').collect();
        self.set_in(ConfigLayer::Set, &path, value)
    }

    /// Enable or disable a feature programmatically.
    pub fn set_feature(&mut self, feature: &str, enabled: bool) -> Result<()> {
        self.set_in(ConfigLayer::Set, &["features", feature], enabled)
    }

    fn set_in(&mut self, layer: ConfigLayer, path: &[&str], value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| FrontlogError::Config(format!("Failed to serialize value: {}", e)))?;

        let data = self
            .layers
            .entry(layer)
            .or_insert_with(|| Value::Object(Map::new()));
        set_path(data, path, value)
    }

    /// Apply `FRONTLOG_*` variables from an iterator of name/value pairs.
    ///
    /// Unrecognised `FRONTLOG_*` names are ignored with a warning.
    pub fn apply_env<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in vars {
            let Some(name) = name.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref().trim();

            match name {
                "LEVEL" => self.set_in(ConfigLayer::Environment, &["level"], value)?,
                "FORMAT" => self.set_in(ConfigLayer::Environment, &["format"], value.to_lowercase())?,
                "LOCATION" => self.set_in(ConfigLayer::Environment, &["location"], value)?,
                "USER_AGENT" => self.set_in(ConfigLayer::Environment, &["user_agent"], value)?,
                "ENABLE" | "DISABLE" => {
                    let enabled = name == "ENABLE";
                    for feature in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                        self.set_in(ConfigLayer::Environment, &["features", feature], enabled)?;
                    }
                }
                // Names the file itself; consumed by whoever loads it
                "CONFIG" => {}
                other => tracing::warn!(variable = %format!("{}{}", ENV_PREFIX, other), "Ignoring unknown variable"),
            }
        }
        Ok(())
    }

    /// Apply `FRONTLOG_*` variables from the process environment.
    pub fn apply_process_env(&mut self) -> Result<()> {
        self.apply_env(std::env::vars())
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        let mut merged = Value::Object(Map::new());

        for layer in &ConfigLayer::BY_MERGE_ORDER {
            if let Some(layer_data) = self.layers.get(layer) {
                merged = deep_merge(merged, layer_data.clone());
            }
        }

        merged
    }

    /// Validate the merged configuration against the schema.
    pub fn validate(&self) -> Result<()> {
        let schema = schema();
        let instance = self.merged_data();

        let compiled = jsonschema::JSONSchema::compile(&schema)
            .map_err(|e| FrontlogError::Config(format!("Invalid schema: {}", e)))?;

        let result = compiled.validate(&instance);
        if let Err(errors) = result {
            let error_msgs: Vec<String> = errors.map(|e| format!("{}", e)).collect();
            return Err(FrontlogError::Validation(error_msgs.join(", ")));
        }
        Ok(())
    }

    /// Validate and resolve into a [`LoggerConfig`].
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        self.validate()?;
        serde_json::from_value(self.merged_data())
            .map_err(|e| FrontlogError::Config(format!("Failed to parse logger config: {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON schema the merged configuration must satisfy.
pub fn schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "level": {
                "anyOf": [
                    { "type": "string", "pattern": "^([A-Za-z]+|[0-3])$" },
                    { "type": "integer", "minimum": 0, "maximum": 3 }
                ]
            },
            "features": {
                "type": "object",
                "additionalProperties": { "type": "boolean" }
            },
            "format": { "enum": ["pretty", "compact", "json"] },
            "location": { "type": "string" },
            "user_agent": { "type": "string" }
        },
        "additionalProperties": false
    })
}

fn get_path<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(data, |current, part| current.get(part))
}

fn set_path(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        bail!(Config, "Empty path");
    };

    let mut current = data;
    for part in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            bail!(Config, "Cannot set '{}': parent is not a mapping", path.join("."));
        };
        current = map
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        _ => bail!(Config, "Cannot set '{}': parent is not a mapping", path.join(".")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontlog_types::{Feature, LogFormat, LogLevel};
    use std::io::Write;

    #[test]
    fn test_config_layers() {
        let mut config = Config::new();

        let level: String = config.get("level").unwrap();
        assert_eq!(level, "INFO");

        config.load_str("level: warn\n").unwrap();
        let level: String = config.get("level").unwrap();
        assert_eq!(level, "warn");

        config.set("level", "error").unwrap();
        let level: String = config.get("level").unwrap();
        assert_eq!(level, "error");

        config.apply_env([("FRONTLOG_LEVEL", "debug")]).unwrap();
        let level: String = config.get("level").unwrap();
        assert_eq!(level, "debug");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level: debug\nformat: json\nfeatures:\n  PERFORMANCE: false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.file_path(), Some(file.path()));

        let logger_config = config.logger_config().unwrap();
        assert_eq!(logger_config.level, LogLevel::Debug);
        assert_eq!(logger_config.format, LogFormat::Json);
        assert_eq!(logger_config.features.get(Feature::PERFORMANCE), Some(&false));
        assert_eq!(logger_config.features.get(Feature::API_CALLS), Some(&true));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.logger_config().unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_env_feature_lists() {
        let mut config = Config::new();
        config
            .apply_env([
                ("FRONTLOG_DISABLE", "PERFORMANCE, CART_OPERATIONS"),
                ("FRONTLOG_ENABLE", "CHECKOUT"),
                ("FRONTLOG_FORMAT", "Compact"),
                ("HOME", "/root"),
            ])
            .unwrap();

        let logger_config = config.logger_config().unwrap();
        assert_eq!(logger_config.features.get(Feature::PERFORMANCE), Some(&false));
        assert_eq!(logger_config.features.get(Feature::CART_OPERATIONS), Some(&false));
        assert_eq!(logger_config.features.get("CHECKOUT"), Some(&true));
        assert_eq!(logger_config.format, LogFormat::Compact);
    }

    #[test]
    fn test_environment_beats_set() {
        let mut config = Config::new();
        config.set_feature(Feature::USER_INTERACTIONS, true).unwrap();
        config.apply_env([("FRONTLOG_DISABLE", "USER_INTERACTIONS")]).unwrap();

        let enabled: bool = config.get("features.USER_INTERACTIONS").unwrap();
        assert!(!enabled);
    }

    #[test]
    fn test_validation_rejects_bad_documents() {
        let mut config = Config::new();
        config.load_str("format: xml\n").unwrap();
        assert!(matches!(config.validate(), Err(FrontlogError::Validation(_))));

        let mut config = Config::new();
        config.load_str("features:\n  PERFORMANCE: maybe\n").unwrap();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.load_str("colour: true\n").unwrap();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.load_str("level: 7\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_rank_from_environment() {
        let mut config = Config::new();
        config.apply_env([("FRONTLOG_LEVEL", "2")]).unwrap();
        assert_eq!(config.logger_config().unwrap().level, LogLevel::Warn);

        let mut config = Config::new();
        config.apply_env([("FRONTLOG_LEVEL", "9")]).unwrap();
        assert!(matches!(config.validate(), Err(FrontlogError::Validation(_))));
    }

    #[test]
    fn test_unknown_level_name_fails_resolution() {
        let mut config = Config::new();
        config.load_str("level: loud\n").unwrap();
        assert!(config.validate().is_ok());
        assert!(matches!(config.logger_config(), Err(FrontlogError::Config(_))));
    }

    #[test]
    fn test_non_mapping_document() {
        let mut config = Config::new();
        assert!(config.load_str("- a\n- b\n").is_err());
        assert!(config.load_str("").is_ok());
    }
}
