//! Emit a single record.

use anyhow::{bail, Result};
use frontlog_core::FrontendLogger;
use frontlog_types::{Context, IntoLogLevel};
use serde_json::Value;

pub fn execute(
    logger: &FrontendLogger,
    level: &str,
    category: &str,
    message: &str,
    entries: &[String],
    feature: Option<&str>,
) -> Result<()> {
    let level = level.into_level()?;
    let context = parse_context(entries)?;

    match feature {
        Some(feature) => logger.log_if(feature, level, category, message, context),
        None => logger.log(level, category, message, context),
    }
    Ok(())
}

/// Parse `key=value` pairs. Values that are valid JSON keep their type,
/// anything else is taken as a string.
pub fn parse_context(entries: &[String]) -> Result<Context> {
    let mut context = Context::new();

    for entry in entries {
        let Some((key, raw)) = entry.split_once('=') else {
            bail!("Context entry '{}' is not in key=value form", entry);
        };
        if key.is_empty() {
            bail!("Context entry '{}' has an empty key", entry);
        }

        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        context.push(key, value);
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_context() {
        let entries = vec![
            "sku=A-1".to_string(),
            "qty=2".to_string(),
            "meta={\"gift\":true}".to_string(),
            "note=a=b".to_string(),
        ];
        let context = parse_context(&entries).unwrap();

        assert_eq!(context.get("sku"), Some(&json!("A-1")));
        assert_eq!(context.get("qty"), Some(&json!(2)));
        assert_eq!(context.get("meta"), Some(&json!({"gift": true})));
        assert_eq!(context.get("note"), Some(&json!("a=b")));
    }

    #[test]
    fn test_parse_context_rejects_malformed() {
        assert!(parse_context(&["novalue".to_string()]).is_err());
        assert!(parse_context(&["=1".to_string()]).is_err());
    }
}
