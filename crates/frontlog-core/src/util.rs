//! Common utility functions.

use serde_json::Value;

/// Deep merge two JSON values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                // Merge in place so existing keys keep their position
                if let Some(base_val) = base_map.get_mut(&key) {
                    let current = std::mem::take(base_val);
                    *base_val = deep_merge(current, overlay_val);
                } else {
                    base_map.insert(key, overlay_val);
                }
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge() {
        let base = json!({"level": "INFO", "features": {"A": true, "B": true}});
        let overlay = json!({"features": {"B": false, "C": true}});

        assert_eq!(
            deep_merge(base, overlay),
            json!({"level": "INFO", "features": {"A": true, "B": false, "C": true}})
        );
    }

    #[test]
    fn test_scalars_replace() {
        assert_eq!(deep_merge(json!({"a": 1}), json!(2)), json!(2));
        assert_eq!(deep_merge(json!([1, 2]), json!({"a": 1})), json!({"a": 1}));
    }
}
