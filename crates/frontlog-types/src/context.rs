//! Ordered key/value context attached to log records.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Contextual values carried alongside a log message.
///
/// Entries keep insertion order. Keys are not deduplicated; a later entry with
/// the same key shadows an earlier one in [`Context::get`] and in the JSON
/// rendering.
///
/// # Example
///
/// ```
/// use frontlog_types::Context;
///
/// let ctx = Context::new()
///     .with("element", "#checkout")
///     .with("items", 3);
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx.get("items"), Some(&serde_json::json!(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context(Vec<(String, Value)>);

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an entry, builder style.
    ///
    /// Values that fail to serialize are recorded as `null`.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.push(key, value);
        self
    }

    /// Add an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.0.push((key.into(), value));
    }

    /// Build a context from any serializable value.
    ///
    /// The fields of a struct or map become individual entries; any other value
    /// is stored under the key `value`.
    pub fn from_serializable(value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            Ok(Value::Null) | Err(_) => Self::new(),
            Ok(other) => Self::new().with("value", other),
        }
    }

    /// Look up the most recent entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.0 {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for Context {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Build a [`Context`] from `key => value` pairs.
///
/// ```
/// use frontlog_types::context;
///
/// let ctx = context! { "element" => "button", "count" => 2 };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Context::new()$(.with($key, $value))+
    };
}
