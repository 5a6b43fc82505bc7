//! Field-or-default accessors over loosely structured API records

use serde_json::Value;

static NULL: Value = Value::Null;

/// Borrowed view over a JSON record with defensive field access
///
/// Every accessor takes a priority list of field names and falls back to
/// an empty value, so a record missing optional fields never panics.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a>(&'a Value);

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// First non-empty string among `keys`
    pub fn first_str(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter()
            .filter_map(|k| self.get(k).and_then(Value::as_str))
            .find(|s| !s.is_empty())
    }

    /// First non-empty string among `keys`, or `default`
    pub fn str_or(&self, keys: &[&str], default: &'a str) -> &'a str {
        self.first_str(keys).unwrap_or(default)
    }

    /// First non-empty scalar among `keys`, stringified (numbers included)
    pub fn first_key(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| match self.get(k)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Scalar field rendered for display, or `default`
    pub fn display_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Nested object field; an empty view when absent or not an object
    pub fn object(&self, key: &str) -> Record<'a> {
        match self.get(key) {
            Some(v @ Value::Object(_)) => Record(v),
            _ => Record(&NULL),
        }
    }

    /// Array field; empty when absent
    pub fn array(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Object entries sorted by key
    pub fn sorted_entries(&self, key: &str) -> Vec<(&'a str, Record<'a>)> {
        let mut entries: Vec<(&'a str, Record<'a>)> = self
            .get(key)
            .and_then(Value::as_object)
            .map(|map| map.iter().map(|(k, v)| (k.as_str(), Record(v))).collect())
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Render a scalar JSON value without string quotes
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
