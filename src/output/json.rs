//! Raw JSON output

use serde_json::{Map, Value};

use crate::mist::{DeviceStats, MistResource};

/// Copy of `value` with object keys sorted at every level
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Pretty-print the retrieved structure exactly, keys sorted
pub fn to_sorted_json(value: &Value) -> String {
    serde_json::to_string_pretty(&sort_keys(value)).unwrap_or_else(|_| value.to_string())
}

/// One statistics record as raw JSON
pub fn device_json(stats: &DeviceStats) -> String {
    to_sorted_json(stats.raw())
}

/// Statistics records as a bare JSON array
pub fn devices_json(stats: &[DeviceStats]) -> String {
    let items: Vec<Value> = stats.iter().map(|s| s.raw().clone()).collect();
    to_sorted_json(&Value::Array(items))
}
