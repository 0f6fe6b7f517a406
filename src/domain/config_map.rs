//! Configuration mappings and the ordered overlay merge.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::AppError;

/// Flat key/value mapping handed to the install script.
///
/// Backed by a `BTreeMap` so serialization always emits sorted keys.
pub type ConfigMap = BTreeMap<String, Value>;

/// A named layer of configuration taking part in a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    pub name: String,
    pub values: ConfigMap,
}

impl ConfigSource {
    pub fn new<S: Into<String>>(name: S, values: ConfigMap) -> Self {
        Self { name: name.into(), values }
    }

    /// Source holding exactly one entry.
    pub fn single<S: Into<String>, K: Into<String>>(name: S, key: K, value: Value) -> Self {
        let mut values = ConfigMap::new();
        values.insert(key.into(), value);
        Self::new(name, values)
    }
}

/// Overlay `sources` in order. Later sources win on key collision.
pub fn merge_sources(sources: &[ConfigSource]) -> ConfigMap {
    let mut merged = ConfigMap::new();
    for source in sources {
        for (key, value) in &source.values {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Name of the last source in `sources` that defines `key`.
pub fn provenance<'a>(sources: &'a [ConfigSource], key: &str) -> Option<&'a str> {
    sources.iter().rev().find(|s| s.values.contains_key(key)).map(|s| s.name.as_str())
}

/// Look up `key` and render it as a string for use in an environment variable.
///
/// Strings are taken verbatim, numbers and booleans use their JSON text.
/// Missing keys are fatal; nulls, arrays and objects are rejected.
pub fn require_scalar(config: &ConfigMap, key: &str) -> Result<String, AppError> {
    match config.get(key) {
        None => Err(AppError::missing_key(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(AppError::InvalidConfigValue {
            key: key.to_string(),
            reason: format!("expected a scalar, found {}", json_type(other)),
        }),
    }
}

/// Interpret a parsed JSON document as a configuration mapping.
pub fn into_config_map(value: Value) -> Option<ConfigMap> {
    match value {
        Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    }
}

/// Render `config` as the hand-off document: sorted keys, 4-space indent.
pub fn to_task_json(config: &ConfigMap) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
