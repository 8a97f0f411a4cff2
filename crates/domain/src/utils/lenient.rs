//! Lenient deserializers for loosely-typed records
//!
//! Profile records arrive from a REST backend whose field types drift over
//! time: numbers where strings are expected, `null` instead of arrays, or a
//! single object where a list belongs. The deserializers here accept any
//! JSON shape for a field and degrade to an empty value instead of failing
//! the whole record.
//!
//! # Usage
//! ```rust
//! use profilehub_domain::utils::lenient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Default)]
//! #[serde(default)]
//! struct Record {
//!     #[serde(deserialize_with = "lenient::opt_string")]
//!     headline: Option<String>,
//!     #[serde(deserialize_with = "lenient::string_list")]
//!     skills: Vec<String>,
//! }
//!
//! let record: Record =
//!     serde_json::from_str(r#"{"headline": 42, "skills": "not-a-list"}"#).unwrap();
//! assert_eq!(record.headline.as_deref(), Some("42"));
//! assert!(record.skills.is_empty());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar JSON value as text
///
/// Strings are returned as-is, numbers and booleans use their JSON spelling.
/// `null`, arrays and objects yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Any scalar as `Some(text)`; `null` and containers as `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

/// Array of scalars as text; non-arrays become empty, non-scalar items
/// are skipped
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

/// Array of records; non-arrays become empty, items that fail to
/// deserialize are skipped
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => {
            items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect()
        }
        _ => Vec::new(),
    })
}

/// Booleans, `"true"`/`"false"` strings (any case) and numbers (non-zero
/// is true)
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    })
}
