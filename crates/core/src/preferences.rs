//! Website preference resolution

use profilehub_common::deep_merge;
use profilehub_domain::default_website_preferences;
use serde_json::Value;
use tracing::debug;

/// Stored overrides layered onto the default preferences document
///
/// Objects merge recursively, arrays and scalars replace, and `null`
/// values leave the default in place. Overrides that are not an object are
/// ignored.
pub fn resolve_website_preferences(overrides: Option<&Value>) -> Value {
    let defaults = default_website_preferences();
    match overrides {
        Some(overrides @ Value::Object(_)) => deep_merge(&defaults, overrides),
        Some(Value::Null) | None => defaults,
        Some(other) => {
            debug!(kind = json_kind(other), "Ignoring non-object website preferences");
            defaults
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_no_overrides_gives_defaults() {
        assert_eq!(resolve_website_preferences(None), default_website_preferences());
        assert_eq!(resolve_website_preferences(Some(&json!("dark"))), default_website_preferences());
    }

    #[test]
    fn test_overrides_merge_per_section() {
        let resolved = resolve_website_preferences(Some(&json!({
            "theme": { "mode": "dark" },
            "seo": { "keywords": ["coaching"], "title": null },
            "custom": { "banner": true }
        })));

        assert_eq!(resolved["theme"]["mode"], "dark");
        assert_eq!(resolved["theme"]["fontFamily"], "Inter");
        assert_eq!(resolved["seo"]["keywords"], json!(["coaching"]));
        assert_eq!(resolved["seo"]["indexable"], true);
        assert_eq!(resolved["custom"]["banner"], true);
        assert!(resolved["social"].is_object());
    }
}
