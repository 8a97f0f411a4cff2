//! Structural deep merge over JSON values
//!
//! Objects merge key by key, recursively. Arrays and scalars from the
//! override replace the base value wholesale. A `null` override leaves the
//! base value untouched, so partially-saved documents can be layered over
//! defaults without erasing them.

use serde_json::Value;

/// Merge `overrides` onto `base`, returning a new document
///
/// # Examples
///
/// ```rust
/// use profilehub_common::deep_merge;
/// use serde_json::json;
///
/// let base = json!({ "theme": { "mode": "light", "accent": "teal" }, "tags": ["a", "b"] });
/// let overrides = json!({ "theme": { "accent": "plum" }, "tags": ["c"] });
///
/// assert_eq!(
///     deep_merge(&base, &overrides),
///     json!({ "theme": { "mode": "light", "accent": "plum" }, "tags": ["c"] })
/// );
/// ```
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, overrides);
    merged
}

/// In-place variant of [`deep_merge`]
pub fn merge_into(target: &mut Value, overrides: &Value) {
    match (target, overrides) {
        (_, Value::Null) => {}
        (Value::Object(target_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match target_map.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        if !value.is_null() {
                            target_map.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
        }
        (target, value) => *target = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_objects_merge_recursively() {
        let base = json!({ "seo": { "title": "Studio", "meta": { "robots": "index", "lang": "en" } } });
        let overrides = json!({ "seo": { "meta": { "lang": "fr" } } });

        assert_eq!(
            deep_merge(&base, &overrides),
            json!({ "seo": { "title": "Studio", "meta": { "robots": "index", "lang": "fr" } } })
        );
    }

    #[test]
    fn test_arrays_are_replaced_not_concatenated() {
        let base = json!({ "social": { "links": [{ "network": "x" }, { "network": "github" }] } });
        let overrides = json!({ "social": { "links": [] } });

        assert_eq!(deep_merge(&base, &overrides), json!({ "social": { "links": [] } }));
    }

    #[test]
    fn test_null_overrides_are_ignored() {
        let base = json!({ "hero": { "headline": "Hello" } });
        let overrides = json!({ "hero": { "headline": null, "image": null }, "extra": null });

        assert_eq!(deep_merge(&base, &overrides), base);
    }

    /// A scalar override replaces an object and vice versa.
    #[test]
    fn test_type_mismatch_replaces() {
        let base = json!({ "theme": { "mode": "dark" }, "flag": true });
        let overrides = json!({ "theme": "classic", "flag": { "enabled": false } });

        assert_eq!(
            deep_merge(&base, &overrides),
            json!({ "theme": "classic", "flag": { "enabled": false } })
        );
    }

    #[test]
    fn test_base_is_not_mutated() {
        let base = json!({ "a": 1 });
        let _ = deep_merge(&base, &json!({ "a": 2 }));
        assert_eq!(base, json!({ "a": 1 }));
    }
}
