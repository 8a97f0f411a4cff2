//! Default public website preferences
//!
//! Preferences are stored as a free-form JSON document so the site builder
//! can add keys without a schema change. Stored overrides are deep-merged
//! onto this document.

use serde_json::{json, Value};

/// Sections every resolved preferences document carries
pub const WEBSITE_PREFERENCE_SECTIONS: [&str; 4] = ["theme", "hero", "seo", "social"];

/// Baseline preferences document
pub fn default_website_preferences() -> Value {
    json!({
        "theme": {
            "mode": "light",
            "accentColor": "#4f46e5",
            "fontFamily": "Inter",
            "layout": "classic"
        },
        "hero": {
            "showAvatar": true,
            "showAvailability": true,
            "ctaLabel": "Get in touch",
            "highlights": []
        },
        "seo": {
            "title": null,
            "description": null,
            "indexable": true,
            "keywords": []
        },
        "social": {
            "showLinks": true,
            "links": []
        }
    })
}
