//! Identity and availability forms
//!
//! These sit beside the main profile draft: identity fields go to the
//! account endpoint and availability to its own endpoint.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{DEFAULT_AVAILABILITY_STATUS, DEFAULT_OPEN_TO_REMOTE};

/// Name, contact and locale of the profile owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub location: String,
    pub timezone: String,
}

/// Availability form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityDraft {
    pub status: String,
    /// Hours as typed; coerced to a number only when non-empty
    pub hours_per_week: String,
    pub open_to_remote: bool,
    pub notes: String,
    pub timezone: String,
}

impl Default for AvailabilityDraft {
    fn default() -> Self {
        Self {
            status: DEFAULT_AVAILABILITY_STATUS.to_string(),
            hours_per_week: String::new(),
            open_to_remote: DEFAULT_OPEN_TO_REMOTE,
            notes: String::new(),
            timezone: String::new(),
        }
    }
}

/// Body of an availability update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPayload {
    pub availability_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_hours_per_week: Option<f64>,
    pub open_to_remote: bool,
    pub availability_notes: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas_of_focus: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_engagements: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_availability_draft_defaults() {
        let draft = AvailabilityDraft::default();
        assert_eq!(draft.status, "limited");
        assert!(draft.open_to_remote);
        assert!(draft.hours_per_week.is_empty());
    }

    #[test]
    fn test_availability_payload_api_names() {
        let payload = AvailabilityPayload {
            availability_status: "open".to_string(),
            available_hours_per_week: Some(12.5),
            open_to_remote: false,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).expect("payload serializes"),
            json!({
                "availabilityStatus": "open",
                "availableHoursPerWeek": 12.5,
                "openToRemote": false,
                "availabilityNotes": null,
                "timezone": null
            })
        );
    }
}
