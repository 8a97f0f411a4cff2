//! Inbound profile records
//!
//! Shape of the profile object returned by the REST backend. Every field is
//! optional and deserialized leniently (see [`crate::utils::lenient`]), so a
//! record can always be built from whatever JSON the server sends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::lenient;

/// Profile record as fetched from the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    // Identity
    #[serde(deserialize_with = "lenient::opt_string")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    /// Secondary location source used by the identity form
    #[serde(deserialize_with = "lenient::opt_string")]
    pub city: Option<String>,

    // Profile text
    #[serde(deserialize_with = "lenient::opt_string")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub mission_statement: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub education: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub avatar_seed: Option<String>,

    // Tag lists
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub areas_of_focus: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub preferred_engagements: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub status_flags: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub volunteer_badges: Vec<String>,

    // Repeated entries
    #[serde(deserialize_with = "lenient::list")]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub qualifications: Vec<QualificationRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub portfolio_links: Vec<PortfolioLinkRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub references: Vec<ReferenceRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub collaboration_roster: Vec<CollaborationMemberRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub impact_highlights: Vec<ImpactHighlightRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub pipeline_insights: Vec<PipelineInsightRecord>,

    // Availability
    #[serde(deserialize_with = "lenient::opt_string")]
    pub availability_status: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub available_hours_per_week: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub open_to_remote: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub availability_notes: Option<String>,
}

impl ProfileRecord {
    /// Build a record from arbitrary JSON
    ///
    /// Anything other than an object yields the empty record.
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Work history entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub highlights: Vec<String>,
}

/// Certification or credential
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub authority: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub year: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub credential_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub credential_url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

/// Link to published work
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioLinkRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

/// Professional reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceRecord {
    /// Server id of a persisted reference; absent for new ones
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub relationship: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub endorsement: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub is_verified: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub weight: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub last_interacted_at: Option<String>,
}

/// Member of a collaboration roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollaborationMemberRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub avatar_seed: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub contact: Option<String>,
}

/// Headline metric shown on the profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactHighlightRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

/// Upcoming engagement in the sales pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineInsightRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub project: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub payout: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub countdown: Option<String>,
}
