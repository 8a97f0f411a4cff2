//! Save-ready profile payloads
//!
//! Produced by the normalizer from a [`ProfileDraft`](super::ProfileDraft).
//! Blank and structurally incomplete rows are already gone; text is trimmed
//! and empty text is `null`.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::record::ProfileRecord;

/// Validated projection of a draft, ready for the update endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub mission_statement: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub avatar_seed: Option<String>,

    pub skills: Vec<String>,
    pub areas_of_focus: Vec<String>,
    pub preferred_engagements: Vec<String>,
    pub status_flags: Vec<String>,
    pub volunteer_badges: Vec<String>,

    pub experiences: Vec<ExperiencePayload>,
    pub qualifications: Vec<QualificationPayload>,
    pub portfolio_links: Vec<PortfolioLinkPayload>,
    pub references: Vec<ReferencePayload>,
    pub collaboration_roster: Vec<CollaborationMemberPayload>,
    pub impact_highlights: Vec<ImpactHighlightPayload>,
    pub pipeline_insights: Vec<PipelineInsightPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub organization: Option<String>,
    pub role: Option<String>,
    /// ISO-8601 midnight UTC, or the raw input when it could not be parsed
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct QualificationPayload {
    pub title: Option<String>,
    pub authority: Option<String>,
    pub year: Option<i32>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLinkPayload {
    pub label: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ReferencePayload {
    /// Omitted for references that have not been persisted yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub relationship: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub endorsement: Option<String>,
    pub is_verified: bool,
    pub weight: Option<f64>,
    pub last_interacted_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CollaborationMemberPayload {
    pub name: String,
    pub role: Option<String>,
    pub avatar_seed: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ImpactHighlightPayload {
    pub title: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PipelineInsightPayload {
    pub project: Option<String>,
    pub payout: Option<String>,
    pub status: Option<String>,
    pub countdown: Option<String>,
}

impl From<&ProfilePayload> for ProfileRecord {
    /// Reads a payload back as if the server had echoed it
    fn from(payload: &ProfilePayload) -> Self {
        serde_json::to_value(payload).map(ProfileRecord::from_json_value).unwrap_or_default()
    }
}
