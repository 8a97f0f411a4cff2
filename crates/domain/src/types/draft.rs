//! Editable profile drafts
//!
//! A draft is the form-side copy of a profile: every text input is a plain
//! `String` (empty when unset) and every repeated section is an ordered list
//! of rows that may be partially filled. Drafts are never persisted; the
//! normalizer projects them into a [`ProfilePayload`](super::ProfilePayload).

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_kind_conversions;

/// Form state for the profile editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub headline: String,
    pub bio: String,
    pub mission_statement: String,
    pub education: String,
    pub location: String,
    pub timezone: String,
    pub avatar_seed: String,

    pub skills: Vec<String>,
    pub areas_of_focus: Vec<String>,
    pub preferred_engagements: Vec<String>,
    pub status_flags: Vec<String>,
    pub volunteer_badges: Vec<String>,

    pub experiences: Vec<ExperienceDraft>,
    pub qualifications: Vec<QualificationDraft>,
    pub portfolio_links: Vec<PortfolioLinkDraft>,
    pub references: Vec<ReferenceDraft>,
    pub collaboration_roster: Vec<CollaborationMemberDraft>,
    pub impact_highlights: Vec<ImpactHighlightDraft>,
    pub pipeline_insights: Vec<PipelineInsightDraft>,
}

/// Work history row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceDraft {
    pub organization: String,
    pub role: String,
    /// `YYYY-MM-DD` or free text typed by the user
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Credential row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationDraft {
    pub title: String,
    pub authority: String,
    pub year: String,
    pub credential_id: String,
    pub credential_url: String,
    pub description: String,
}

/// Portfolio row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioLinkDraft {
    pub label: String,
    pub url: String,
    pub description: String,
}

/// Reference row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceDraft {
    /// Server id as typed; empty marks a new reference
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub endorsement: String,
    pub is_verified: bool,
    /// Decimal in `[0, 1]`, as typed
    pub weight: String,
    pub last_interacted_at: String,
}

/// Collaboration roster row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct CollaborationMemberDraft {
    pub name: String,
    pub role: String,
    pub avatar_seed: String,
    pub contact: String,
}

/// Impact metric row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactHighlightDraft {
    pub title: String,
    pub value: String,
    pub description: String,
}

/// Pipeline row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineInsightDraft {
    pub project: String,
    pub payout: String,
    pub status: String,
    pub countdown: String,
}

/// Single-line and free-text profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Headline,
    Bio,
    MissionStatement,
    Education,
    Location,
    Timezone,
    AvatarSeed,
}

impl_domain_kind_conversions!(TextField {
    Headline => "headline",
    Bio => "bio",
    MissionStatement => "mission_statement",
    Education => "education",
    Location => "location",
    Timezone => "timezone",
    AvatarSeed => "avatar_seed",
});

/// Tag-style list fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagList {
    Skills,
    AreasOfFocus,
    PreferredEngagements,
    StatusFlags,
    VolunteerBadges,
}

impl_domain_kind_conversions!(TagList {
    Skills => "skills",
    AreasOfFocus => "areas_of_focus",
    PreferredEngagements => "preferred_engagements",
    StatusFlags => "status_flags",
    VolunteerBadges => "volunteer_badges",
});

/// Repeated-entry sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Experience,
    Qualification,
    PortfolioLink,
    Reference,
    CollaborationMember,
    ImpactHighlight,
    PipelineInsight,
}

impl_domain_kind_conversions!(RowKind {
    Experience => "experience",
    Qualification => "qualification",
    PortfolioLink => "portfolio_link",
    Reference => "reference",
    CollaborationMember => "collaboration_member",
    ImpactHighlight => "impact_highlight",
    PipelineInsight => "pipeline_insight",
});

impl RowKind {
    /// Every section, in form order
    pub const ALL: [RowKind; 7] = [
        RowKind::Experience,
        RowKind::Qualification,
        RowKind::PortfolioLink,
        RowKind::Reference,
        RowKind::CollaborationMember,
        RowKind::ImpactHighlight,
        RowKind::PipelineInsight,
    ];

    /// Payload list name used in field paths (`references[0].email`)
    pub fn list_name(&self) -> &'static str {
        match self {
            Self::Experience => "experiences",
            Self::Qualification => "qualifications",
            Self::PortfolioLink => "portfolioLinks",
            Self::Reference => "references",
            Self::CollaborationMember => "collaborationRoster",
            Self::ImpactHighlight => "impactHighlights",
            Self::PipelineInsight => "pipelineInsights",
        }
    }
}

impl ProfileDraft {
    /// Current value of a text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Headline => &self.headline,
            TextField::Bio => &self.bio,
            TextField::MissionStatement => &self.mission_statement,
            TextField::Education => &self.education,
            TextField::Location => &self.location,
            TextField::Timezone => &self.timezone,
            TextField::AvatarSeed => &self.avatar_seed,
        }
    }

    /// Mutable access to a text field
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Headline => &mut self.headline,
            TextField::Bio => &mut self.bio,
            TextField::MissionStatement => &mut self.mission_statement,
            TextField::Education => &mut self.education,
            TextField::Location => &mut self.location,
            TextField::Timezone => &mut self.timezone,
            TextField::AvatarSeed => &mut self.avatar_seed,
        }
    }

    /// Entries of a tag list
    pub fn tags(&self, list: TagList) -> &[String] {
        match list {
            TagList::Skills => &self.skills,
            TagList::AreasOfFocus => &self.areas_of_focus,
            TagList::PreferredEngagements => &self.preferred_engagements,
            TagList::StatusFlags => &self.status_flags,
            TagList::VolunteerBadges => &self.volunteer_badges,
        }
    }

    /// Mutable access to a tag list
    pub fn tags_mut(&mut self, list: TagList) -> &mut Vec<String> {
        match list {
            TagList::Skills => &mut self.skills,
            TagList::AreasOfFocus => &mut self.areas_of_focus,
            TagList::PreferredEngagements => &mut self.preferred_engagements,
            TagList::StatusFlags => &mut self.status_flags,
            TagList::VolunteerBadges => &mut self.volunteer_badges,
        }
    }

    /// Number of rows in a section, blank ones included
    pub fn row_count(&self, kind: RowKind) -> usize {
        match kind {
            RowKind::Experience => self.experiences.len(),
            RowKind::Qualification => self.qualifications.len(),
            RowKind::PortfolioLink => self.portfolio_links.len(),
            RowKind::Reference => self.references.len(),
            RowKind::CollaborationMember => self.collaboration_roster.len(),
            RowKind::ImpactHighlight => self.impact_highlights.len(),
            RowKind::PipelineInsight => self.pipeline_insights.len(),
        }
    }
}
