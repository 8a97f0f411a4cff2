//! Building editable drafts from fetched records

use profilehub_common::time::to_date_only;
use profilehub_common::TagSet;
use profilehub_domain::{
    CollaborationMemberDraft, CollaborationMemberRecord, ExperienceDraft, ExperienceRecord,
    ImpactHighlightDraft, ImpactHighlightRecord, PipelineInsightDraft, PipelineInsightRecord,
    PortfolioLinkDraft, PortfolioLinkRecord, ProfileDraft, ProfileRecord, QualificationDraft,
    QualificationRecord, ReferenceDraft, ReferenceRecord,
};
use serde_json::Value;

/// Build a fully-shaped draft from a fetched profile
///
/// Missing text becomes the empty string and missing lists become empty.
/// Date fields are reduced to `YYYY-MM-DD` (or empty when unparseable).
/// Never fails.
pub fn build_draft(record: Option<&ProfileRecord>) -> ProfileDraft {
    let Some(record) = record else {
        return ProfileDraft::default();
    };

    ProfileDraft {
        headline: text(&record.headline),
        bio: text(&record.bio),
        mission_statement: text(&record.mission_statement),
        education: text(&record.education),
        location: text(&record.location),
        timezone: text(&record.timezone),
        avatar_seed: text(&record.avatar_seed),

        skills: tags(&record.skills),
        areas_of_focus: tags(&record.areas_of_focus),
        preferred_engagements: tags(&record.preferred_engagements),
        status_flags: tags(&record.status_flags),
        volunteer_badges: tags(&record.volunteer_badges),

        experiences: record.experiences.iter().map(experience).collect(),
        qualifications: record.qualifications.iter().map(qualification).collect(),
        portfolio_links: record.portfolio_links.iter().map(portfolio_link).collect(),
        references: record.references.iter().map(reference).collect(),
        collaboration_roster: record.collaboration_roster.iter().map(collaborator).collect(),
        impact_highlights: record.impact_highlights.iter().map(impact_highlight).collect(),
        pipeline_insights: record.pipeline_insights.iter().map(pipeline_insight).collect(),
    }
}

/// Build a draft straight from response JSON
///
/// Non-object values (including `null`) yield the empty draft.
pub fn build_draft_from_json(value: Value) -> ProfileDraft {
    build_draft(Some(&ProfileRecord::from_json_value(value)))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: &Option<String>) -> String {
    value.as_deref().map(to_date_only).unwrap_or_default()
}

fn tags(values: &[String]) -> Vec<String> {
    values.iter().collect::<TagSet>().into_vec()
}

fn experience(record: &ExperienceRecord) -> ExperienceDraft {
    ExperienceDraft {
        organization: text(&record.organization),
        role: text(&record.role),
        start_date: date(&record.start_date),
        end_date: date(&record.end_date),
        description: text(&record.description),
        highlights: tags(&record.highlights),
    }
}

fn qualification(record: &QualificationRecord) -> QualificationDraft {
    QualificationDraft {
        title: text(&record.title),
        authority: text(&record.authority),
        year: text(&record.year),
        credential_id: text(&record.credential_id),
        credential_url: text(&record.credential_url),
        description: text(&record.description),
    }
}

fn portfolio_link(record: &PortfolioLinkRecord) -> PortfolioLinkDraft {
    PortfolioLinkDraft {
        label: text(&record.label),
        url: text(&record.url),
        description: text(&record.description),
    }
}

fn reference(record: &ReferenceRecord) -> ReferenceDraft {
    ReferenceDraft {
        id: text(&record.id),
        name: text(&record.name),
        relationship: text(&record.relationship),
        company: text(&record.company),
        email: text(&record.email),
        phone: text(&record.phone),
        endorsement: text(&record.endorsement),
        is_verified: record.is_verified.unwrap_or(false),
        weight: text(&record.weight),
        last_interacted_at: date(&record.last_interacted_at),
    }
}

fn collaborator(record: &CollaborationMemberRecord) -> CollaborationMemberDraft {
    CollaborationMemberDraft {
        name: text(&record.name),
        role: text(&record.role),
        avatar_seed: text(&record.avatar_seed),
        contact: text(&record.contact),
    }
}

fn impact_highlight(record: &ImpactHighlightRecord) -> ImpactHighlightDraft {
    ImpactHighlightDraft {
        title: text(&record.title),
        value: text(&record.value),
        description: text(&record.description),
    }
}

fn pipeline_insight(record: &PipelineInsightRecord) -> PipelineInsightDraft {
    PipelineInsightDraft {
        project: text(&record.project),
        payout: text(&record.payout),
        status: text(&record.status),
        countdown: text(&record.countdown),
    }
}
