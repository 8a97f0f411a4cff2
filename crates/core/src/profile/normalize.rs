//! Draft normalization
//!
//! Projects a [`ProfileDraft`] into a save-ready [`ProfilePayload`] while
//! collecting human-readable validation messages. Normalization never fails:
//! a payload is always produced, and callers decide whether the accumulated
//! messages block the save.
//!
//! Rows fall into three buckets:
//! - blank rows are dropped silently
//! - structurally incomplete rows (a reference without a name, an impact
//!   highlight without title or value, ...) are reported and dropped
//! - rows with a malformed value (URL, date, email, phone, weight) are
//!   reported and kept

use profilehub_common::time::to_iso_timestamp;
use profilehub_common::{
    EmailValidator, FieldError, PhoneValidator, RangeValidator, TagSet, UrlValidator,
    ValidationError, Validator,
};
use profilehub_domain::constants::{REFERENCE_WEIGHT_MAX, REFERENCE_WEIGHT_MIN};
use profilehub_domain::{
    CollaborationMemberDraft, CollaborationMemberPayload, ExperienceDraft, ExperiencePayload,
    ImpactHighlightDraft, ImpactHighlightPayload, NormalizerConfig, PipelineInsightDraft,
    PipelineInsightPayload, PortfolioLinkDraft, PortfolioLinkPayload, ProfileDraft,
    ProfileHubError, ProfilePayload, QualificationDraft, QualificationPayload, ReferenceDraft,
    ReferencePayload, Result, RowKind,
};
use tracing::{debug, trace, warn};

/// Result of normalizing a draft
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    /// Save-ready projection, produced even when messages were recorded
    pub payload: ProfilePayload,
    /// Messages in the order they were found
    pub errors: Vec<String>,
    details: ValidationError,
}

impl NormalizeOutcome {
    /// True when no validation message was recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages with the payload path each one refers to
    /// (`references[0].email`)
    pub fn field_errors(&self) -> &[FieldError] {
        &self.details.errors
    }

    /// The payload, or `ProfileHubError::Validation` carrying every message
    pub fn into_result(self) -> Result<ProfilePayload> {
        if self.errors.is_empty() {
            Ok(self.payload)
        } else {
            Err(ProfileHubError::Validation(self.errors))
        }
    }
}

/// Normalize a draft with the default rules
pub fn normalize_draft(draft: &ProfileDraft) -> NormalizeOutcome {
    normalize_draft_with(draft, &NormalizerConfig::default())
}

/// Normalize a draft with explicit rules
pub fn normalize_draft_with(draft: &ProfileDraft, config: &NormalizerConfig) -> NormalizeOutcome {
    let mut normalizer = Normalizer { config, validator: Validator::new() };

    let payload = ProfilePayload {
        headline: text(&draft.headline),
        bio: text(&draft.bio),
        mission_statement: text(&draft.mission_statement),
        education: text(&draft.education),
        location: text(&draft.location),
        timezone: text(&draft.timezone),
        avatar_seed: text(&draft.avatar_seed),

        skills: tags(&draft.skills),
        areas_of_focus: tags(&draft.areas_of_focus),
        preferred_engagements: tags(&draft.preferred_engagements),
        status_flags: tags(&draft.status_flags),
        volunteer_badges: tags(&draft.volunteer_badges),

        experiences: normalizer.rows(RowKind::Experience, &draft.experiences, experience),
        qualifications: normalizer.rows(
            RowKind::Qualification,
            &draft.qualifications,
            qualification,
        ),
        portfolio_links: normalizer.rows(
            RowKind::PortfolioLink,
            &draft.portfolio_links,
            portfolio_link,
        ),
        references: normalizer.rows(RowKind::Reference, &draft.references, reference),
        collaboration_roster: normalizer.rows(
            RowKind::CollaborationMember,
            &draft.collaboration_roster,
            collaborator,
        ),
        impact_highlights: normalizer.rows(
            RowKind::ImpactHighlight,
            &draft.impact_highlights,
            impact_highlight,
        ),
        pipeline_insights: normalizer.rows(
            RowKind::PipelineInsight,
            &draft.pipeline_insights,
            pipeline_insight,
        ),
    };

    let details = normalizer.validator.into_errors();
    let errors = details.messages();

    trace!(
        errors = errors.len(),
        experiences = payload.experiences.len(),
        qualifications = payload.qualifications.len(),
        portfolio_links = payload.portfolio_links.len(),
        references = payload.references.len(),
        "Normalized profile draft"
    );

    NormalizeOutcome { payload, errors, details }
}

/// What to do with one draft row
enum Row<T> {
    Keep(T),
    /// Every field is empty
    Blank,
    /// Missing its required fields; already reported
    Incomplete,
}

struct Normalizer<'a> {
    config: &'a NormalizerConfig,
    validator: Validator,
}

/// Row handler: validator scoped to the row, rules, row, 1-based position
type RowHandler<D, P> = fn(&mut Validator, &NormalizerConfig, &D, usize) -> Row<P>;

impl Normalizer<'_> {
    /// Normalize one section, recording errors under `<list>[<index>]`
    fn rows<D, P>(&mut self, kind: RowKind, drafts: &[D], handler: RowHandler<D, P>) -> Vec<P> {
        let config = self.config;
        let mut kept = Vec::with_capacity(drafts.len());

        for (index, draft) in drafts.iter().enumerate() {
            let segment = format!("{}[{}]", kind.list_name(), index);
            let row = self
                .validator
                .validate_nested(segment, |v| handler(v, config, draft, index + 1));

            match row {
                Row::Keep(payload) => kept.push(payload),
                Row::Blank => debug!(kind = kind.as_str(), index, "Dropped blank row"),
                Row::Incomplete => debug!(kind = kind.as_str(), index, "Dropped incomplete row"),
            }
        }

        kept
    }
}

fn experience(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &ExperienceDraft,
    position: usize,
) -> Row<ExperiencePayload> {
    let highlights = tags(&row.highlights);
    if all_blank(&[&row.organization, &row.role, &row.description]) && highlights.is_empty() {
        return Row::Blank;
    }

    let start_date = parse_date(
        v,
        "startDate",
        &row.start_date,
        format!("Experience #{} has an invalid start date.", position),
    );
    let end_date = parse_date(
        v,
        "endDate",
        &row.end_date,
        format!("Experience #{} has an invalid end date.", position),
    );

    Row::Keep(ExperiencePayload {
        organization: text(&row.organization),
        role: text(&row.role),
        start_date,
        end_date,
        description: text(&row.description),
        highlights,
    })
}

fn qualification(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &QualificationDraft,
    _position: usize,
) -> Row<QualificationPayload> {
    if all_blank(&[
        &row.title,
        &row.authority,
        &row.credential_id,
        &row.credential_url,
        &row.description,
        &row.year,
    ]) {
        return Row::Blank;
    }

    let credential_url = text(&row.credential_url);
    if let Some(url) = credential_url.as_deref() {
        let label = first_present(&[&row.title, &row.authority]).unwrap_or("a qualification");
        v.validate_field_as(
            "credentialUrl",
            url,
            &UrlValidator::new(),
            format!("Credential link for {} must be a valid URL.", label),
        );
    }

    Row::Keep(QualificationPayload {
        title: text(&row.title),
        authority: text(&row.authority),
        year: row.year.trim().parse::<i32>().ok(),
        credential_id: text(&row.credential_id),
        credential_url,
        description: text(&row.description),
    })
}

fn portfolio_link(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &PortfolioLinkDraft,
    position: usize,
) -> Row<PortfolioLinkPayload> {
    if all_blank(&[&row.label, &row.url, &row.description]) {
        return Row::Blank;
    }

    v.validate_field_as(
        "url",
        row.url.trim(),
        &UrlValidator::new(),
        format!("Portfolio link #{} must include a valid URL (http or https).", position),
    );

    Row::Keep(PortfolioLinkPayload {
        label: text(&row.label),
        url: text(&row.url),
        description: text(&row.description),
    })
}

fn reference(
    v: &mut Validator,
    config: &NormalizerConfig,
    row: &ReferenceDraft,
    position: usize,
) -> Row<ReferencePayload> {
    if all_blank(&[
        &row.name,
        &row.relationship,
        &row.company,
        &row.email,
        &row.phone,
        &row.endorsement,
    ]) {
        return Row::Blank;
    }

    let name = row.name.trim();
    if !v.require("name", name, format!("Reference #{} requires a name.", position)) {
        return Row::Incomplete;
    }

    let email = text(&row.email);
    if let Some(email) = email.as_deref() {
        v.validate_field_as(
            "email",
            email,
            &EmailValidator::new(),
            format!("Reference {} has an invalid email address.", name),
        );
    }

    let phone = text(&row.phone);
    if let Some(phone) = phone.as_deref() {
        v.validate_field_as(
            "phone",
            phone,
            &PhoneValidator::new().min_length(config.phone_min_length),
            format!("Reference {} has an invalid phone number.", name),
        );
    }

    let weight = parse_weight(v, config, name, &row.weight);

    let last_interacted_at = text(&row.last_interacted_at).and_then(|raw| {
        let parsed = to_iso_timestamp(&raw);
        if parsed.is_none() {
            v.add_error(
                "lastInteractedAt",
                format!("Reference {} has an invalid interaction date.", name),
            );
        }
        parsed
    });

    Row::Keep(ReferencePayload {
        id: reference_id(&row.id),
        name: name.to_string(),
        relationship: text(&row.relationship),
        company: text(&row.company),
        email,
        phone,
        endorsement: text(&row.endorsement),
        is_verified: row.is_verified,
        weight,
        last_interacted_at,
    })
}

fn collaborator(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &CollaborationMemberDraft,
    _position: usize,
) -> Row<CollaborationMemberPayload> {
    if all_blank(&[&row.name, &row.role, &row.avatar_seed, &row.contact]) {
        return Row::Blank;
    }

    if !v.require("name", &row.name, "Collaboration roster entries must include a name.") {
        return Row::Incomplete;
    }

    Row::Keep(CollaborationMemberPayload {
        name: row.name.trim().to_string(),
        role: text(&row.role),
        avatar_seed: text(&row.avatar_seed),
        contact: text(&row.contact),
    })
}

fn impact_highlight(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &ImpactHighlightDraft,
    _position: usize,
) -> Row<ImpactHighlightPayload> {
    if all_blank(&[&row.title, &row.value, &row.description]) {
        return Row::Blank;
    }

    if all_blank(&[&row.title, &row.value]) {
        v.add_error("", "Impact highlights must include a title or a metric value.");
        return Row::Incomplete;
    }

    Row::Keep(ImpactHighlightPayload {
        title: text(&row.title),
        value: text(&row.value),
        description: text(&row.description),
    })
}

fn pipeline_insight(
    v: &mut Validator,
    _config: &NormalizerConfig,
    row: &PipelineInsightDraft,
    _position: usize,
) -> Row<PipelineInsightPayload> {
    if all_blank(&[&row.project, &row.payout, &row.status, &row.countdown]) {
        return Row::Blank;
    }

    if all_blank(&[&row.project, &row.payout]) {
        v.add_error("", "Pipeline insights require at least a project or payout value.");
        return Row::Incomplete;
    }

    Row::Keep(PipelineInsightPayload {
        project: text(&row.project),
        payout: text(&row.payout),
        status: text(&row.status),
        countdown: text(&row.countdown),
    })
}

/// ISO timestamp for a typed date; the raw text is kept when it cannot
/// be parsed
fn parse_date(v: &mut Validator, field: &str, raw: &str, message: String) -> Option<String> {
    let raw = text(raw)?;
    match to_iso_timestamp(&raw) {
        Some(iso) => Some(iso),
        None => {
            v.add_error(field, message);
            Some(raw)
        }
    }
}

/// Parsed reference weight
///
/// In-range values are rounded to the configured precision. Finite
/// out-of-range values are reported and kept as typed; anything else is
/// reported and dropped.
fn parse_weight(
    v: &mut Validator,
    config: &NormalizerConfig,
    name: &str,
    raw: &str,
) -> Option<f64> {
    let raw = text(raw)?;
    let message = format!("Reference {} must have a weight between 0 and 1.", name);

    let parsed = raw.parse::<f64>().ok().filter(|w| w.is_finite());
    let Some(weight) = parsed else {
        v.add_error("weight", message);
        return None;
    };

    let in_range = v.validate_field_as(
        "weight",
        &weight,
        &RangeValidator::new(REFERENCE_WEIGHT_MIN, REFERENCE_WEIGHT_MAX),
        message,
    );

    if in_range {
        Some(round_to(weight, config.weight_decimals))
    } else {
        Some(weight)
    }
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn tags(values: &[String]) -> Vec<String> {
    values.iter().collect::<TagSet>().into_vec()
}

fn all_blank(values: &[&String]) -> bool {
    values.iter().all(|value| value.trim().is_empty())
}

fn first_present<'a>(values: &[&'a String]) -> Option<&'a str> {
    values.iter().map(|value| value.trim()).find(|value| !value.is_empty())
}

fn reference_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(err) => {
            warn!(id = raw, error = %err, "Ignoring non-numeric reference id");
            None
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
