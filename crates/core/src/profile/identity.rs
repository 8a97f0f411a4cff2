//! Identity and availability forms

use profilehub_common::{EmailValidator, Validator};
use profilehub_domain::{
    AvailabilityDraft, AvailabilityPayload, IdentityDraft, NormalizerConfig, ProfilePayload,
    ProfileRecord,
};
use tracing::warn;

/// Identity form seeded from a profile
///
/// `location` falls back to `city` when the profile has no location.
pub fn build_identity_draft(record: Option<&ProfileRecord>) -> IdentityDraft {
    let Some(record) = record else {
        return IdentityDraft::default();
    };

    let location = present(&record.location).or_else(|| present(&record.city)).unwrap_or_default();

    IdentityDraft {
        first_name: record.first_name.clone().unwrap_or_default(),
        last_name: record.last_name.clone().unwrap_or_default(),
        email: record.email.clone().unwrap_or_default(),
        location,
        timezone: record.timezone.clone().unwrap_or_default(),
    }
}

/// Availability form seeded from a profile, with the default rules
pub fn build_availability_draft(record: Option<&ProfileRecord>) -> AvailabilityDraft {
    build_availability_draft_with(record, &NormalizerConfig::default())
}

/// Availability form seeded from a profile
///
/// A missing status or remote preference takes the configured default.
pub fn build_availability_draft_with(
    record: Option<&ProfileRecord>,
    config: &NormalizerConfig,
) -> AvailabilityDraft {
    let Some(record) = record else {
        return AvailabilityDraft {
            status: config.default_availability_status.clone(),
            open_to_remote: config.default_open_to_remote,
            ..AvailabilityDraft::default()
        };
    };

    AvailabilityDraft {
        status: present(&record.availability_status)
            .unwrap_or_else(|| config.default_availability_status.clone()),
        hours_per_week: record.available_hours_per_week.clone().unwrap_or_default(),
        open_to_remote: record.open_to_remote.unwrap_or(config.default_open_to_remote),
        notes: record.availability_notes.clone().unwrap_or_default(),
        timezone: record.timezone.clone().unwrap_or_default(),
    }
}

/// Availability update body, with the default rules
pub fn build_availability_payload(
    draft: &AvailabilityDraft,
    profile: Option<&ProfilePayload>,
) -> AvailabilityPayload {
    build_availability_payload_with(draft, profile, &NormalizerConfig::default())
}

/// Availability update body
///
/// Hours are sent only when typed. Focus areas and engagement preferences
/// ride along from the normalized profile when one is given.
pub fn build_availability_payload_with(
    draft: &AvailabilityDraft,
    profile: Option<&ProfilePayload>,
    config: &NormalizerConfig,
) -> AvailabilityPayload {
    let status = draft.status.trim();

    AvailabilityPayload {
        availability_status: if status.is_empty() {
            config.default_availability_status.clone()
        } else {
            status.to_string()
        },
        available_hours_per_week: hours(&draft.hours_per_week),
        open_to_remote: draft.open_to_remote,
        availability_notes: text(&draft.notes),
        timezone: text(&draft.timezone),
        areas_of_focus: profile.map(|p| p.areas_of_focus.clone()),
        preferred_engagements: profile.map(|p| p.preferred_engagements.clone()),
    }
}

/// Every identity problem, in field order
pub fn validate_identity_draft(draft: &IdentityDraft) -> Vec<String> {
    let mut validator = Validator::new();

    validator.require("firstName", &draft.first_name, "First name is required.");
    validator.require("lastName", &draft.last_name, "Last name is required.");

    let email = draft.email.trim();
    if validator.require("email", email, "Email is required.") {
        validator.validate_field_as(
            "email",
            email,
            &EmailValidator::new(),
            "Enter a valid email address.",
        );
    }

    validator.into_errors().messages()
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn hours(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(hours) if hours.is_finite() => Some(hours),
        _ => {
            warn!(hours = raw, "Ignoring non-numeric hours per week");
            None
        }
    }
}
