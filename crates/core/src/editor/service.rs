//! Profile editor service - validation gate in front of the update port

use std::sync::Arc;

use profilehub_domain::{
    AvailabilityDraft, AvailabilityPayload, NormalizerConfig, ProfileDraft, ProfileHubError,
    ProfilePayload, ProfileRecord, Result,
};
use tracing::{error, info, warn};

use super::ports::ProfileUpdatePort;
use crate::profile::{build_availability_payload_with, normalize_draft_with};

/// Saves drafts once they normalize cleanly
pub struct ProfileEditor {
    port: Arc<dyn ProfileUpdatePort>,
    config: NormalizerConfig,
}

impl ProfileEditor {
    /// Create an editor with the default rules
    pub fn new(port: Arc<dyn ProfileUpdatePort>) -> Self {
        Self { port, config: NormalizerConfig::default() }
    }

    /// Replace the normalization rules
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize and submit a profile draft
    ///
    /// Returns `ProfileHubError::Validation` with every message, without
    /// touching the port, when the draft has problems.
    pub async fn save(&self, draft: &ProfileDraft) -> Result<ProfileRecord> {
        let payload = self.validated(draft)?;

        info!(
            references = payload.references.len(),
            experiences = payload.experiences.len(),
            "Submitting profile update"
        );

        self.port.update_profile(payload).await.map_err(|err| {
            error!(error = %err, retryable = err.is_retryable(), "Profile update failed");
            err
        })
    }

    /// Submit availability settings
    ///
    /// The profile draft must validate first, since its focus areas and
    /// engagement preferences are sent along.
    pub async fn save_availability(
        &self,
        availability: &AvailabilityDraft,
        profile: &ProfileDraft,
    ) -> Result<AvailabilityPayload> {
        let profile_payload = self.validated(profile)?;
        let payload =
            build_availability_payload_with(availability, Some(&profile_payload), &self.config);

        info!(
            status = %payload.availability_status,
            open_to_remote = payload.open_to_remote,
            "Submitting availability update"
        );

        if let Err(err) = self.port.update_availability(payload.clone()).await {
            error!(error = %err, retryable = err.is_retryable(), "Availability update failed");
            return Err(err);
        }

        Ok(payload)
    }

    fn validated(&self, draft: &ProfileDraft) -> Result<ProfilePayload> {
        let outcome = normalize_draft_with(draft, &self.config);
        if !outcome.is_valid() {
            warn!(errors = outcome.errors.len(), "Profile draft failed validation");
            return Err(ProfileHubError::Validation(outcome.errors));
        }
        Ok(outcome.payload)
    }
}
