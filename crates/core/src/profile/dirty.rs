//! Unsaved-change detection
//!
//! Two drafts are equivalent when they normalize to the same payload, so
//! whitespace edits, blank rows and duplicate tags do not mark a form dirty.

use profilehub_domain::{NormalizerConfig, ProfileDraft, ProfilePayload};

use super::normalize::{normalize_draft, normalize_draft_with};

/// True when `current` would save something different from `baseline`
pub fn is_dirty(baseline: &ProfileDraft, current: &ProfileDraft) -> bool {
    normalize_draft(baseline).payload != normalize_draft(current).payload
}

/// Dirty check against a fixed baseline, normalized once
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    config: NormalizerConfig,
    baseline: ProfilePayload,
}

impl DirtyTracker {
    /// Track changes against `baseline` with the default rules
    pub fn new(baseline: &ProfileDraft) -> Self {
        Self::with_config(baseline, NormalizerConfig::default())
    }

    /// Track changes against `baseline` under the given normalizer rules
    pub fn with_config(baseline: &ProfileDraft, config: NormalizerConfig) -> Self {
        let baseline = normalize_draft_with(baseline, &config).payload;
        Self { config, baseline }
    }

    /// True when `current` normalizes to a different payload than the baseline
    pub fn is_dirty(&self, current: &ProfileDraft) -> bool {
        normalize_draft_with(current, &self.config).payload != self.baseline
    }

    /// Adopt a new baseline, typically after a successful save
    pub fn reset(&mut self, baseline: &ProfileDraft) {
        self.baseline = normalize_draft_with(baseline, &self.config).payload;
    }

    /// Normalized payload of the current baseline
    pub fn baseline_payload(&self) -> &ProfilePayload {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use profilehub_domain::ExperienceDraft;

    use super::*;

    fn draft(headline: &str) -> ProfileDraft {
        ProfileDraft { headline: headline.to_string(), ..Default::default() }
    }

    #[test]
    fn test_cosmetic_edits_are_clean() {
        let baseline = draft("Engineer");
        let mut current = draft("  Engineer ");
        current.experiences.push(ExperienceDraft::default());
        current.skills = vec![];

        assert!(!is_dirty(&baseline, &current));
    }

    #[test]
    fn test_content_edit_is_dirty() {
        assert!(is_dirty(&draft("Engineer"), &draft("Manager")));
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = DirtyTracker::new(&draft("Engineer"));
        let edited = draft("Manager");

        assert!(tracker.is_dirty(&edited));
        tracker.reset(&edited);
        assert!(!tracker.is_dirty(&edited));
        assert_eq!(tracker.baseline_payload().headline.as_deref(), Some("Manager"));
    }
}
