//! Profile data model
//!
//! - `record`: inbound profile JSON
//! - `draft`: editable form state and its field selectors
//! - `payload`: validated save bodies
//! - `identity`: identity and availability forms
//! - `preferences`: website preference defaults

pub mod draft;
pub mod identity;
pub mod payload;
pub mod preferences;
pub mod record;

pub use draft::{
    CollaborationMemberDraft, ExperienceDraft, ImpactHighlightDraft, PipelineInsightDraft,
    PortfolioLinkDraft, ProfileDraft, QualificationDraft, ReferenceDraft, RowKind, TagList,
    TextField,
};
pub use identity::{AvailabilityDraft, AvailabilityPayload, IdentityDraft};
pub use payload::{
    CollaborationMemberPayload, ExperiencePayload, ImpactHighlightPayload, PipelineInsightPayload,
    PortfolioLinkPayload, ProfilePayload, QualificationPayload, ReferencePayload,
};
pub use preferences::{default_website_preferences, WEBSITE_PREFERENCE_SECTIONS};
pub use record::{
    CollaborationMemberRecord, ExperienceRecord, ImpactHighlightRecord, PipelineInsightRecord,
    PortfolioLinkRecord, ProfileRecord, QualificationRecord, ReferenceRecord,
};
