//! # ProfileHub Core
//!
//! Profile editing logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Draft building, normalization and validation
//! - The pure draft reducer and dirty tracking
//! - Website preference resolution
//! - The editor service and its persistence port
//!
//! ## Architecture Principles
//! - Depends only on `profilehub-common` and `profilehub-domain`
//! - No HTTP or storage code
//! - Persistence via the [`ProfileUpdatePort`] trait
//! - Normalization is synchronous and pure

pub mod editor;
pub mod preferences;
pub mod profile;

pub use editor::ports::ProfileUpdatePort;
pub use editor::ProfileEditor;
pub use preferences::resolve_website_preferences;
pub use profile::{
    build_availability_draft, build_availability_payload, build_draft, build_draft_from_json,
    build_identity_draft, is_dirty, normalize_draft, normalize_draft_with, reduce,
    validate_identity_draft, DirtyTracker, DraftAction, NormalizeOutcome,
};
