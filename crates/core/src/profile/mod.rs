//! Profile draft lifecycle
//!
//! Fetched record → [`build_draft`] → edits via [`reduce`] →
//! [`normalize_draft`] → payload for the update port.

pub mod dirty;
pub mod draft;
pub mod identity;
pub mod normalize;
pub mod reducer;

pub use dirty::{is_dirty, DirtyTracker};
pub use draft::{build_draft, build_draft_from_json};
pub use identity::{
    build_availability_draft, build_availability_draft_with, build_availability_payload,
    build_availability_payload_with, build_identity_draft, validate_identity_draft,
};
pub use normalize::{normalize_draft, normalize_draft_with, NormalizeOutcome};
pub use reducer::{reduce, DraftAction};
