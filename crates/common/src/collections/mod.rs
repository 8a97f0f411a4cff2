//! Specialized data structures
//!
//! - **[`tag_set`]**: insertion-ordered, case-insensitive set of trimmed
//!   labels

pub mod tag_set;

pub use tag_set::TagSet;
