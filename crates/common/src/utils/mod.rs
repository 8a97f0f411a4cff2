//! Common utility functions
//!
//! - **[`merge`]**: structural deep merge of JSON documents

pub mod merge;

// Re-export commonly used items for convenience
pub use self::merge::deep_merge;
