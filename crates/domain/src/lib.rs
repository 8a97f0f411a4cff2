//! # ProfileHub Domain
//!
//! Profile data model for the ProfileHub editor.
//!
//! This crate contains:
//! - Inbound profile records (lenient JSON) and their entry types
//! - Editable drafts and validated save payloads
//! - Identity and availability form shapes
//! - Normalizer configuration, error types and constants
//! - Default website preferences
//!
//! ## Architecture
//! - No dependencies on other ProfileHub crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
