//! Port interfaces for profile persistence
//!
//! The editor hands validated payloads to these traits; HTTP clients and
//! test doubles live outside this crate.

use async_trait::async_trait;
use profilehub_domain::{AvailabilityPayload, ProfilePayload, ProfileRecord, Result};

/// Trait for submitting profile changes to the backend
#[async_trait]
pub trait ProfileUpdatePort: Send + Sync {
    /// Save the profile and return the record as stored
    async fn update_profile(&self, payload: ProfilePayload) -> Result<ProfileRecord>;

    /// Save availability settings
    async fn update_availability(&self, payload: AvailabilityPayload) -> Result<()>;
}
