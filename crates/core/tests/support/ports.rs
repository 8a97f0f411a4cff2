//! In-memory `ProfileUpdatePort` implementation

use std::sync::Arc;

use async_trait::async_trait;
use profilehub_core::ProfileUpdatePort;
use profilehub_domain::{
    AvailabilityPayload, ProfileHubError, ProfilePayload, ProfileRecord, Result as DomainResult,
};
use tokio::sync::Mutex;

/// Records every submission and echoes profiles back as records.
///
/// Can be switched into a failing mode to exercise error paths.
#[derive(Default, Clone)]
pub struct MockProfilePort {
    profiles: Arc<Mutex<Vec<ProfilePayload>>>,
    availability: Arc<Mutex<Vec<AvailabilityPayload>>>,
    failure: Option<ProfileHubError>,
}

impl MockProfilePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn failing(error: ProfileHubError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub async fn submitted_profiles(&self) -> Vec<ProfilePayload> {
        self.profiles.lock().await.clone()
    }

    pub async fn submitted_availability(&self) -> Vec<AvailabilityPayload> {
        self.availability.lock().await.clone()
    }
}

#[async_trait]
impl ProfileUpdatePort for MockProfilePort {
    async fn update_profile(&self, payload: ProfilePayload) -> DomainResult<ProfileRecord> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let record = ProfileRecord::from(&payload);
        self.profiles.lock().await.push(payload);
        Ok(record)
    }

    async fn update_availability(&self, payload: AvailabilityPayload) -> DomainResult<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.availability.lock().await.push(payload);
        Ok(())
    }
}
