// Source trait for dashboard snapshots
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Reasons a dashboard fetch can fail. All of them are handled the same way
/// upstream: logged, prior state kept, nothing published.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("dashboard endpoint returned status {0}")]
    Status(u16),

    #[error("failed to decode dashboard payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the full dashboard summary
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError>;
}
