// HTTP dashboard source - single authenticated GET against the dashboard endpoint
use crate::application::dashboard_source::{DashboardSource, FetchError};
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpDashboardClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl DashboardSource for HttpDashboardClient {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!("Dashboard response: {} bytes", body.len());

        Ok(serde_json::from_slice::<DashboardSnapshot>(&body)?)
    }
}
