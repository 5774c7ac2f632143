// src/analytics.rs
use crate::core::api_client::ApiClient;
use crate::error::Result;
use crate::types::response::DashboardStats;

/// Dashboard numbers are computed server-side; this client only fetches and
/// renders them.
pub struct AnalyticsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AnalyticsClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.api.get("/analytics/dashboard").await
    }
}
