// src/jobs/mod.rs
//! Job search, recommendations and the saved-jobs list

pub mod external;

pub use external::ExternalJobsClient;

use tracing::info;

use crate::core::api_client::ApiClient;
use crate::error::Result;
use crate::types::job::{JobRecommendation, JobSearchRequest};

pub struct JobsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> JobsClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn search(&self, request: &JobSearchRequest) -> Result<Vec<JobRecommendation>> {
        let jobs: Vec<JobRecommendation> = self.api.post("/jobs/search", request).await?;
        info!("Search returned {} jobs", jobs.len());
        Ok(jobs)
    }

    /// Resume-aware recommendations; ranking is entirely server-side.
    pub async fn recommendations(&self, request: &JobSearchRequest) -> Result<Vec<JobRecommendation>> {
        self.api.post("/jobs/recommendations", request).await
    }

    pub async fn details(&self, job_id: &str) -> Result<JobRecommendation> {
        self.api.get(&format!("/jobs/{job_id}")).await
    }

    pub async fn save(&self, job_id: &str) -> Result<()> {
        self.api.post_no_content(&format!("/jobs/{job_id}/save")).await
    }

    pub async fn unsave(&self, job_id: &str) -> Result<()> {
        self.api
            .delete_no_content(&format!("/jobs/{job_id}/save"))
            .await
    }

    pub async fn saved(&self) -> Result<Vec<JobRecommendation>> {
        self.api.get("/jobs/saved").await
    }
}
