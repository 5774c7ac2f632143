// src/jobs/external.rs
//! Externally-sourced listings proxied by the backend (LinkedIn, Google
//! Jobs, Indeed, or all of them merged server-side)

use tracing::info;

use crate::core::api_client::ApiClient;
use crate::error::{ApiError, Result};
use crate::types::job::{ExperienceLevel, JobRecommendation, JobSource, JobsEnvelope};
use crate::types::response::CompanyLogoResponse;

/// Query parameters shared by the external-source endpoints.
#[derive(Debug, Clone)]
pub struct ExternalJobQuery {
    pub keywords: String,
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub use_semantic_match: bool,
    pub limit: u32,
}

impl ExternalJobQuery {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            location: None,
            experience_level: None,
            use_semantic_match: true,
            limit: 20,
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("keywords", self.keywords.clone()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        if let Some(level) = self.experience_level {
            params.push(("experience_level", level.as_str().to_string()));
        }
        params
    }
}

pub struct ExternalJobsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ExternalJobsClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn linkedin_jobs(&self, query: &ExternalJobQuery) -> Result<JobsEnvelope> {
        self.fetch(JobSource::Linkedin, query).await
    }

    pub async fn google_jobs(&self, query: &ExternalJobQuery) -> Result<JobsEnvelope> {
        self.fetch(JobSource::Google, query).await
    }

    pub async fn indeed_jobs(&self, query: &ExternalJobQuery) -> Result<JobsEnvelope> {
        self.fetch(JobSource::Indeed, query).await
    }

    /// One call, every provider; the backend merges and dedupes.
    pub async fn all_sources(&self, query: &ExternalJobQuery) -> Result<JobsEnvelope> {
        self.fetch(JobSource::Aggregated, query).await
    }

    pub async fn fetch(&self, source: JobSource, query: &ExternalJobQuery) -> Result<JobsEnvelope> {
        let segment = source
            .external_segment()
            .ok_or_else(|| ApiError::InvalidUrl(format!("/jobs/external/{source:?}")))?;

        let mut params = query.to_params();
        if source == JobSource::Aggregated {
            params.push(("use_semantic_match", query.use_semantic_match.to_string()));
        }

        let envelope: JobsEnvelope = self
            .api
            .get_with_query(&format!("/jobs/external/{segment}"), &params)
            .await?;
        info!(
            "Fetched {} of {} jobs from {}",
            envelope.jobs.len(),
            envelope.total,
            envelope.source
        );
        Ok(envelope)
    }

    /// Company logo lookup; the backend keeps the provider API keys.
    pub async fn company_logo(
        &self,
        company_name: &str,
        domain: Option<&str>,
    ) -> Result<Option<String>> {
        let mut params = vec![("company_name", company_name.to_string())];
        if let Some(domain) = domain {
            params.push(("domain", domain.to_string()));
        }

        let response: CompanyLogoResponse = self
            .api
            .get_with_query("/jobs/company-logo", &params)
            .await?;
        Ok(response.logo_url)
    }

    /// Recommendations computed from an uploaded resume.
    pub async fn resume_recommendations(
        &self,
        resume_id: &str,
        location: Option<&str>,
        limit: u32,
    ) -> Result<Vec<JobRecommendation>> {
        let mut params = vec![
            ("resume_id", resume_id.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(location) = location {
            params.push(("location", location.to_string()));
        }

        let envelope: JobsEnvelope = self
            .api
            .get_with_query("/jobs/recommendations/semantic", &params)
            .await?;
        Ok(envelope.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_include_optional_fields_when_set() {
        let mut query = ExternalJobQuery::new("rust backend");
        query.location = Some("Lausanne".into());
        query.experience_level = Some(ExperienceLevel::Senior);
        query.limit = 50;

        let params = query.to_params();
        assert!(params.contains(&("keywords", "rust backend".to_string())));
        assert!(params.contains(&("limit", "50".to_string())));
        assert!(params.contains(&("location", "Lausanne".to_string())));
        assert!(params.contains(&("experience_level", "senior".to_string())));
    }

    #[test]
    fn test_query_params_skip_unset_fields() {
        let params = ExternalJobQuery::new("data engineer").to_params();
        assert_eq!(params.len(), 2);
    }
}
