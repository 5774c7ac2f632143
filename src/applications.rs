// src/applications.rs
//! Application tracking CRUD plus CSV export

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use tracing::info;

use crate::core::api_client::ApiClient;
use crate::error::Result;
use crate::types::application::{
    ApplicationCreate, ApplicationStatus, ApplicationUpdate, JobApplication,
};

/// Listing filter; skip/limit go through to the server untouched.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub skip: u32,
    pub limit: Option<u32>,
}

pub struct ApplicationsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ApplicationsClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<JobApplication>> {
        let mut params = vec![("skip", filter.skip.to_string())];
        if let Some(limit) = filter.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(status) = filter.status {
            params.push(("status", status.as_str().to_string()));
        }

        let applications: Vec<JobApplication> =
            self.api.get_with_query("/applications/", &params).await?;
        info!("Listed {} applications", applications.len());
        Ok(applications)
    }

    pub async fn create(&self, application: &ApplicationCreate) -> Result<JobApplication> {
        self.api.post("/applications/", application).await
    }

    pub async fn get(&self, application_id: &str) -> Result<JobApplication> {
        self.api.get(&format!("/applications/{application_id}")).await
    }

    pub async fn update(
        &self,
        application_id: &str,
        update: &ApplicationUpdate,
    ) -> Result<JobApplication> {
        self.api
            .put(&format!("/applications/{application_id}"), update)
            .await
    }

    pub async fn delete(&self, application_id: &str) -> Result<()> {
        self.api
            .delete_no_content(&format!("/applications/{application_id}"))
            .await
    }
}

// ===== CSV Export =====

/// Write applications as CSV rows to any writer.
pub fn write_csv<W: Write>(applications: &[JobApplication], writer: W) -> AnyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "id",
        "company",
        "role",
        "status",
        "applied_date",
        "source",
        "location",
        "salary",
        "url",
        "notes",
    ])?;

    for application in applications {
        let record = [
            application.id.clone(),
            application.company_name.clone(),
            application.role_title.clone(),
            application.status.as_str().to_string(),
            application.applied_date.to_rfc3339(),
            application.source.to_string(),
            application.location.clone().unwrap_or_default(),
            application.salary.clone().unwrap_or_default(),
            application.url.clone().unwrap_or_default(),
            application.notes.clone().unwrap_or_default(),
        ];
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export applications to a CSV file on disk.
pub fn export_csv(applications: &[JobApplication], path: &Path) -> AnyResult<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(applications, file)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    info!("Exported {} applications to {}", applications.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::application::ApplicationSource;
    use chrono::{TimeZone, Utc};

    fn sample_application() -> JobApplication {
        JobApplication {
            id: "a-1".into(),
            user_id: "u-1".into(),
            company_name: "Acme".into(),
            role_title: "Engineer, Backend".into(),
            job_description: None,
            location: Some("Geneva".into()),
            salary: None,
            status: ApplicationStatus::Applied,
            applied_date: Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap(),
            source: ApplicationSource::Manual,
            url: None,
            notes: Some("referred by \"Sam\"".into()),
            interview_date: None,
            offer_date: None,
            response_date: None,
            created_at: Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 10, 2, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let mut buffer = Vec::new();
        write_csv(&[sample_application()], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("id,company,role,status"));

        let row = lines.next().unwrap();
        // Fields containing commas or quotes must be escaped, not split.
        assert!(row.contains("\"Engineer, Backend\""));
        assert!(row.contains("applied"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_export_empty_list_is_header_only() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
