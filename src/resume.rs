// src/resume.rs
//! Resume upload and retrieval; parsing happens server-side

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use tracing::info;

use crate::core::api_client::ApiClient;
use crate::error::Result;
use crate::types::resume::Resume;
use crate::utils::{get_file_extension, validate_file_extension};

const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

pub struct ResumeClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ResumeClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Read a resume file from disk and upload it; the backend parses it
    /// and returns the extracted structure.
    pub async fn upload_file(&self, path: &Path) -> AnyResult<Resume> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", path.display()))?
            .to_string();

        validate_file_extension(&file_name, &ALLOWED_EXTENSIONS)?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

        info!("Uploading resume {} ({} bytes)", file_name, bytes.len());
        let resume = self.upload(&file_name, bytes).await?;
        Ok(resume)
    }

    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<Resume> {
        let content_type = content_type_for(file_name);
        self.api
            .post_multipart("/resume/upload", "file", file_name, bytes, content_type)
            .await
    }

    /// Current resume, or `None` when nothing has been uploaded yet.
    pub async fn get(&self) -> Result<Option<Resume>> {
        match self.api.get::<Resume>("/resume").await {
            Ok(resume) => Ok(Some(resume)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self) -> Result<()> {
        self.api.delete_no_content("/resume").await
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    match get_file_extension(file_name).as_deref() {
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/pdf",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_detection() {
        assert_eq!(content_type_for("cv.pdf"), "application/pdf");
        assert!(content_type_for("cv.DOCX").contains("wordprocessingml"));
    }
}
