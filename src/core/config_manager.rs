// src/core/config_manager.rs
//! Unified configuration management - environment first, config file second

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub api: ApiConfig,
    pub home_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Optional `config.yaml` in the app home; every key can also come from the
/// environment, which wins.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
}

impl ConfigManager {
    /// Load all configuration
    pub fn load() -> Result<Self> {
        let home_dir = Self::resolve_home_dir()?;
        let file = Self::load_file(&home_dir)?;

        let base_url = std::env::var("JOBTRACK_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        // A trailing slash would double up when endpoint paths are appended.
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout_seconds = file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS);

        info!("API base URL: {}", base_url);

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_seconds,
            },
            home_dir,
        })
    }

    fn resolve_home_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("JOBTRACK_HOME") {
            return Ok(PathBuf::from(dir));
        }
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".jobtrack"))
    }

    fn load_file(home_dir: &PathBuf) -> Result<FileConfig> {
        let path = home_dir.join("config.yaml");
        if !path.exists() {
            return Ok(FileConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Path of the credentials file holding the session tokens.
    pub fn credentials_path(&self) -> PathBuf {
        self.home_dir.join("credentials.toml")
    }

    /// Ensure the app home directory exists
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.home_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", self.home_dir.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_parses_partial_yaml() {
        let parsed: FileConfig = serde_yaml::from_str("api_url: https://api.example.com/api/v1\n").unwrap();
        assert_eq!(parsed.api_url.as_deref(), Some("https://api.example.com/api/v1"));
        assert!(parsed.timeout_seconds.is_none());
    }
}
