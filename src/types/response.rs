// src/types/response.rs
use serde::Deserialize;

use crate::types::application::JobApplication;

// ===== Service Response Envelopes =====

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardStats {
    pub total_applications: u64,
    pub interviews: u64,
    pub offers: u64,
    /// Percentage, already rounded server-side.
    pub response_rate: f64,
    pub recent_activity: Vec<JobApplication>,
}

#[derive(Debug, Deserialize)]
pub struct SyncStatus {
    pub is_running: bool,
    /// ISO timestamp as the server recorded it; not normalized client-side.
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub last_status: Option<String>,
    #[serde(default)]
    pub last_result: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct CompanyLogoResponse {
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_status_tolerates_nulls() {
        let raw = r#"{"is_running": false, "last_run": null, "last_status": null, "last_result": null}"#;
        let status: SyncStatus = serde_json::from_str(raw).unwrap();
        assert!(!status.is_running);
        assert!(status.last_run.is_none());
    }

    #[test]
    fn test_dashboard_stats_decode() {
        let raw = r#"{
            "total_applications": 12,
            "interviews": 4,
            "offers": 1,
            "response_rate": 58.3,
            "recent_activity": []
        }"#;
        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_applications, 12);
        assert!(stats.recent_activity.is_empty());
    }
}
