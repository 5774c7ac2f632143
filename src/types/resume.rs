// src/types/resume.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parsed resume as returned by the backend after upload. Parsing and skill
/// extraction happen server-side; the client only displays the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    pub file_url: String,
    pub parsed_text: String,
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub summary: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: String,
}
