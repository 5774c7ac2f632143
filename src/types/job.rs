// src/types/job.rs
//! Job listing records and the search request shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::format_amount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub application_url: String,
    /// Server-supplied resume-to-job relevance, 0.0 to 1.0.
    pub match_score: f64,
    pub match_reasons: Vec<String>,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub is_remote: bool,
    pub is_saved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Onsite,
    Remote,
    Hybrid,
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationType::Onsite => "On-site",
            LocationType::Remote => "Remote",
            LocationType::Hybrid => "Hybrid",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onsite" | "on-site" => Ok(LocationType::Onsite),
            "remote" => Ok(LocationType::Remote),
            "hybrid" => Ok(LocationType::Hybrid),
            other => Err(format!("unknown location type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Internship,
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "internship",
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Executive => "Executive",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internship" => Ok(ExperienceLevel::Internship),
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "lead" => Ok(ExperienceLevel::Lead),
            "executive" => Ok(ExperienceLevel::Executive),
            other => Err(format!("unknown experience level: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
        };
        write!(f, "{name}")
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full_time" | "full-time" => Ok(EmploymentType::FullTime),
            "part_time" | "part-time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "freelance" => Ok(EmploymentType::Freelance),
            other => Err(format!("unknown employment type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
    pub period: SalaryPeriod,
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} / {}",
            self.currency,
            format_amount(self.min),
            format_amount(self.max),
            self.period
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    Hour,
    Day,
    Month,
    Year,
}

impl fmt::Display for SalaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SalaryPeriod::Hour => "hr",
            SalaryPeriod::Day => "day",
            SalaryPeriod::Month => "mo",
            SalaryPeriod::Year => "yr",
        };
        write!(f, "{name}")
    }
}

// ===== Search Request =====

/// Body for `/jobs/search` and `/jobs/recommendations`. Pagination is a
/// plain limit/offset pair passed through to the server untouched.
#[derive(Debug, Clone, Serialize)]
pub struct JobSearchRequest {
    pub query: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
    pub experience_level: Option<ExperienceLevel>,
    pub employment_type: Option<EmploymentType>,
    pub min_salary: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub use_semantic_search: bool,
    pub limit: u32,
    pub offset: u32,
}

impl Default for JobSearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            location: None,
            location_type: None,
            experience_level: None,
            employment_type: None,
            min_salary: None,
            skills: None,
            use_semantic_search: true,
            limit: 20,
            offset: 0,
        }
    }
}

// ===== External Sources =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSource {
    Linkedin,
    Google,
    Indeed,
    Internal,
    Aggregated,
}

impl JobSource {
    /// Path segment under `/jobs/external/`. The internal catalog is not an
    /// external provider and has no segment.
    pub fn external_segment(&self) -> Option<&'static str> {
        match self {
            JobSource::Linkedin => Some("linkedin"),
            JobSource::Google => Some("google"),
            JobSource::Indeed => Some("indeed"),
            JobSource::Aggregated => Some("aggregate"),
            JobSource::Internal => None,
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobSource::Linkedin => "LinkedIn",
            JobSource::Google => "Google Jobs",
            JobSource::Indeed => "Indeed",
            JobSource::Internal => "JobTracker",
            JobSource::Aggregated => "All Sources",
        };
        write!(f, "{name}")
    }
}

impl FromStr for JobSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linkedin" => Ok(JobSource::Linkedin),
            "google" => Ok(JobSource::Google),
            "indeed" => Ok(JobSource::Indeed),
            "internal" => Ok(JobSource::Internal),
            "aggregate" | "aggregated" | "all" => Ok(JobSource::Aggregated),
            other => Err(format!("unknown job source: {other}")),
        }
    }
}

/// Envelope returned by the external-source endpoints.
#[derive(Debug, Deserialize)]
pub struct JobsEnvelope {
    pub jobs: Vec<JobRecommendation>,
    pub total: u64,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_decodes_from_wire_json() {
        let raw = r#"{
            "id": "j-42",
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Zurich",
            "location_type": "hybrid",
            "salary": {"min": 110000, "max": 140000, "currency": "CHF", "period": "year"},
            "description": "Build services",
            "requirements": ["Rust"],
            "benefits": [],
            "posted_date": "2025-11-02T09:30:00Z",
            "application_url": "https://acme.example/jobs/42",
            "match_score": 0.87,
            "match_reasons": ["skills overlap"],
            "skills": ["Rust", "SQL"],
            "experience_level": "senior",
            "employment_type": "full_time",
            "is_remote": false,
            "is_saved": true
        }"#;

        let job: JobRecommendation = serde_json::from_str(raw).unwrap();
        assert_eq!(job.company, "Acme");
        assert_eq!(job.experience_level, ExperienceLevel::Senior);
        assert!(job.company_logo.is_none());
        assert!(job.match_score > 0.86 && job.match_score < 0.88);
        assert_eq!(job.salary.unwrap().to_string(), "CHF 110,000 - 140,000 / yr");
    }

    #[test]
    fn test_search_request_serializes_snake_case_enums() {
        let request = JobSearchRequest {
            query: Some("rust".into()),
            employment_type: Some(EmploymentType::FullTime),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["employment_type"], "full_time");
        assert_eq!(value["use_semantic_search"], true);
        assert_eq!(value["limit"], 20);
        // Unset filters still appear as nulls, matching the original clients.
        assert!(value["min_salary"].is_null());
    }

    #[test]
    fn test_job_source_round_trip() {
        assert_eq!("aggregate".parse::<JobSource>().unwrap(), JobSource::Aggregated);
        assert_eq!(JobSource::Aggregated.external_segment(), Some("aggregate"));
        assert_eq!(JobSource::Internal.external_segment(), None);
        assert_eq!(JobSource::Linkedin.to_string(), "LinkedIn");
    }
}
