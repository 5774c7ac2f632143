// src/types/application.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    pub role_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub source: ApplicationSource,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub interview_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub offer_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    InProgress,
    InterviewScheduled,
    InterviewCompleted,
    OfferReceived,
    OfferAccepted,
    OfferDeclined,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 9] = [
        ApplicationStatus::Applied,
        ApplicationStatus::InProgress,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::InterviewCompleted,
        ApplicationStatus::OfferReceived,
        ApplicationStatus::OfferAccepted,
        ApplicationStatus::OfferDeclined,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    /// Wire value, as sent in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::InterviewScheduled => "interview_scheduled",
            ApplicationStatus::InterviewCompleted => "interview_completed",
            ApplicationStatus::OfferReceived => "offer_received",
            ApplicationStatus::OfferAccepted => "offer_accepted",
            ApplicationStatus::OfferDeclined => "offer_declined",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::InterviewCompleted => "Interview Completed",
            ApplicationStatus::OfferReceived => "Offer Received",
            ApplicationStatus::OfferAccepted => "Offer Accepted",
            ApplicationStatus::OfferDeclined => "Offer Declined",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "in_progress" => Ok(ApplicationStatus::InProgress),
            "interview_scheduled" => Ok(ApplicationStatus::InterviewScheduled),
            "interview_completed" => Ok(ApplicationStatus::InterviewCompleted),
            "offer_received" => Ok(ApplicationStatus::OfferReceived),
            "offer_accepted" => Ok(ApplicationStatus::OfferAccepted),
            "offer_declined" => Ok(ApplicationStatus::OfferDeclined),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSource {
    Email,
    Manual,
    Linkedin,
    Indeed,
    Other,
}

impl fmt::Display for ApplicationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplicationSource::Email => "Email",
            ApplicationSource::Manual => "Manual Entry",
            ApplicationSource::Linkedin => "LinkedIn",
            ApplicationSource::Indeed => "Indeed",
            ApplicationSource::Other => "Other",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ApplicationSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(ApplicationSource::Email),
            "manual" => Ok(ApplicationSource::Manual),
            "linkedin" => Ok(ApplicationSource::Linkedin),
            "indeed" => Ok(ApplicationSource::Indeed),
            "other" => Ok(ApplicationSource::Other),
            other => Err(format!("unknown application source: {other}")),
        }
    }
}

// ===== Create/Update Bodies =====

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCreate {
    pub company_name: String,
    pub role_title: String,
    pub status: ApplicationStatus,
    pub source: ApplicationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<DateTime<Utc>>,
}

/// PUT body; absent fields are left untouched by the server, so every field
/// is optional and `None` is omitted from the payload entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date: Option<DateTime<Utc>>,
}

impl ApplicationUpdate {
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().map(|o| o.is_empty()).unwrap_or(true))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values_round_trip() {
        for status in ApplicationStatus::ALL {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
            let parsed: ApplicationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_update_body_omits_unset_fields() {
        let update = ApplicationUpdate {
            status: Some(ApplicationStatus::OfferReceived),
            notes: Some("verbal offer on the phone".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["status"], "offer_received");
    }

    #[test]
    fn test_empty_update_detected() {
        assert!(ApplicationUpdate::default().is_empty());
        let update = ApplicationUpdate {
            location: Some("Berlin".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_application_decodes_with_missing_optionals() {
        let raw = r#"{
            "id": "a-7",
            "user_id": "u-1",
            "company_name": "Acme",
            "role_title": "Platform Engineer",
            "status": "interview_scheduled",
            "applied_date": "2025-10-01T08:00:00Z",
            "source": "linkedin",
            "created_at": "2025-10-01T08:00:00Z",
            "updated_at": "2025-10-05T10:00:00Z"
        }"#;

        let app: JobApplication = serde_json::from_str(raw).unwrap();
        assert_eq!(app.status, ApplicationStatus::InterviewScheduled);
        assert!(app.notes.is_none());
        assert!(app.interview_date.is_none());
    }
}
