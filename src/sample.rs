// src/sample.rs
//! Bundled sample data shown when the API is unreachable, so the listing
//! commands still render something useful offline.

use chrono::{Duration, Utc};

use crate::types::application::{ApplicationSource, ApplicationStatus, JobApplication};
use crate::types::job::{
    EmploymentType, ExperienceLevel, JobRecommendation, LocationType, SalaryPeriod, SalaryRange,
};

pub fn sample_recommendations() -> Vec<JobRecommendation> {
    let now = Utc::now();
    vec![
        JobRecommendation {
            id: "sample-1".into(),
            title: "Senior Backend Engineer".into(),
            company: "Nimbus Labs".into(),
            location: "Zurich, CH".into(),
            location_type: LocationType::Hybrid,
            salary: Some(SalaryRange {
                min: 120000,
                max: 150000,
                currency: "CHF".into(),
                period: SalaryPeriod::Year,
            }),
            description: "Own the services behind our scheduling platform.".into(),
            requirements: vec![
                "5+ years backend experience".into(),
                "Production Rust or Go".into(),
            ],
            benefits: vec!["25 days PTO".into(), "Learning budget".into()],
            posted_date: now - Duration::days(2),
            application_url: "https://nimbuslabs.example/jobs/1".into(),
            match_score: 0.93,
            match_reasons: vec!["Skills overlap with your resume".into()],
            skills: vec!["Rust".into(), "PostgreSQL".into(), "gRPC".into()],
            experience_level: ExperienceLevel::Senior,
            employment_type: EmploymentType::FullTime,
            company_logo: None,
            is_remote: false,
            is_saved: false,
        },
        JobRecommendation {
            id: "sample-2".into(),
            title: "Platform Engineer".into(),
            company: "Ferrum Systems".into(),
            location: "Remote (EU)".into(),
            location_type: LocationType::Remote,
            salary: Some(SalaryRange {
                min: 90000,
                max: 120000,
                currency: "EUR".into(),
                period: SalaryPeriod::Year,
            }),
            description: "Build internal tooling used by every product team.".into(),
            requirements: vec!["Kubernetes".into(), "CI/CD ownership".into()],
            benefits: vec!["Remote-first".into(), "Hardware budget".into()],
            posted_date: now - Duration::days(5),
            application_url: "https://ferrum.example/careers/2".into(),
            match_score: 0.86,
            match_reasons: vec!["Remote preference matches".into()],
            skills: vec!["Kubernetes".into(), "Terraform".into(), "Rust".into()],
            experience_level: ExperienceLevel::Mid,
            employment_type: EmploymentType::FullTime,
            company_logo: None,
            is_remote: true,
            is_saved: true,
        },
        JobRecommendation {
            id: "sample-3".into(),
            title: "Software Engineer, Data".into(),
            company: "Lakeshore Analytics".into(),
            location: "Geneva, CH".into(),
            location_type: LocationType::Onsite,
            salary: None,
            description: "Pipelines and storage for market analytics.".into(),
            requirements: vec!["SQL at scale".into(), "Stream processing".into()],
            benefits: vec!["Relocation support".into()],
            posted_date: now - Duration::days(1),
            application_url: "https://lakeshore.example/jobs/3".into(),
            match_score: 0.74,
            match_reasons: vec!["Adjacent skills".into()],
            skills: vec!["SQL".into(), "Kafka".into()],
            experience_level: ExperienceLevel::Mid,
            employment_type: EmploymentType::Contract,
            company_logo: None,
            is_remote: false,
            is_saved: false,
        },
    ]
}

pub fn sample_applications() -> Vec<JobApplication> {
    let now = Utc::now();
    vec![
        JobApplication {
            id: "sample-1".into(),
            user_id: "sample-user".into(),
            company_name: "Nimbus Labs".into(),
            role_title: "Senior Backend Engineer".into(),
            job_description: None,
            location: Some("Zurich, CH".into()),
            salary: Some("CHF 120,000 - 150,000".into()),
            status: ApplicationStatus::InterviewScheduled,
            applied_date: now - Duration::days(7),
            source: ApplicationSource::Linkedin,
            url: Some("https://nimbuslabs.example/jobs/1".into()),
            notes: Some("Recruiter call went well".into()),
            interview_date: Some(now + Duration::days(3)),
            offer_date: None,
            response_date: Some(now - Duration::days(3)),
            created_at: now - Duration::days(7),
            updated_at: now,
        },
        JobApplication {
            id: "sample-2".into(),
            user_id: "sample-user".into(),
            company_name: "Ferrum Systems".into(),
            role_title: "Platform Engineer".into(),
            job_description: None,
            location: Some("Remote (EU)".into()),
            salary: None,
            status: ApplicationStatus::Applied,
            applied_date: now - Duration::days(3),
            source: ApplicationSource::Email,
            url: None,
            notes: None,
            interview_date: None,
            offer_date: None,
            response_date: None,
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(3),
        },
        JobApplication {
            id: "sample-3".into(),
            user_id: "sample-user".into(),
            company_name: "Lakeshore Analytics".into(),
            role_title: "Software Engineer, Data".into(),
            job_description: None,
            location: Some("Geneva, CH".into()),
            salary: None,
            status: ApplicationStatus::Rejected,
            applied_date: now - Duration::days(21),
            source: ApplicationSource::Indeed,
            url: None,
            notes: Some("Position filled internally".into()),
            interview_date: Some(now - Duration::days(14)),
            offer_date: None,
            response_date: Some(now - Duration::days(7)),
            created_at: now - Duration::days(21),
            updated_at: now - Duration::days(7),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_nonempty_and_consistent() {
        let jobs = sample_recommendations();
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| (0.0..=1.0).contains(&j.match_score)));

        let apps = sample_applications();
        assert!(!apps.is_empty());
        assert!(apps.iter().all(|a| a.created_at <= a.updated_at));
    }
}
