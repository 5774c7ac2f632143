// src/types/mod.rs
//! Wire-format records mirrored from the JobTracker API

pub mod application;
pub mod job;
pub mod resume;
pub mod response;
pub mod user;

pub use application::{
    ApplicationCreate, ApplicationSource, ApplicationStatus, ApplicationUpdate, JobApplication,
};
pub use job::{
    EmploymentType, ExperienceLevel, JobRecommendation, JobSearchRequest, JobSource, JobsEnvelope,
    LocationType, SalaryPeriod, SalaryRange,
};
pub use resume::{Education, Resume, WorkExperience};
pub use response::{DashboardStats, MessageResponse, SyncStatus};
pub use user::{AuthResponse, RefreshTokenRequest, SignInRequest, SignUpRequest, User};
