pub mod analytics;
pub mod applications;
pub mod auth;
pub mod cli;
pub mod core;
pub mod error;
pub mod jobs;
pub mod resume;
pub mod sample;
pub mod sync;
pub mod types;
pub mod utils;

pub use crate::analytics::AnalyticsClient;
pub use crate::applications::ApplicationsClient;
pub use crate::auth::AuthClient;
pub use crate::core::{ApiClient, ConfigManager, TokenStore};
pub use crate::error::ApiError;
pub use crate::jobs::{ExternalJobsClient, JobsClient};
pub use crate::resume::ResumeClient;
pub use crate::sync::SyncClient;
