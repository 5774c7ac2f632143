// src/cli.rs
//! Command-line surface: one subcommand per screen action of the original
//! clients.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::analytics::AnalyticsClient;
use crate::applications::{export_csv, ApplicationFilter, ApplicationsClient};
use crate::auth::{self, is_valid_email, is_valid_password, password_strength, AuthClient};
use crate::core::{ApiClient, ConfigManager, TokenStore};
use crate::error::ApiError;
use crate::jobs::{external::ExternalJobQuery, ExternalJobsClient, JobsClient};
use crate::resume::ResumeClient;
use crate::sample;
use crate::sync::SyncClient;
use crate::types::application::{
    ApplicationCreate, ApplicationSource, ApplicationStatus, ApplicationUpdate, JobApplication,
};
use crate::types::job::{
    EmploymentType, ExperienceLevel, JobRecommendation, JobSearchRequest, JobSource, LocationType,
};
use crate::types::resume::Resume;
use crate::types::response::{DashboardStats, SyncStatus};
use crate::types::user::User;
use crate::utils::truncate;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Track job applications and browse listings from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Account and session management
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Search, recommendations, saved jobs and external sources
    #[command(subcommand)]
    Jobs(JobsCommand),
    /// Track your applications
    #[command(subcommand)]
    Apps(AppsCommand),
    /// Upload and inspect your resume
    #[command(subcommand)]
    Resume(ResumeCommand),
    /// Dashboard statistics
    Analytics,
    /// Email sync control
    #[command(subcommand)]
    Sync(SyncCommand),
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create an account
    Signup {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with an existing account
    Signin {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Signout,
    /// Show the signed-in user
    Whoami,
    /// Force a token refresh
    Refresh,
    /// Request a password reset email
    PasswordReset { email: String },
    /// Confirm a password reset with the emailed token
    PasswordResetConfirm {
        token: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
pub enum JobsCommand {
    /// Search the internal catalog
    Search {
        query: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        location_type: Option<LocationType>,
        #[arg(long)]
        experience: Option<ExperienceLevel>,
        #[arg(long)]
        employment: Option<EmploymentType>,
        #[arg(long)]
        min_salary: Option<i64>,
        /// Comma-separated skill filters
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        /// Plain keyword matching instead of semantic search
        #[arg(long)]
        no_semantic: bool,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Personalized recommendations
    Recommend {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Recommendations matched against an uploaded resume
    Semantic {
        resume_id: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Real-time listings from external providers
    External {
        keywords: String,
        #[arg(long, default_value = "aggregate")]
        source: JobSource,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        experience: Option<ExperienceLevel>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Full details of a single listing
    Show { job_id: String },
    /// Bookmark a listing
    Save { job_id: String },
    /// Remove a bookmark
    Unsave { job_id: String },
    /// List bookmarked jobs
    Saved,
    /// Look up a company logo URL
    Logo {
        company: String,
        #[arg(long)]
        domain: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AppsCommand {
    /// List tracked applications
    List {
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Track a new application
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "applied")]
        status: ApplicationStatus,
        #[arg(long, default_value = "manual")]
        source: ApplicationSource,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// RFC 3339 timestamp; defaults to the server-side now
        #[arg(long)]
        applied_date: Option<DateTime<Utc>>,
    },
    /// Show one application
    Show { id: String },
    /// Update fields of an application
    Update {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        interview_date: Option<DateTime<Utc>>,
        #[arg(long)]
        offer_date: Option<DateTime<Utc>>,
        #[arg(long)]
        response_date: Option<DateTime<Utc>>,
    },
    /// Stop tracking an application
    Delete { id: String },
    /// Export applications to CSV
    Export {
        #[arg(long, default_value = "applications.csv")]
        output: PathBuf,
        #[arg(long)]
        status: Option<ApplicationStatus>,
    },
}

#[derive(Subcommand)]
pub enum ResumeCommand {
    /// Upload a resume (pdf or docx) for parsing
    Upload { file: PathBuf },
    /// Show the parsed resume on file
    Show,
    /// Delete the uploaded resume
    Delete,
}

#[derive(Subcommand)]
pub enum SyncCommand {
    /// Trigger a sync run
    Run,
    /// Show the last sync outcome
    Status,
}

/// Entry point called by the binary after config load.
pub async fn run(cli: Cli, config: ConfigManager) -> Result<()> {
    let token_store = TokenStore::new(config.credentials_path());
    let api = ApiClient::new(
        config.api.base_url.clone(),
        config.api.timeout_seconds,
        token_store,
    )?;

    // Silent one-shot refresh when the stored access token has expired.
    auth::ensure_session(&api).await?;

    match cli.command {
        Command::Auth(command) => handle_auth(&api, command).await,
        Command::Jobs(command) => handle_jobs(&api, command).await,
        Command::Apps(command) => handle_apps(&api, command).await,
        Command::Resume(command) => handle_resume(&api, command).await,
        Command::Analytics => handle_analytics(&api).await,
        Command::Sync(command) => handle_sync(&api, command).await,
    }
}

// ===== Auth =====

async fn handle_auth(api: &ApiClient, command: AuthCommand) -> Result<()> {
    let client = AuthClient::new(api);

    match command {
        AuthCommand::Signup {
            email,
            name,
            password,
        } => {
            if !is_valid_email(&email) {
                anyhow::bail!("Invalid email address: {}", email);
            }
            if !is_valid_password(&password) {
                anyhow::bail!(
                    "Password must be at least 8 characters with upper case, lower case and a digit"
                );
            }

            let response = client.sign_up(&email, &password, &name).await?;
            println!("✓ Account created for {}", response.user.email);
            println!("  Password strength: {}", password_strength(&password));
        }

        AuthCommand::Signin { email, password } => {
            let response = client.sign_in(&email, &password).await?;
            println!("✓ Signed in as {}", response.user.email);
        }

        AuthCommand::Signout => {
            client.sign_out()?;
            println!("✓ Signed out");
        }

        AuthCommand::Whoami => match client.current_user().await {
            Ok(user) => print_user(&user),
            Err(ApiError::Unauthorized) => println!("Not signed in."),
            Err(err) => return Err(err.into()),
        },

        AuthCommand::Refresh => {
            let Some(credentials) = api.token_store().load() else {
                anyhow::bail!("Not signed in");
            };
            let response = client.refresh(&credentials.refresh_token).await?;
            println!("✓ Session refreshed for {}", response.user.email);
        }

        AuthCommand::PasswordReset { email } => {
            client.request_password_reset(&email).await?;
            println!("✓ Password reset requested, check your inbox");
        }

        AuthCommand::PasswordResetConfirm { token, password } => {
            if !is_valid_password(&password) {
                anyhow::bail!(
                    "Password must be at least 8 characters with upper case, lower case and a digit"
                );
            }
            client.confirm_password_reset(&token, &password).await?;
            println!("✓ Password updated, sign in with the new password");
        }
    }

    Ok(())
}

// ===== Jobs =====

async fn handle_jobs(api: &ApiClient, command: JobsCommand) -> Result<()> {
    let client = JobsClient::new(api);
    let external = ExternalJobsClient::new(api);

    match command {
        JobsCommand::Search {
            query,
            location,
            location_type,
            experience,
            employment,
            min_salary,
            skills,
            no_semantic,
            limit,
            offset,
        } => {
            let request = JobSearchRequest {
                query,
                location,
                location_type,
                experience_level: experience,
                employment_type: employment,
                min_salary,
                skills,
                use_semantic_search: !no_semantic,
                limit,
                offset,
            };
            let jobs = client.search(&request).await?;
            print_job_table(&jobs);
        }

        JobsCommand::Recommend {
            query,
            location,
            limit,
            offset,
        } => {
            let request = JobSearchRequest {
                query,
                location,
                limit,
                offset,
                ..Default::default()
            };
            match client.recommendations(&request).await {
                Ok(jobs) => print_job_table(&jobs),
                Err(err) if err.is_unreachable() => {
                    warn!("API unreachable: {}", err);
                    println!("Server unreachable - showing bundled sample data\n");
                    print_job_table(&sample::sample_recommendations());
                }
                Err(err) => return Err(err.into()),
            }
        }

        JobsCommand::Semantic {
            resume_id,
            location,
            limit,
        } => {
            let jobs = external
                .resume_recommendations(&resume_id, location.as_deref(), limit)
                .await?;
            print_job_table(&jobs);
        }

        JobsCommand::External {
            keywords,
            source,
            location,
            experience,
            limit,
        } => {
            let mut query = ExternalJobQuery::new(keywords);
            query.location = location;
            query.experience_level = experience;
            query.limit = limit;

            let envelope = external.fetch(source, &query).await?;
            println!("{} results from {}\n", envelope.total, source);
            print_job_table(&envelope.jobs);
        }

        JobsCommand::Show { job_id } => {
            let job = client.details(&job_id).await?;
            print_job_details(&job);
        }

        JobsCommand::Save { job_id } => {
            client.save(&job_id).await?;
            println!("✓ Saved job {}", job_id);
        }

        JobsCommand::Unsave { job_id } => {
            client.unsave(&job_id).await?;
            println!("✓ Removed job {}", job_id);
        }

        JobsCommand::Saved => {
            let jobs = client.saved().await?;
            print_job_table(&jobs);
        }

        JobsCommand::Logo { company, domain } => {
            match external.company_logo(&company, domain.as_deref()).await? {
                Some(url) => println!("{url}"),
                None => println!("No logo found for {}", company),
            }
        }
    }

    Ok(())
}

// ===== Applications =====

async fn handle_apps(api: &ApiClient, command: AppsCommand) -> Result<()> {
    let client = ApplicationsClient::new(api);

    match command {
        AppsCommand::List {
            status,
            skip,
            limit,
        } => {
            let filter = ApplicationFilter {
                status,
                skip,
                limit,
            };
            match client.list(&filter).await {
                Ok(applications) => print_application_table(&applications),
                Err(err) if err.is_unreachable() => {
                    warn!("API unreachable: {}", err);
                    println!("Server unreachable - showing bundled sample data\n");
                    print_application_table(&sample::sample_applications());
                }
                Err(err) => return Err(err.into()),
            }
        }

        AppsCommand::Add {
            company,
            role,
            status,
            source,
            location,
            salary,
            url,
            notes,
            description,
            applied_date,
        } => {
            let create = ApplicationCreate {
                company_name: company,
                role_title: role,
                status,
                source,
                job_description: description,
                location,
                salary,
                url,
                notes,
                applied_date,
            };
            let application = client.create(&create).await?;
            println!(
                "✓ Tracking {} at {} (id {})",
                application.role_title, application.company_name, application.id
            );
        }

        AppsCommand::Show { id } => {
            let application = client.get(&id).await?;
            print_application_details(&application);
        }

        AppsCommand::Update {
            id,
            company,
            role,
            status,
            location,
            salary,
            url,
            notes,
            interview_date,
            offer_date,
            response_date,
        } => {
            let update = ApplicationUpdate {
                company_name: company,
                role_title: role,
                status,
                job_description: None,
                location,
                salary,
                url,
                notes,
                interview_date,
                offer_date,
                response_date,
            };
            if update.is_empty() {
                anyhow::bail!("Nothing to update, pass at least one field flag");
            }

            let application = client.update(&id, &update).await?;
            println!(
                "✓ Updated {} at {} ({})",
                application.role_title, application.company_name, application.status
            );
        }

        AppsCommand::Delete { id } => {
            client.delete(&id).await?;
            println!("✓ Deleted application {}", id);
        }

        AppsCommand::Export { output, status } => {
            let filter = ApplicationFilter {
                status,
                ..Default::default()
            };
            let applications = client.list(&filter).await?;
            export_csv(&applications, &output)?;
            println!("✓ Exported {} applications to {}", applications.len(), output.display());
        }
    }

    Ok(())
}

// ===== Resume =====

async fn handle_resume(api: &ApiClient, command: ResumeCommand) -> Result<()> {
    let client = ResumeClient::new(api);

    match command {
        ResumeCommand::Upload { file } => {
            let resume = client.upload_file(&file).await?;
            println!("✓ Uploaded {}", resume.file_name);
            println!("  {} skills extracted", resume.skills.len());
        }

        ResumeCommand::Show => match client.get().await? {
            Some(resume) => print_resume(&resume),
            None => println!("No resume uploaded yet."),
        },

        ResumeCommand::Delete => {
            client.delete().await?;
            println!("✓ Resume deleted");
        }
    }

    Ok(())
}

// ===== Analytics / Sync =====

async fn handle_analytics(api: &ApiClient) -> Result<()> {
    let stats = AnalyticsClient::new(api).dashboard().await?;
    print_dashboard(&stats);
    Ok(())
}

async fn handle_sync(api: &ApiClient, command: SyncCommand) -> Result<()> {
    let client = SyncClient::new(api);

    match command {
        SyncCommand::Run => match client.run().await {
            Ok(response) => println!("✓ {} ({})", response.message, response.status),
            Err(ApiError::Server { status: 409, detail }) => println!("{detail}"),
            Err(err) => return Err(err.into()),
        },

        SyncCommand::Status => {
            let status = client.status().await?;
            print_sync_status(&status);
        }
    }

    Ok(())
}

// ===== Rendering =====

fn print_user(user: &User) {
    println!("{} <{}>", user.full_name, user.email);
    println!("  id:      {}", user.id);
    println!("  since:   {}", user.created_at.format("%Y-%m-%d"));
    println!("  premium: {}", if user.is_premium { "yes" } else { "no" });
}

fn print_job_table(jobs: &[JobRecommendation]) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }

    println!(
        "{:<12} {:<30} {:<20} {:<18} {:>6}",
        "ID", "TITLE", "COMPANY", "LOCATION", "MATCH"
    );
    println!("{}", "-".repeat(90));
    for job in jobs {
        println!(
            "{:<12} {:<30} {:<20} {:<18} {:>5.0}%",
            truncate(&job.id, 12),
            truncate(&job.title, 30),
            truncate(&job.company, 20),
            truncate(&job.location, 18),
            job.match_score * 100.0
        );
    }
}

fn print_job_details(job: &JobRecommendation) {
    println!("{} at {}", job.title, job.company);
    println!("  id:         {}", job.id);
    println!("  location:   {} ({})", job.location, job.location_type);
    if let Some(salary) = &job.salary {
        println!("  salary:     {}", salary);
    }
    println!("  level:      {}", job.experience_level);
    println!("  type:       {}", job.employment_type);
    println!("  posted:     {}", job.posted_date.format("%Y-%m-%d"));
    println!("  match:      {:.0}%", job.match_score * 100.0);
    println!("  saved:      {}", if job.is_saved { "yes" } else { "no" });
    println!("  apply:      {}", job.application_url);

    if !job.match_reasons.is_empty() {
        println!("\nWhy this matches:");
        for reason in &job.match_reasons {
            println!("  - {reason}");
        }
    }
    if !job.requirements.is_empty() {
        println!("\nRequirements:");
        for requirement in &job.requirements {
            println!("  - {requirement}");
        }
    }
    if !job.skills.is_empty() {
        println!("\nSkills: {}", job.skills.join(", "));
    }
    println!("\n{}", job.description);
}

fn print_application_table(applications: &[JobApplication]) {
    if applications.is_empty() {
        println!("No applications tracked yet.");
        return;
    }

    println!(
        "{:<12} {:<22} {:<26} {:<20} {:<10}",
        "ID", "COMPANY", "ROLE", "STATUS", "APPLIED"
    );
    println!("{}", "-".repeat(94));
    for application in applications {
        println!(
            "{:<12} {:<22} {:<26} {:<20} {:<10}",
            truncate(&application.id, 12),
            truncate(&application.company_name, 22),
            truncate(&application.role_title, 26),
            application.status.to_string(),
            application.applied_date.format("%Y-%m-%d")
        );
    }
}

fn print_application_details(application: &JobApplication) {
    println!(
        "{} at {}",
        application.role_title, application.company_name
    );
    println!("  id:       {}", application.id);
    println!("  status:   {}", application.status);
    println!("  source:   {}", application.source);
    println!("  applied:  {}", application.applied_date.format("%Y-%m-%d"));
    if let Some(location) = &application.location {
        println!("  location: {}", location);
    }
    if let Some(salary) = &application.salary {
        println!("  salary:   {}", salary);
    }
    if let Some(url) = &application.url {
        println!("  url:      {}", url);
    }
    if let Some(date) = &application.interview_date {
        println!("  interview: {}", date.format("%Y-%m-%d %H:%M"));
    }
    if let Some(date) = &application.offer_date {
        println!("  offer:    {}", date.format("%Y-%m-%d"));
    }
    if let Some(date) = &application.response_date {
        println!("  response: {}", date.format("%Y-%m-%d"));
    }
    if let Some(notes) = &application.notes {
        println!("\nNotes: {notes}");
    }
}

fn print_resume(resume: &Resume) {
    println!("{} (uploaded {})", resume.file_name, resume.uploaded_at.format("%Y-%m-%d"));
    if let Some(summary) = &resume.summary {
        println!("\n{summary}");
    }
    if !resume.skills.is_empty() {
        println!("\nSkills: {}", resume.skills.join(", "));
    }
    if !resume.experience.is_empty() {
        println!("\nExperience:");
        for experience in &resume.experience {
            let end = if experience.is_current {
                "present"
            } else {
                experience.end_date.as_deref().unwrap_or("?")
            };
            println!(
                "  {} at {} ({} - {})",
                experience.title, experience.company, experience.start_date, end
            );
        }
    }
    if !resume.education.is_empty() {
        println!("\nEducation:");
        for education in &resume.education {
            println!(
                "  {} in {}, {} ({})",
                education.degree, education.field, education.institution, education.graduation_year
            );
        }
    }
}

fn print_dashboard(stats: &DashboardStats) {
    println!("Applications: {}", stats.total_applications);
    println!("Interviews:   {}", stats.interviews);
    println!("Offers:       {}", stats.offers);
    println!("Response rate: {:.1}%", stats.response_rate);

    if !stats.recent_activity.is_empty() {
        println!("\nRecent activity:");
        print_application_table(&stats.recent_activity);
    }
}

fn print_sync_status(status: &SyncStatus) {
    println!(
        "Sync: {}",
        if status.is_running { "running" } else { "idle" }
    );
    if let Some(last_run) = &status.last_run {
        println!("  last run:    {}", last_run);
    }
    if let Some(last_status) = &status.last_status {
        println!("  last status: {}", last_status);
    }
    if let Some(last_result) = &status.last_result {
        println!("  last result: {}", last_result);
    }
}
