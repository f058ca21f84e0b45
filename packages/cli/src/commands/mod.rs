pub mod assignments;
pub mod auth;
pub mod content;
pub mod courses;
pub mod dashboard;
pub mod moderate;
pub mod submissions;
pub mod submit;

use anyhow::Result;
use clap::Subcommand;

use client::ApiClient;

use crate::config::AppConfig;
use crate::session::{self, Session};

#[derive(Subcommand)]
pub enum Command {
    /// Register a new account.
    Register(auth::RegisterArgs),
    /// Log in and store a session token.
    Login(auth::LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the logged-in profile.
    Whoami,
    /// Role-specific overview of your courses and queues.
    Dashboard,
    /// Browse and manage courses.
    #[command(subcommand)]
    Courses(courses::CoursesCommand),
    /// Author tutorials and content pages.
    #[command(subcommand)]
    Content(content::ContentCommand),
    /// Browse and manage assignments.
    #[command(subcommand)]
    Assignments(assignments::AssignmentsCommand),
    /// Submit a solution and wait for the verdict.
    Submit(submit::SubmitArgs),
    /// Inspect past submissions.
    #[command(subcommand)]
    Submissions(submissions::SubmissionsCommand),
    /// Review queue and account management (admins).
    #[command(subcommand)]
    Moderate(moderate::ModerateCommand),
}

pub async fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Register(args) => auth::register(args, config).await,
        Command::Login(args) => auth::login(args, config).await,
        Command::Logout => auth::logout(),
        Command::Whoami => auth::whoami(config).await,
        Command::Dashboard => dashboard::run(config).await,
        Command::Courses(cmd) => courses::run(cmd, config).await,
        Command::Content(cmd) => content::run(cmd, config).await,
        Command::Assignments(cmd) => assignments::run(cmd, config).await,
        Command::Submit(args) => submit::run(args, config).await,
        Command::Submissions(cmd) => submissions::run(cmd, config).await,
        Command::Moderate(cmd) => moderate::run(cmd, config).await,
    }
}

/// Client without credentials, for login and registration.
pub(crate) fn anonymous_client(config: &AppConfig) -> Result<ApiClient> {
    Ok(ApiClient::with_timeout(
        &config.api.base_url,
        config.api.timeout(),
    )?)
}

/// Client carrying the stored session token, plus the session itself for
/// role gating.
pub(crate) fn authenticated_client(config: &AppConfig) -> Result<(ApiClient, Session)> {
    let session = session::require()?;
    let client = anonymous_client(config)?.with_token(session.token.clone());
    Ok((client, session))
}
