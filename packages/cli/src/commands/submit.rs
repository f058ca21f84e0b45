use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use console::{Term, style};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use client::api::submissions;
use client::models::submission::NewSubmission;
use client::{ClientError, poll_result};
use common::language::Language;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::render_result;

#[derive(Args)]
pub struct SubmitArgs {
    /// Path to the solution source file.
    pub file: PathBuf,

    /// Assignment to submit against.
    #[arg(long)]
    pub assignment: i32,

    /// Course the assignment belongs to.
    #[arg(long)]
    pub course: i32,

    /// Override the language inferred from the file extension
    /// (name or judge id).
    #[arg(long)]
    pub language: Option<String>,

    /// Override the configured poll attempt budget.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Override the configured poll interval (milliseconds).
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

pub async fn run(args: SubmitArgs, config: &AppConfig) -> Result<()> {
    let (client, _) = authenticated_client(config)?;

    let code = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let language = resolve_language(&args)?;

    let submission = NewSubmission {
        language_id: language.id(),
        assignment_id: args.assignment,
        course_id: args.course,
        code,
    };
    let submission_id = submissions::create(&client, &submission).await?;
    println!(
        "Submitted {} as submission #{} ({})",
        args.file.display(),
        submission_id,
        language
    );

    // One poll per submission: this command owns the loop until it returns,
    // and Ctrl-C cancels rather than detaches it.
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Ctrl-C received, cancelling poll");
            ctrl_c_cancel.cancel();
        }
    });

    let mut poll_config = config.poll_config();
    if let Some(max_attempts) = args.max_attempts {
        poll_config.max_attempts = max_attempts;
    }
    if let Some(interval_ms) = args.interval_ms {
        poll_config.interval = std::time::Duration::from_millis(interval_ms);
    }

    let term = Term::stderr();
    let outcome = poll_result(&client, submission_id, poll_config, &cancel, |update| {
        let status = update
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "queued".into());
        let _ = term.clear_line();
        let _ = term.write_str(&format!(
            "Waiting for verdict... attempt {}/{} [{}]",
            update.attempt, update.max_attempts, status
        ));
    })
    .await;
    let _ = term.clear_line();

    match outcome {
        Ok(result) => {
            println!("{}", render_result(&result));
            Ok(())
        }
        Err(ClientError::Cancelled) => {
            println!(
                "{} Submission #{submission_id} keeps judging server-side; check it later with `campus submissions show {submission_id}`",
                style("Cancelled.").yellow()
            );
            Ok(())
        }
        Err(ClientError::PollTimeout { attempts }) => {
            bail!(
                "No verdict after {attempts} attempts; check later with `campus submissions show {submission_id}`"
            );
        }
        Err(e) => Err(e.into()),
    }
}

/// Pick the judge language: an explicit override wins, otherwise the file
/// extension decides.
fn resolve_language(args: &SubmitArgs) -> Result<Language> {
    if let Some(input) = &args.language {
        let language = match input.parse::<i32>() {
            Ok(id) => Language::from_id(id),
            Err(_) => Language::from_name(input),
        };
        return language.with_context(|| format!("Unknown language '{input}'"));
    }

    let ext = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    Language::from_extension(ext).with_context(|| {
        format!(
            "Cannot infer a judge language from '{}'; pass --language",
            args.file.display()
        )
    })
}
