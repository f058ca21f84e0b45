use anyhow::Result;
use clap::Subcommand;
use console::style;

use client::api::submissions;
use client::models::shared::PageQuery;
use client::models::submission::SubmissionListQuery;
use common::language::Language;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::{format_table, render_result};

#[derive(Subcommand)]
pub enum SubmissionsCommand {
    /// Your submission history.
    List {
        #[arg(long)]
        page: Option<u64>,
        /// Filter by assignment.
        #[arg(long)]
        assignment: Option<i32>,
    },
    /// Fetch and render one submission's result.
    Show { id: i32 },
}

pub async fn run(command: SubmissionsCommand, config: &AppConfig) -> Result<()> {
    let (client, _) = authenticated_client(config)?;

    match command {
        SubmissionsCommand::List { page, assignment } => {
            let query = SubmissionListQuery {
                paging: PageQuery {
                    page,
                    per_page: None,
                },
                assignment_id: assignment,
                status: None,
            };
            let res = submissions::list_mine(&client, &query).await?;
            if res.data.is_empty() {
                println!("No submissions yet");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = res
                .data
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.assignment_id.to_string(),
                        Language::from_id(s.language_id)
                            .map(|l| l.name().to_string())
                            .unwrap_or_else(|| s.language_id.to_string()),
                        s.status.to_string(),
                        s.score.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
                    ]
                })
                .collect();
            print!(
                "{}",
                format_table(&["Id", "Assignment", "Language", "Status", "Score"], &rows)
            );
            println!(
                "Page {}/{} ({} submissions)",
                res.pagination.page, res.pagination.total_pages, res.pagination.total
            );
        }
        SubmissionsCommand::Show { id } => {
            match submissions::get_result(&client, id).await? {
                Some(result) => println!("{}", render_result(&result)),
                None => println!(
                    "{} Submission #{id} has no result yet",
                    style("Still judging.").cyan()
                ),
            }
        }
    }
    Ok(())
}
