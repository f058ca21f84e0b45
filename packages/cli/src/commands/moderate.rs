use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;
use dialoguer::Input;

use client::api::moderation;
use client::models::moderation::{SetRoleRequest, UserListQuery};
use client::models::shared::PageQuery;
use common::UserRole;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::format_table;

#[derive(Subcommand)]
pub enum ModerateCommand {
    /// Courses awaiting review.
    Pending,
    /// Approve and publish a pending course.
    Approve { id: i32 },
    /// Reject a pending course.
    Reject {
        id: i32,
        /// Reason shown to the provider. Prompted when omitted.
        #[arg(long)]
        reason: Option<String>,
    },
    /// List platform accounts.
    Users {
        #[arg(long)]
        page: Option<u64>,
        /// Filter by role.
        #[arg(long)]
        role: Option<UserRole>,
    },
    /// Change an account's role.
    SetRole { user: i32, role: UserRole },
}

pub async fn run(command: ModerateCommand, config: &AppConfig) -> Result<()> {
    let (client, session) = authenticated_client(config)?;
    if !session.role.can_moderate() {
        bail!("Moderation requires the admin role");
    }

    match command {
        ModerateCommand::Pending => {
            let pending = moderation::pending_courses(&client).await?;
            if pending.is_empty() {
                println!("Review queue is empty");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = pending
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.title.clone(),
                        c.provider_id.to_string(),
                    ]
                })
                .collect();
            print!("{}", format_table(&["Id", "Title", "Provider"], &rows));
        }
        ModerateCommand::Approve { id } => {
            let course = moderation::approve_course(&client, id).await?;
            println!(
                "{} course #{} '{}'",
                style("Published").green(),
                course.id,
                course.title
            );
        }
        ModerateCommand::Reject { id, reason } => {
            let reason = match reason {
                Some(reason) => reason,
                None => Input::new()
                    .with_prompt("Rejection reason")
                    .interact_text()?,
            };
            let course = moderation::reject_course(&client, id, reason).await?;
            println!(
                "{} course #{} '{}'",
                style("Rejected").red(),
                course.id,
                course.title
            );
        }
        ModerateCommand::Users { page, role } => {
            let query = UserListQuery {
                paging: PageQuery {
                    page,
                    per_page: None,
                },
                role,
            };
            let res = moderation::list_users(&client, &query).await?;
            let rows: Vec<Vec<String>> = res
                .data
                .iter()
                .map(|u| {
                    vec![
                        u.id.to_string(),
                        u.username.clone(),
                        u.role.to_string(),
                    ]
                })
                .collect();
            print!("{}", format_table(&["Id", "Username", "Role"], &rows));
            println!(
                "Page {}/{} ({} accounts)",
                res.pagination.page, res.pagination.total_pages, res.pagination.total
            );
        }
        ModerateCommand::SetRole { user, role } => {
            let profile =
                moderation::set_user_role(&client, user, &SetRoleRequest { role }).await?;
            println!("{} is now a {}", profile.username, profile.role);
        }
    }
    Ok(())
}
