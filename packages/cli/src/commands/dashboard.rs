use anyhow::Result;
use console::style;

use client::ApiClient;
use client::api::{courses, moderation, submissions};
use client::models::course::CourseStatus;
use client::models::submission::SubmissionListQuery;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::format_table;

use common::UserRole;

/// Role-specific landing view, mirroring what each account sees first in
/// the platform.
pub async fn run(config: &AppConfig) -> Result<()> {
    let (client, session) = authenticated_client(config)?;

    println!(
        "{} ({})\n",
        style(&session.username).bold(),
        session.role
    );

    match session.role {
        UserRole::Student => student(&client).await,
        UserRole::Lecturer => lecturer(&client).await,
        UserRole::Provider => provider(&client).await,
        UserRole::Admin => admin(&client).await,
    }
}

async fn student(client: &ApiClient) -> Result<()> {
    let enrolled = courses::mine(client).await?;
    println!("Enrolled in {} course(s)", enrolled.len());
    for course in &enrolled {
        println!("  #{} {}", course.id, course.title);
    }

    let recent = submissions::list_mine(client, &SubmissionListQuery::default()).await?;
    println!("\nRecent submissions:");
    if recent.data.is_empty() {
        println!("  none yet");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = recent
        .data
        .iter()
        .take(5)
        .map(|s| {
            vec![
                s.id.to_string(),
                s.assignment_id.to_string(),
                s.status.to_string(),
                s.score.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    print!(
        "{}",
        format_table(&["Id", "Assignment", "Status", "Score"], &rows)
    );
    Ok(())
}

async fn lecturer(client: &ApiClient) -> Result<()> {
    let teaching = courses::mine(client).await?;
    println!("Teaching {} course(s)", teaching.len());
    for course in &teaching {
        println!("  #{} {} ({})", course.id, course.title, course.status);
    }
    Ok(())
}

async fn provider(client: &ApiClient) -> Result<()> {
    let owned = courses::mine(client).await?;
    let count = |status: CourseStatus| owned.iter().filter(|c| c.status == status).count();
    println!(
        "Catalog: {} published, {} pending review, {} draft, {} rejected",
        count(CourseStatus::Published),
        count(CourseStatus::Pending),
        count(CourseStatus::Draft),
        count(CourseStatus::Rejected),
    );
    for course in owned.iter().filter(|c| c.status == CourseStatus::Rejected) {
        println!(
            "  {} #{} {}: {}",
            style("rejected").red(),
            course.id,
            course.title,
            course.rejection_reason.as_deref().unwrap_or("no reason given")
        );
    }
    Ok(())
}

async fn admin(client: &ApiClient) -> Result<()> {
    let pending = moderation::pending_courses(client).await?;
    println!("{} course(s) awaiting review", pending.len());
    for course in pending.iter().take(10) {
        println!("  #{} {}", course.id, course.title);
    }
    Ok(())
}
