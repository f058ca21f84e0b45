use anyhow::{Context, Result, bail};
use clap::Subcommand;
use dialoguer::{Editor, Input};

use client::api::{contents, tutorials};
use client::models::content::NewContentPage;
use client::models::tutorial::NewTutorial;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::format_table;

#[derive(Subcommand)]
pub enum ContentCommand {
    /// List a course's outline (tutorials and content pages).
    List {
        #[arg(long)]
        course: i32,
    },
    /// Add a video tutorial to a course.
    AddTutorial {
        #[arg(long)]
        course: i32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// Add a markdown content page to a course.
    AddPage {
        #[arg(long)]
        course: i32,
        #[arg(long)]
        title: Option<String>,
        /// Read the body from a file instead of opening an editor.
        #[arg(long)]
        body_file: Option<std::path::PathBuf>,
    },
    /// Print a content page's body.
    ShowPage {
        #[arg(long)]
        course: i32,
        id: i32,
    },
    /// Reorder a course's tutorials.
    ReorderTutorials {
        #[arg(long)]
        course: i32,
        /// Tutorial ids in their new order.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i32>,
    },
    /// Reorder a course's content pages.
    ReorderPages {
        #[arg(long)]
        course: i32,
        /// Page ids in their new order.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i32>,
    },
    /// Remove a content page.
    DeletePage {
        #[arg(long)]
        course: i32,
        id: i32,
    },
}

pub async fn run(command: ContentCommand, config: &AppConfig) -> Result<()> {
    let (client, session) = authenticated_client(config)?;

    let read_only = matches!(
        command,
        ContentCommand::List { .. } | ContentCommand::ShowPage { .. }
    );
    if !read_only && !session.role.can_author() {
        bail!("Only lecturers can author course content");
    }

    match command {
        ContentCommand::List { course } => {
            let tutorials = tutorials::list(&client, course).await?;
            let pages = contents::list(&client, course).await?;

            if !tutorials.is_empty() {
                println!("Tutorials:");
                let rows: Vec<Vec<String>> = tutorials
                    .iter()
                    .map(|t| {
                        vec![
                            t.id.to_string(),
                            t.position.to_string(),
                            t.title.clone(),
                            t.video_url.clone().unwrap_or_else(|| "-".into()),
                        ]
                    })
                    .collect();
                print!("{}", format_table(&["Id", "Pos", "Title", "Video"], &rows));
            }
            if !pages.is_empty() {
                println!("Content pages:");
                let rows: Vec<Vec<String>> = pages
                    .iter()
                    .map(|p| vec![p.id.to_string(), p.position.to_string(), p.title.clone()])
                    .collect();
                print!("{}", format_table(&["Id", "Pos", "Title"], &rows));
            }
            if tutorials.is_empty() && pages.is_empty() {
                println!("Course #{course} has no content yet");
            }
        }
        ContentCommand::AddTutorial {
            course,
            title,
            video_url,
        } => {
            let title = prompt_title(title)?;
            let tutorial =
                tutorials::create(&client, course, &NewTutorial { title, video_url }).await?;
            println!(
                "Added tutorial #{} at position {}",
                tutorial.id, tutorial.position
            );
        }
        ContentCommand::AddPage {
            course,
            title,
            body_file,
        } => {
            let title = prompt_title(title)?;
            let body = match body_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => Editor::new()
                    .edit("# New page\n")?
                    .context("Editor closed without saving")?,
            };
            let page = contents::create(&client, course, &NewContentPage { title, body }).await?;
            println!("Added page #{} at position {}", page.id, page.position);
        }
        ContentCommand::ShowPage { course, id } => {
            let page = contents::get(&client, course, id).await?;
            println!("{} (#{})\n", page.title, page.id);
            println!("{}", page.body);
        }
        ContentCommand::ReorderTutorials { course, ids } => {
            let ordered = tutorials::reorder(&client, course, ids).await?;
            println!("Reordered {} tutorials", ordered.len());
        }
        ContentCommand::ReorderPages { course, ids } => {
            let ordered = contents::reorder(&client, course, ids).await?;
            println!("Reordered {} pages", ordered.len());
        }
        ContentCommand::DeletePage { course, id } => {
            contents::delete(&client, course, id).await?;
            println!("Deleted page #{id}");
        }
    }
    Ok(())
}

fn prompt_title(title: Option<String>) -> Result<String> {
    Ok(match title {
        Some(title) => title,
        None => Input::new().with_prompt("Title").interact_text()?,
    })
}
