use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;
use dialoguer::Input;

use client::api::assignments;
use client::models::assignment::{Difficulty, NewAssignment};
use common::language::Language;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::format_table;

#[derive(Subcommand)]
pub enum AssignmentsCommand {
    /// List a course's assignments.
    List {
        #[arg(long)]
        course: i32,
    },
    /// Show an assignment's statement.
    Show { id: i32 },
    /// Create an assignment in a course (lecturers).
    Create {
        #[arg(long)]
        course: i32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        /// Restrict accepted languages (names or judge ids, comma separated).
        #[arg(long, value_delimiter = ',')]
        languages: Vec<String>,
    },
    /// Delete an assignment (lecturers).
    Delete { id: i32 },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for DifficultyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

pub async fn run(command: AssignmentsCommand, config: &AppConfig) -> Result<()> {
    let (client, session) = authenticated_client(config)?;

    match command {
        AssignmentsCommand::List { course } => {
            let list = assignments::list(&client, course).await?;
            if list.is_empty() {
                println!("Course #{course} has no assignments");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        a.title.clone(),
                        a.difficulty.to_string(),
                    ]
                })
                .collect();
            print!("{}", format_table(&["Id", "Title", "Difficulty"], &rows));
        }
        AssignmentsCommand::Show { id } => {
            let assignment = assignments::get(&client, id).await?;
            println!(
                "{} (#{}, {})",
                style(&assignment.title).bold(),
                assignment.id,
                assignment.difficulty
            );
            if !assignment.allowed_language_ids.is_empty() {
                let names: Vec<&str> = assignment
                    .allowed_language_ids
                    .iter()
                    .filter_map(|&id| Language::from_id(id).map(|l| l.name()))
                    .collect();
                println!("Languages: {}", names.join(", "));
            }
            if let Some(description) = &assignment.description {
                println!("\n{description}");
            }
        }
        AssignmentsCommand::Create {
            course,
            title,
            difficulty,
            languages,
        } => {
            if !session.role.can_author() {
                bail!("Only lecturers can create assignments");
            }
            let title = match title {
                Some(title) => title,
                None => Input::new()
                    .with_prompt("Assignment title")
                    .interact_text()?,
            };
            let allowed_language_ids = resolve_languages(&languages)?;
            let assignment = assignments::create(
                &client,
                course,
                &NewAssignment {
                    title,
                    description: None,
                    difficulty: difficulty.into(),
                    allowed_language_ids,
                },
            )
            .await?;
            println!(
                "Created assignment #{} '{}'",
                assignment.id, assignment.title
            );
        }
        AssignmentsCommand::Delete { id } => {
            if !session.role.can_author() {
                bail!("Only lecturers can delete assignments");
            }
            assignments::delete(&client, id).await?;
            println!("Deleted assignment #{id}");
        }
    }
    Ok(())
}

/// Resolve user-supplied language names or judge ids against the registry.
fn resolve_languages(inputs: &[String]) -> Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(inputs.len());
    for input in inputs {
        let language = match input.parse::<i32>() {
            Ok(id) => Language::from_id(id),
            Err(_) => Language::from_name(input),
        };
        match language {
            Some(language) => ids.push(language.id()),
            None => bail!("Unknown language '{input}'"),
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_languages() {
        let ids = resolve_languages(&["Python".into(), "73".into()]).unwrap();
        assert_eq!(ids, vec![71, 73]);
        assert!(resolve_languages(&["COBOL".into()]).is_err());
    }
}
