use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;
use dialoguer::Input;

use client::api::courses;
use client::models::course::{Course, CourseListQuery, CourseStatus, NewCourse, UpdateCourse};
use client::models::shared::PageQuery;

use crate::commands::authenticated_client;
use crate::config::AppConfig;
use crate::render::format_table;

#[derive(Subcommand)]
pub enum CoursesCommand {
    /// Browse the catalog.
    List {
        #[arg(long)]
        page: Option<u64>,
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one course.
    Show { id: i32 },
    /// Enroll in a published course.
    Enroll { id: i32 },
    /// Courses you are enrolled in or own.
    Mine,
    /// Create a draft course (providers).
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Update a course you own.
    Update {
        id: i32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a draft course.
    Delete { id: i32 },
    /// Send a draft course to the moderation queue.
    SubmitForReview { id: i32 },
}

pub async fn run(command: CoursesCommand, config: &AppConfig) -> Result<()> {
    let (client, session) = authenticated_client(config)?;

    match command {
        CoursesCommand::List { page, category } => {
            let query = CourseListQuery {
                paging: PageQuery {
                    page,
                    per_page: None,
                },
                category,
                status: None,
            };
            let res = courses::list(&client, &query).await?;
            print_course_table(&res.data);
            println!(
                "Page {}/{} ({} courses)",
                res.pagination.page, res.pagination.total_pages, res.pagination.total
            );
        }
        CoursesCommand::Show { id } => {
            let course = courses::get(&client, id).await?;
            print_course(&course);
        }
        CoursesCommand::Enroll { id } => {
            courses::enroll(&client, id).await?;
            println!("Enrolled in course #{id}");
        }
        CoursesCommand::Mine => {
            let mine = courses::mine(&client).await?;
            if mine.is_empty() {
                println!("No courses yet");
            } else {
                print_course_table(&mine);
            }
        }
        CoursesCommand::Create {
            title,
            description,
            category,
        } => {
            if !session.role.can_publish_courses() {
                bail!("Only providers can create courses");
            }
            let title = match title {
                Some(title) => title,
                None => Input::new().with_prompt("Course title").interact_text()?,
            };
            let course = courses::create(
                &client,
                &NewCourse {
                    title,
                    description,
                    category,
                },
            )
            .await?;
            println!("Created draft course #{} '{}'", course.id, course.title);
        }
        CoursesCommand::Update {
            id,
            title,
            description,
            category,
        } => {
            if !session.role.can_publish_courses() {
                bail!("Only providers can edit courses");
            }
            let update = UpdateCourse {
                title,
                description: description.map(Some),
                category: category.map(Some),
            };
            let course = courses::update(&client, id, &update).await?;
            println!("Updated course #{} '{}'", course.id, course.title);
        }
        CoursesCommand::Delete { id } => {
            if !session.role.can_publish_courses() {
                bail!("Only providers can delete courses");
            }
            courses::delete(&client, id).await?;
            println!("Deleted course #{id}");
        }
        CoursesCommand::SubmitForReview { id } => {
            if !session.role.can_publish_courses() {
                bail!("Only providers can submit courses for review");
            }
            let course = courses::submit_for_review(&client, id).await?;
            println!(
                "Course #{} is now {}",
                course.id,
                style(course.status).yellow()
            );
        }
    }
    Ok(())
}

fn print_course(course: &Course) {
    println!(
        "{} (#{}, {})",
        style(&course.title).bold(),
        course.id,
        status_styled(course.status)
    );
    if let Some(category) = &course.category {
        println!("Category: {category}");
    }
    if let Some(description) = &course.description {
        println!("\n{description}");
    }
    if let Some(reason) = &course.rejection_reason {
        println!("\n{} {reason}", style("Rejected:").red());
    }
}

fn print_course_table(courses: &[Course]) {
    let rows: Vec<Vec<String>> = courses
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.title.clone(),
                c.category.clone().unwrap_or_else(|| "-".into()),
                status_styled(c.status),
            ]
        })
        .collect();
    print!(
        "{}",
        format_table(&["Id", "Title", "Category", "Status"], &rows)
    );
}

fn status_styled(status: CourseStatus) -> String {
    match status {
        CourseStatus::Published => style(status).green().to_string(),
        CourseStatus::Pending => style(status).yellow().to_string(),
        CourseStatus::Rejected => style(status).red().to_string(),
        CourseStatus::Draft => style(status).dim().to_string(),
    }
}
