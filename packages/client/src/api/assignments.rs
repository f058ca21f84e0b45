//! Assignment browsing and authoring.

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::assignment::{Assignment, NewAssignment, UpdateAssignment};
use crate::models::shared::validate_id;

/// List a course's assignments.
pub async fn list(client: &ApiClient, course_id: i32) -> Result<Vec<Assignment>> {
    validate_id(course_id, "course")?;
    require(
        client
            .get(&format!("/api/v1/courses/{course_id}/assignments"))
            .await?,
    )
}

/// Fetch one assignment with its full statement.
pub async fn get(client: &ApiClient, id: i32) -> Result<Assignment> {
    validate_id(id, "assignment")?;
    require(client.get(&format!("/api/v1/assignments/{id}")).await?)
}

/// Create an assignment in a course (lecturers).
pub async fn create(
    client: &ApiClient,
    course_id: i32,
    assignment: &NewAssignment,
) -> Result<Assignment> {
    validate_id(course_id, "course")?;
    assignment.validate()?;
    require(
        client
            .post(
                &format!("/api/v1/courses/{course_id}/assignments"),
                assignment,
            )
            .await?,
    )
}

/// Patch an assignment.
pub async fn update(client: &ApiClient, id: i32, update: &UpdateAssignment) -> Result<Assignment> {
    validate_id(id, "assignment")?;
    update.validate()?;
    require(
        client
            .patch(&format!("/api/v1/assignments/{id}"), update)
            .await?,
    )
}

/// Remove an assignment.
pub async fn delete(client: &ApiClient, id: i32) -> Result<()> {
    validate_id(id, "assignment")?;
    client.delete(&format!("/api/v1/assignments/{id}")).await
}
