//! Tutorial authoring within a course.

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::shared::{ReorderRequest, validate_id, validate_reorder_ids};
use crate::models::tutorial::{NewTutorial, Tutorial, UpdateTutorial};

/// List a course's tutorials in outline order.
pub async fn list(client: &ApiClient, course_id: i32) -> Result<Vec<Tutorial>> {
    validate_id(course_id, "course")?;
    require(
        client
            .get(&format!("/api/v1/courses/{course_id}/tutorials"))
            .await?,
    )
}

/// Fetch one tutorial.
pub async fn get(client: &ApiClient, course_id: i32, tutorial_id: i32) -> Result<Tutorial> {
    validate_id(course_id, "course")?;
    validate_id(tutorial_id, "tutorial")?;
    require(
        client
            .get(&format!(
                "/api/v1/courses/{course_id}/tutorials/{tutorial_id}"
            ))
            .await?,
    )
}

/// Append a tutorial to the course outline (lecturers).
pub async fn create(
    client: &ApiClient,
    course_id: i32,
    tutorial: &NewTutorial,
) -> Result<Tutorial> {
    validate_id(course_id, "course")?;
    tutorial.validate()?;
    require(
        client
            .post(&format!("/api/v1/courses/{course_id}/tutorials"), tutorial)
            .await?,
    )
}

/// Patch a tutorial.
pub async fn update(
    client: &ApiClient,
    course_id: i32,
    tutorial_id: i32,
    update: &UpdateTutorial,
) -> Result<Tutorial> {
    validate_id(course_id, "course")?;
    validate_id(tutorial_id, "tutorial")?;
    update.validate()?;
    require(
        client
            .patch(
                &format!("/api/v1/courses/{course_id}/tutorials/{tutorial_id}"),
                update,
            )
            .await?,
    )
}

/// Remove a tutorial.
pub async fn delete(client: &ApiClient, course_id: i32, tutorial_id: i32) -> Result<()> {
    validate_id(course_id, "course")?;
    validate_id(tutorial_id, "tutorial")?;
    client
        .delete(&format!(
            "/api/v1/courses/{course_id}/tutorials/{tutorial_id}"
        ))
        .await
}

/// Replace the outline order. `ids` must cover every tutorial exactly once.
pub async fn reorder(client: &ApiClient, course_id: i32, ids: Vec<i32>) -> Result<Vec<Tutorial>> {
    validate_id(course_id, "course")?;
    validate_reorder_ids(&ids, "tutorial")?;
    require(
        client
            .put(
                &format!("/api/v1/courses/{course_id}/tutorials/reorder"),
                &ReorderRequest { ids },
            )
            .await?,
    )
}
