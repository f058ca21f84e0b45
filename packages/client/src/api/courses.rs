//! Course catalog and provider-side course management.

use crate::error::{ClientError, Result};
use crate::http::{ApiClient, require};
use crate::models::course::{
    Course, CourseListQuery, CourseListResponse, NewCourse, UpdateCourse,
};
use crate::models::shared::validate_id;

/// Browse the catalog. Students see published courses; providers and
/// moderators may filter by status.
pub async fn list(client: &ApiClient, query: &CourseListQuery) -> Result<CourseListResponse> {
    require(
        client
            .get_with_query("/api/v1/courses", &query.to_query())
            .await?,
    )
}

/// Fetch one course.
pub async fn get(client: &ApiClient, id: i32) -> Result<Course> {
    validate_id(id, "course")?;
    require(client.get(&format!("/api/v1/courses/{id}")).await?)
}

/// Courses the caller is enrolled in (students) or owns (providers).
pub async fn mine(client: &ApiClient) -> Result<Vec<Course>> {
    require(client.get("/api/v1/courses/mine").await?)
}

/// Create a course in `Draft` state (providers).
pub async fn create(client: &ApiClient, course: &NewCourse) -> Result<Course> {
    course.validate()?;
    require(client.post("/api/v1/courses", course).await?)
}

/// Patch a course's editable fields.
pub async fn update(client: &ApiClient, id: i32, update: &UpdateCourse) -> Result<Course> {
    validate_id(id, "course")?;
    update.validate()?;
    if update.is_empty() {
        return Err(ClientError::Validation("Nothing to update".into()));
    }
    require(client.patch(&format!("/api/v1/courses/{id}"), update).await?)
}

/// Delete a draft course.
pub async fn delete(client: &ApiClient, id: i32) -> Result<()> {
    validate_id(id, "course")?;
    client.delete(&format!("/api/v1/courses/{id}")).await
}

/// Enroll the caller into a published course (students).
pub async fn enroll(client: &ApiClient, id: i32) -> Result<()> {
    validate_id(id, "course")?;
    client
        .post_empty::<serde_json::Value>(&format!("/api/v1/courses/{id}/enroll"))
        .await?;
    Ok(())
}

/// Move a draft course into the moderation queue.
pub async fn submit_for_review(client: &ApiClient, id: i32) -> Result<Course> {
    validate_id(id, "course")?;
    require(
        client
            .post_empty(&format!("/api/v1/courses/{id}/submit-review"))
            .await?,
    )
}
