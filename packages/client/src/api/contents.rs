//! Content page authoring within a course.

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::content::{ContentPage, NewContentPage, UpdateContentPage};
use crate::models::shared::{ReorderRequest, validate_id, validate_reorder_ids};

/// List a course's content pages in outline order.
pub async fn list(client: &ApiClient, course_id: i32) -> Result<Vec<ContentPage>> {
    validate_id(course_id, "course")?;
    require(
        client
            .get(&format!("/api/v1/courses/{course_id}/contents"))
            .await?,
    )
}

/// Fetch one content page with its body.
pub async fn get(client: &ApiClient, course_id: i32, page_id: i32) -> Result<ContentPage> {
    validate_id(course_id, "course")?;
    validate_id(page_id, "content page")?;
    require(
        client
            .get(&format!("/api/v1/courses/{course_id}/contents/{page_id}"))
            .await?,
    )
}

/// Append a content page to the course outline (lecturers).
pub async fn create(
    client: &ApiClient,
    course_id: i32,
    page: &NewContentPage,
) -> Result<ContentPage> {
    validate_id(course_id, "course")?;
    page.validate()?;
    require(
        client
            .post(&format!("/api/v1/courses/{course_id}/contents"), page)
            .await?,
    )
}

/// Patch a content page.
pub async fn update(
    client: &ApiClient,
    course_id: i32,
    page_id: i32,
    update: &UpdateContentPage,
) -> Result<ContentPage> {
    validate_id(course_id, "course")?;
    validate_id(page_id, "content page")?;
    update.validate()?;
    require(
        client
            .patch(
                &format!("/api/v1/courses/{course_id}/contents/{page_id}"),
                update,
            )
            .await?,
    )
}

/// Remove a content page.
pub async fn delete(client: &ApiClient, course_id: i32, page_id: i32) -> Result<()> {
    validate_id(course_id, "course")?;
    validate_id(page_id, "content page")?;
    client
        .delete(&format!("/api/v1/courses/{course_id}/contents/{page_id}"))
        .await
}

/// Replace the outline order. `ids` must cover every page exactly once.
pub async fn reorder(
    client: &ApiClient,
    course_id: i32,
    ids: Vec<i32>,
) -> Result<Vec<ContentPage>> {
    validate_id(course_id, "course")?;
    validate_reorder_ids(&ids, "content page")?;
    require(
        client
            .put(
                &format!("/api/v1/courses/{course_id}/contents/reorder"),
                &ReorderRequest { ids },
            )
            .await?,
    )
}
