//! Admin moderation: the course review queue and account management.

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::auth::UserProfile;
use crate::models::course::Course;
use crate::models::moderation::{
    RejectCourseRequest, SetRoleRequest, UserListQuery, UserListResponse,
};
use crate::models::shared::validate_id;

/// Courses awaiting review, oldest first.
pub async fn pending_courses(client: &ApiClient) -> Result<Vec<Course>> {
    require(client.get("/api/v1/admin/courses/pending").await?)
}

/// Approve a pending course and publish it.
pub async fn approve_course(client: &ApiClient, course_id: i32) -> Result<Course> {
    validate_id(course_id, "course")?;
    require(
        client
            .post_empty(&format!("/api/v1/admin/courses/{course_id}/approve"))
            .await?,
    )
}

/// Reject a pending course with a reason shown to the provider.
pub async fn reject_course(client: &ApiClient, course_id: i32, reason: String) -> Result<Course> {
    validate_id(course_id, "course")?;
    let req = RejectCourseRequest { reason };
    req.validate()?;
    require(
        client
            .post(&format!("/api/v1/admin/courses/{course_id}/reject"), &req)
            .await?,
    )
}

/// List platform accounts.
pub async fn list_users(client: &ApiClient, query: &UserListQuery) -> Result<UserListResponse> {
    require(
        client
            .get_with_query("/api/v1/admin/users", &query.to_query())
            .await?,
    )
}

/// Change an account's role.
pub async fn set_user_role(
    client: &ApiClient,
    user_id: i32,
    req: &SetRoleRequest,
) -> Result<UserProfile> {
    validate_id(user_id, "user")?;
    require(
        client
            .patch(&format!("/api/v1/admin/users/{user_id}/role"), req)
            .await?,
    )
}
