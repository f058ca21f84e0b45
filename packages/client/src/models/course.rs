use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::shared::{PageQuery, Pagination, validate_title};

/// Moderation lifecycle of a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CourseStatus {
    /// Editable by its provider, invisible to students.
    Draft,
    /// Submitted for review, awaiting moderation.
    Pending,
    /// Approved and visible in the catalog.
    Published,
    /// Rejected by a moderator; see the rejection reason.
    Rejected,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Published => "Published",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub status: CourseStatus,
    /// Account that owns the course.
    pub provider_id: i32,
    /// Why the course was rejected, when it was.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a course (providers only).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewCourse {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// PATCH body for updating a course. Absent fields are left unchanged;
/// `Some(None)` clears a nullable field.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
}

impl UpdateCourse {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category.is_none()
    }
}

/// Query parameters for the course catalog.
#[derive(Clone, Debug, Default)]
pub struct CourseListQuery {
    pub paging: PageQuery,
    /// Filter by category.
    pub category: Option<String>,
    /// Filter by moderation status (moderators and providers).
    pub status: Option<CourseStatus>,
}

impl CourseListQuery {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        self.paging.push_to(&mut query);
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}

/// Paginated course list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListResponse {
    pub data: Vec<Course>,
    pub pagination: Pagination,
}
