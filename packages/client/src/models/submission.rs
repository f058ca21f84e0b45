use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::SubmissionStatus;
use common::language::Language;

use crate::error::{ClientError, Result};
use crate::models::shared::{PageQuery, Pagination, validate_id};

/// Request body for creating a submission.
///
/// Immutable once created; the judge's progress is observed through
/// [`crate::poll::poll_result`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    /// Judge language id (see `common::language`).
    pub language_id: i32,
    pub assignment_id: i32,
    pub course_id: i32,
    /// Source code text.
    pub code: String,
}

impl NewSubmission {
    /// Client-side checks run before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(ClientError::Validation(
                "Source code must not be empty".into(),
            ));
        }
        if Language::from_id(self.language_id).is_none() {
            return Err(ClientError::Validation(format!(
                "Unknown judge language id {}",
                self.language_id
            )));
        }
        validate_id(self.assignment_id, "assignment")?;
        validate_id(self.course_id, "course")?;
        Ok(())
    }
}

/// Payload of a successful submission creation.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSubmission {
    pub submission_id: i32,
}

/// Submission summary for history views (code omitted).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListItem {
    pub id: i32,
    pub assignment_id: i32,
    pub course_id: i32,
    pub language_id: i32,
    pub status: SubmissionStatus,
    /// Total score once judged.
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Paginated submission history.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListResponse {
    pub data: Vec<SubmissionListItem>,
    pub pagination: Pagination,
}

/// Query parameters for the submission history.
#[derive(Clone, Debug, Default)]
pub struct SubmissionListQuery {
    pub paging: PageQuery,
    /// Filter by assignment.
    pub assignment_id: Option<i32>,
    /// Filter by status.
    pub status: Option<SubmissionStatus>,
}

impl SubmissionListQuery {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        self.paging.push_to(&mut query);
        if let Some(assignment_id) = self.assignment_id {
            query.push(("assignmentId", assignment_id.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}
