//! Submission creation and result lookup.
//!
//! Creation is a single POST; results belong to the external judge and are
//! observed by polling (see [`crate::poll`]).

use tracing::info;

use common::result::SubmissionResult;

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::shared::validate_id;
use crate::models::submission::{
    CreatedSubmission, NewSubmission, SubmissionListQuery, SubmissionListResponse,
};

/// Create a submission and return its id.
///
/// Validates client-side first: empty code, an unknown judge language id or
/// a non-positive assignment/course id fail without any network call. There
/// is no automatic retry.
pub async fn create(client: &ApiClient, submission: &NewSubmission) -> Result<i32> {
    submission.validate()?;
    let created: CreatedSubmission =
        require(client.post("/api/v1/submissions", submission).await?)?;
    info!(
        submission_id = created.submission_id,
        assignment_id = submission.assignment_id,
        "Submission created"
    );
    Ok(created.submission_id)
}

/// Probe the judge for a submission's result.
///
/// `Ok(None)` means the judge has nothing yet. A returned result may still
/// be an in-progress snapshot; check `status.is_final()`.
pub async fn get_result(
    client: &ApiClient,
    submission_id: i32,
) -> Result<Option<SubmissionResult>> {
    validate_id(submission_id, "submission")?;
    client
        .get(&format!("/api/v1/submissions/{submission_id}/result"))
        .await
}

/// The caller's submission history.
pub async fn list_mine(
    client: &ApiClient,
    query: &SubmissionListQuery,
) -> Result<SubmissionListResponse> {
    require(
        client
            .get_with_query("/api/v1/submissions/mine", &query.to_query())
            .await?,
    )
}
