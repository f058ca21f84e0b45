use serde::{Deserialize, Serialize};

use common::UserRole;

use crate::error::{ClientError, Result};
use crate::models::auth::UserProfile;
use crate::models::shared::{PageQuery, Pagination};

/// Request body for rejecting a pending course.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectCourseRequest {
    /// Shown to the provider; required.
    pub reason: String,
}

impl RejectCourseRequest {
    pub fn validate(&self) -> Result<()> {
        if self.reason.trim().is_empty() {
            return Err(ClientError::Validation(
                "A rejection reason is required".into(),
            ));
        }
        Ok(())
    }
}

/// Request body for changing an account's role.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    pub role: UserRole,
}

/// Paginated account list for the admin screen.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub data: Vec<UserProfile>,
    pub pagination: Pagination,
}

/// Query parameters for the account list.
#[derive(Clone, Debug, Default)]
pub struct UserListQuery {
    pub paging: PageQuery,
    /// Filter by role.
    pub role: Option<UserRole>,
}

impl UserListQuery {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        self.paging.push_to(&mut query);
        if let Some(role) = self.role {
            query.push(("role", role.as_str().to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_requires_reason() {
        let req = RejectCourseRequest { reason: "  ".into() };
        assert!(req.validate().is_err());

        let req = RejectCourseRequest {
            reason: "No syllabus attached".into(),
        };
        assert!(req.validate().is_ok());
    }
}
