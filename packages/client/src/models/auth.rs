use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::UserRole;

use crate::error::{ClientError, Result};

/// Request body for account registration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Requested role. Student unless a provider invite says otherwise.
    pub role: UserRole,
}

/// Request body for login.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: a bearer token plus the account profile.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Account profile as returned by the platform.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Validate credentials before sending them anywhere.
pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(ClientError::Validation("Username is required".into()));
    }
    if password.len() < 8 {
        return Err(ClientError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("alice", "pass1234").is_ok());
        assert!(validate_credentials("  ", "pass1234").is_err());
        assert!(validate_credentials("alice", "short").is_err());
    }

    #[test]
    fn test_login_response_shape() {
        let json = r#"{
            "token": "tok-1",
            "user": {"id": 3, "username": "alice", "role": "student"}
        }"#;
        let res: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.user.role, UserRole::Student);
        assert_eq!(res.token, "tok-1");
    }
}
