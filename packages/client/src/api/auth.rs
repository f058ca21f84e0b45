//! Account registration, login and profile lookup.

use crate::error::Result;
use crate::http::{ApiClient, require};
use crate::models::auth::{
    LoginRequest, LoginResponse, RegisterRequest, UserProfile, validate_credentials,
};

/// Register a new account.
pub async fn register(client: &ApiClient, req: &RegisterRequest) -> Result<UserProfile> {
    validate_credentials(&req.username, &req.password)?;
    require(client.post("/api/v1/auth/register", req).await?)
}

/// Log in and obtain a bearer token.
pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<LoginResponse> {
    validate_credentials(&req.username, &req.password)?;
    require(client.post("/api/v1/auth/login", req).await?)
}

/// Fetch the profile behind the attached token.
pub async fn me(client: &ApiClient) -> Result<UserProfile> {
    require(client.get("/api/v1/auth/me").await?)
}
