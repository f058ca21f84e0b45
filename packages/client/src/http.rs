use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use common::envelope::ApiEnvelope;

use crate::error::{ClientError, Result};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the platform's REST API.
///
/// Every endpoint wrapper goes through the request helpers here: they
/// serialize the body, attach the bearer token, decode the response
/// envelope and apply one set of error-mapping rules. Nothing outside this
/// module talks to reqwest directly.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g., `http://localhost:8080`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ClientError::Validation(format!(
                "Base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base.to_string(),
            token: None,
        })
    }

    /// Attach a bearer token for authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The bearer token currently attached, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.send(Method::GET, path, &[], None::<&()>).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// POST without a request body (action endpoints like enroll/approve).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.send::<(), T>(Method::POST, path, &[], None).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>> {
        self.send(Method::PATCH, path, &[], Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send::<(), serde_json::Value>(Method::DELETE, path, &[], None)
            .await?;
        Ok(())
    }

    /// Issue a request and decode the response envelope.
    ///
    /// Mapping rules: HTTP 401 is `Unauthorized`; a decodable non-success
    /// envelope is `Api` with the server's code preserved; a non-2xx
    /// response without a decodable envelope is `Api` with the HTTP status
    /// as the code; a garbled 2xx body is `Decode`.
    async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header("X-Request-Id", request_id.to_string());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        debug!(%method, %url, %request_id, "Sending request");
        let res = req.send().await?;
        let status = res.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }

        let bytes = res.bytes().await?;
        match serde_json::from_slice::<ApiEnvelope<T>>(&bytes) {
            Ok(envelope) => {
                debug!(%request_id, code = %envelope.code, "Received response");
                Ok(envelope.into_data()?)
            }
            Err(e) if status.is_success() => Err(ClientError::Decode(e)),
            Err(_) => Err(ClientError::Api {
                code: status.as_u16().to_string(),
                message: format!("HTTP {status}"),
            }),
        }
    }
}

/// Unwrap a payload that the endpoint contract guarantees on success.
pub(crate) fn require<T>(data: Option<T>) -> Result<T> {
    data.ok_or(ClientError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(matches!(
            ApiClient::new("localhost:8080"),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            ApiClient::new("ftp://example.com"),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_token_attachment() {
        let client = ApiClient::new("http://localhost:8080")
            .unwrap()
            .with_token("abc123");
        assert_eq!(client.token(), Some("abc123"));
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(5)).unwrap(), 5);
        assert!(matches!(
            require::<i32>(None),
            Err(ClientError::MissingData)
        ));
    }
}
