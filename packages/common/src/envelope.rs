use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response envelope returned by every platform endpoint.
///
/// The backend was never consistent about its success spelling: `"ok"`,
/// `"0"`, `"OK"` and `"200"` all appear in the wild. This type is the only
/// place in the workspace that inspects the raw code string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Machine-readable result code.
    pub code: String,
    /// Human-readable message, usually present on failures.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload. `None` on failure, or when the resource is not ready yet.
    #[serde(default)]
    pub data: Option<T>,
}

/// Success spellings accepted from the legacy backend.
const SUCCESS_CODES: &[&str] = &["ok", "0", "200"];

impl<T> ApiEnvelope<T> {
    /// Returns true if the envelope reports success.
    ///
    /// Comparison is trimmed and case-insensitive; any code outside the
    /// known success spellings is a failure.
    pub fn is_success(&self) -> bool {
        let code = self.code.trim();
        SUCCESS_CODES.iter().any(|s| code.eq_ignore_ascii_case(s))
    }

    /// Consume the envelope, keeping the payload of a successful response.
    ///
    /// Failure envelopes become an [`EnvelopeError`] with the server's code
    /// and message preserved verbatim.
    pub fn into_data(self) -> Result<Option<T>, EnvelopeError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(EnvelopeError {
                code: self.code,
                message: self
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            })
        }
    }

    /// Build a success envelope. Used by tests and mock servers.
    pub fn ok(data: T) -> Self {
        Self {
            code: "ok".to_string(),
            message: None,
            data: Some(data),
        }
    }

    /// Build a success envelope with no payload.
    pub fn ok_empty() -> Self {
        Self {
            code: "ok".to_string(),
            message: None,
            data: None,
        }
    }

    /// Build a failure envelope.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
            data: None,
        }
    }
}

/// A non-success envelope, with the server's code and message preserved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct EnvelopeError {
    /// Machine-readable failure code (e.g., `NOT_FOUND`, `PERMISSION_DENIED`).
    pub code: String,
    /// Human-readable description from the server.
    pub message: String,
}
