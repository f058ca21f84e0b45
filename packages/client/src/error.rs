use common::envelope::EnvelopeError;
use thiserror::Error;

/// Errors surfaced by the platform client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success envelope.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A successful envelope unexpectedly carried no payload.
    #[error("Response was missing its data payload")]
    MissingData,

    /// Request rejected client-side before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or expired credentials.
    #[error("Authentication required or token expired")]
    Unauthorized,

    /// Poll budget exhausted without a final result.
    #[error("No result after {attempts} poll attempts")]
    PollTimeout { attempts: u32 },

    /// Operation aborted via its cancellation token.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<EnvelopeError> for ClientError {
    fn from(e: EnvelopeError) -> Self {
        ClientError::Api {
            code: e.code,
            message: e.message,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
