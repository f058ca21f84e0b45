//! Bounded fixed-interval polling for submission results.
//!
//! The judge exposes no push channel; completion is observed by probing the
//! result endpoint. The interval is fixed rather than backed off: the judge
//! is expected to finish within a bounded number of seconds, and a steady
//! cadence keeps the attempt budget meaningful.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use common::SubmissionStatus;
use common::result::SubmissionResult;

use crate::api::submissions;
use crate::error::{ClientError, Result};
use crate::http::ApiClient;

/// Polling budget and cadence for awaiting a submission result.
#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    /// Maximum number of status requests before giving up.
    pub max_attempts: u32,
    /// Fixed delay between consecutive requests.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

impl PollConfig {
    fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(ClientError::Validation(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Snapshot handed to the progress callback after each poll attempt.
#[derive(Clone, Copy, Debug)]
pub struct PollUpdate {
    /// 1-based attempt number.
    pub attempt: u32,
    /// Attempt budget, for rendering "attempt k of n".
    pub max_attempts: u32,
    /// Status from the judge's payload, when one was returned.
    pub status: Option<SubmissionStatus>,
}

/// Poll the judge for a submission result at a fixed interval.
///
/// Issues at most `config.max_attempts` requests, spaced by
/// `config.interval` (no trailing sleep after the last attempt). After
/// every attempt `on_progress` fires exactly once. The call resolves with
/// the first payload whose status is final; a non-final payload is an
/// in-progress snapshot and the loop continues.
///
/// Cancelling `cancel` aborts the loop mid-request or mid-sleep with
/// [`ClientError::Cancelled`]; no further requests are issued. A transport
/// or API error on any attempt ends the poll immediately. Exhausting the
/// budget yields [`ClientError::PollTimeout`].
///
/// Callers are expected to run one poll per submission at a time; the UI
/// layer gates re-submission while a poll is active.
pub async fn poll_result(
    client: &ApiClient,
    submission_id: i32,
    config: PollConfig,
    cancel: &CancellationToken,
    mut on_progress: impl FnMut(PollUpdate),
) -> Result<SubmissionResult> {
    config.validate()?;

    for attempt in 1..=config.max_attempts {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            res = submissions::get_result(client, submission_id) => res?,
        };

        on_progress(PollUpdate {
            attempt,
            max_attempts: config.max_attempts,
            status: result.as_ref().map(|r| r.status),
        });

        match result {
            Some(r) if r.status.is_final() => {
                debug!(submission_id, attempt, status = %r.status, "Result ready");
                return Ok(r);
            }
            Some(r) => {
                debug!(submission_id, attempt, status = %r.status, "Result not final yet");
            }
            None => {
                debug!(submission_id, attempt, "No result yet");
            }
        }

        if attempt < config.max_attempts {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = tokio::time::sleep(config.interval) => {}
            }
        }
    }

    warn!(
        submission_id,
        attempts = config.max_attempts,
        "Poll budget exhausted without a final result"
    );
    Err(ClientError::PollTimeout {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_attempt_budget_is_rejected() {
        let client = ApiClient::new("http://localhost:1").unwrap();
        let config = PollConfig {
            max_attempts: 0,
            interval: Duration::from_millis(1),
        };
        let cancel = CancellationToken::new();

        let err = poll_result(&client, 1, config, &cancel, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_skips_all_requests() {
        // Unroutable client: reaching the network would error, not cancel.
        let client = ApiClient::new("http://localhost:1").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut updates = 0;
        let err = poll_result(&client, 1, PollConfig::default(), &cancel, |_| updates += 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Cancelled));
        assert_eq!(updates, 0);
    }
}
