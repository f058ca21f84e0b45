use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use client::{ClientError, PollConfig, poll_result};
use common::SubmissionStatus;

use crate::support::{Hits, null_env, ok_env, result_json, result_router, spawn_app};

fn config(max_attempts: u32, interval_ms: u64) -> PollConfig {
    PollConfig {
        max_attempts,
        interval: Duration::from_millis(interval_ms),
    }
}

#[tokio::test]
async fn exhausts_budget_with_exact_attempt_count() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |_| null_env())).await;
    let cancel = CancellationToken::new();
    let mut attempts = Vec::new();

    let started = Instant::now();
    let err = poll_result(&app, 7, config(4, 40), &cancel, |u| attempts.push(u.attempt))
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, ClientError::PollTimeout { attempts: 4 }));
    assert_eq!(hits.count(), 4);
    assert_eq!(attempts, vec![1, 2, 3, 4]);
    // Four attempts are separated by exactly three interval sleeps.
    assert!(
        elapsed >= Duration::from_millis(120),
        "attempts not spaced by the interval: {elapsed:?}"
    );
}

#[tokio::test]
async fn resolves_with_first_final_payload() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |n| {
        if n < 3 {
            null_env()
        } else {
            ok_env(result_json("Passed", true))
        }
    }))
    .await;
    let cancel = CancellationToken::new();
    let mut statuses = Vec::new();

    let result = poll_result(&app, 7, config(10, 10), &cancel, |u| statuses.push(u.status))
        .await
        .unwrap();

    assert!(result.passed);
    assert_eq!(result.score, 100);
    assert_eq!(hits.count(), 3);
    assert_eq!(statuses, vec![None, None, Some(SubmissionStatus::Passed)]);

    // Resolution stops the loop; nothing else may hit the endpoint.
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(hits.count(), 3);
}

#[tokio::test]
async fn progress_fires_once_per_attempt() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |n| {
        if n < 5 {
            null_env()
        } else {
            ok_env(result_json("Failed", false))
        }
    }))
    .await;
    let cancel = CancellationToken::new();
    let mut updates = Vec::new();

    let result = poll_result(&app, 7, config(8, 5), &cancel, |u| {
        updates.push((u.attempt, u.max_attempts))
    })
    .await
    .unwrap();

    assert!(!result.passed);
    assert_eq!(updates, vec![(1, 8), (2, 8), (3, 8), (4, 8), (5, 8)]);
}

#[tokio::test]
async fn non_final_payload_keeps_polling() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |n| {
        if n < 3 {
            ok_env(result_json("Judging", false))
        } else {
            ok_env(result_json("Failed", false))
        }
    }))
    .await;
    let cancel = CancellationToken::new();
    let mut statuses = Vec::new();

    let result = poll_result(&app, 7, config(10, 10), &cancel, |u| statuses.push(u.status))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Failed);
    assert_eq!(hits.count(), 3);
    assert_eq!(
        statuses,
        vec![
            Some(SubmissionStatus::Judging),
            Some(SubmissionStatus::Judging),
            Some(SubmissionStatus::Failed)
        ]
    );
}

#[tokio::test]
async fn cancellation_stops_further_requests() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |_| null_env())).await;
    let cancel = CancellationToken::new();

    let handle = {
        let app = app.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { poll_result(&app, 7, config(50, 200), &cancel, |_| {}).await })
    };

    // Let the first attempt land, then cancel during the sleep.
    tokio::time::sleep(Duration::from_millis(80)).await;
    cancel.cancel();

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
    assert_eq!(hits.count(), 1);

    // And stay stopped.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn api_failure_aborts_the_poll() {
    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |_| {
        serde_json::json!({"code": "NOT_FOUND", "message": "Unknown submission"})
    }))
    .await;
    let cancel = CancellationToken::new();

    let err = poll_result(&app, 7, config(5, 10), &cancel, |_| {})
        .await
        .unwrap_err();

    match err {
        ClientError::Api { code, .. } => assert_eq!(code, "NOT_FOUND"),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(hits.count(), 1);
}
