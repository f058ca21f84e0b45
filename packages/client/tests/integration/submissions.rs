use axum::Json;
use axum::Router;
use axum::routing::post;
use serde_json::{Value, json};

use client::ClientError;
use client::api::submissions;
use client::models::submission::NewSubmission;

use crate::support::{Hits, spawn_app};

fn creation_router(hits: Hits) -> Router {
    Router::new().route(
        "/api/v1/submissions",
        post(move |Json(body): Json<Value>| {
            let hits = hits.clone();
            async move {
                hits.record();
                // The wire contract is camelCase throughout.
                let well_formed = body.get("languageId").is_some()
                    && body.get("assignmentId").is_some()
                    && body.get("courseId").is_some()
                    && body.get("code").is_some();
                if well_formed {
                    Json(json!({"code": "0", "data": {"submissionId": 77}}))
                } else {
                    Json(json!({"code": "VALIDATION_ERROR", "message": "Malformed body"}))
                }
            }
        }),
    )
}

fn valid() -> NewSubmission {
    NewSubmission {
        language_id: 71,
        assignment_id: 5,
        course_id: 2,
        code: "print('hi')".into(),
    }
}

#[tokio::test]
async fn create_returns_the_submission_id() {
    let hits = Hits::new();
    let app = spawn_app(creation_router(hits.clone())).await;

    let id = submissions::create(&app, &valid()).await.unwrap();
    assert_eq!(id, 77);
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn empty_code_is_rejected_without_a_network_call() {
    let hits = Hits::new();
    let app = spawn_app(creation_router(hits.clone())).await;

    let mut submission = valid();
    submission.code = "   \n\t ".into();
    let err = submissions::create(&app, &submission).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn unknown_language_is_rejected_without_a_network_call() {
    let hits = Hits::new();
    let app = spawn_app(creation_router(hits.clone())).await;

    let mut submission = valid();
    submission.language_id = 9999;
    let err = submissions::create(&app, &submission).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn nonpositive_ids_are_rejected_without_a_network_call() {
    let hits = Hits::new();
    let app = spawn_app(creation_router(hits.clone())).await;

    let mut submission = valid();
    submission.assignment_id = 0;
    assert!(submissions::create(&app, &submission).await.is_err());

    let mut submission = valid();
    submission.course_id = -3;
    assert!(submissions::create(&app, &submission).await.is_err());

    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn get_result_returns_none_while_judging() {
    use crate::support::{null_env, result_router};

    let hits = Hits::new();
    let app = spawn_app(result_router(hits.clone(), |_| null_env())).await;

    let result = submissions::get_result(&app, 7).await.unwrap();
    assert!(result.is_none());
    assert_eq!(hits.count(), 1);
}
