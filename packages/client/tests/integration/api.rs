use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;

use client::ClientError;
use client::api::{auth, courses};

use crate::support::spawn_app;

fn course_json(code: &str) -> serde_json::Value {
    json!({
        "code": code,
        "data": {
            "id": 5,
            "title": "Algorithms 101",
            "status": "Published",
            "providerId": 2
        }
    })
}

#[tokio::test]
async fn legacy_success_spellings_are_accepted_over_the_wire() {
    for spelling in ["ok", "OK", "0", "200"] {
        let spelling = spelling.to_string();
        let app = spawn_app(Router::new().route(
            "/api/v1/courses/{id}",
            get(move || {
                let spelling = spelling.clone();
                async move { Json(course_json(&spelling)) }
            }),
        ))
        .await;

        let course = courses::get(&app, 5).await.unwrap();
        assert_eq!(course.title, "Algorithms 101");
    }
}

#[tokio::test]
async fn failure_envelope_maps_to_api_error() {
    // Legacy backend: HTTP 200 with a failure code in the envelope.
    let app = spawn_app(Router::new().route(
        "/api/v1/courses/{id}",
        get(|| async { Json(json!({"code": "NOT_FOUND", "message": "Course 5 not found"})) }),
    ))
    .await;

    let err = courses::get(&app, 5).await.unwrap_err();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "Course 5 not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_401_maps_to_unauthorized() {
    let app = spawn_app(Router::new().route(
        "/api/v1/auth/me",
        get(|| async { StatusCode::UNAUTHORIZED }),
    ))
    .await;

    let err = auth::me(&app).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let app = spawn_app(Router::new().route(
        "/api/v1/auth/me",
        get(|headers: HeaderMap| async move {
            let authorized = headers
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == "Bearer tok-1");
            if authorized {
                Json(json!({
                    "code": "ok",
                    "data": {"id": 3, "username": "alice", "role": "student"}
                }))
                .into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }),
    ))
    .await
    .with_token("tok-1");

    let profile = auth::me(&app).await.unwrap();
    assert_eq!(profile.username, "alice");
}

#[tokio::test]
async fn non_json_error_body_maps_to_http_status_code() {
    let app = spawn_app(Router::new().route(
        "/api/v1/courses/{id}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let err = courses::get(&app, 5).await.unwrap_err();
    match err {
        ClientError::Api { code, .. } => assert_eq!(code, "500"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbled_success_body_maps_to_decode_error() {
    let app = spawn_app(Router::new().route(
        "/api/v1/courses/{id}",
        get(|| async { "not json at all" }),
    ))
    .await;

    let err = courses::get(&app, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
