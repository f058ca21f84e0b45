use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::Router;
use axum::extract::Path;
use axum::routing::get;
use serde_json::{Value, json};

use client::ApiClient;

/// Spawn a mock platform server on an ephemeral port and return a client
/// pointed at it.
pub async fn spawn_app(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server crashed");
    });
    ApiClient::new(&format!("http://{addr}")).expect("Failed to build client")
}

/// Shared request counter for asserting exact request counts.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicU32>);

impl Hits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the 1-based hit number.
    pub fn record(&self) -> u32 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Success envelope with a payload, using one of the legacy spellings.
pub fn ok_env(data: Value) -> Value {
    json!({"code": "ok", "data": data})
}

/// Success envelope with no payload yet (judge still working).
pub fn null_env() -> Value {
    json!({"code": "0", "data": null})
}

/// A judge result payload in the given lifecycle status.
pub fn result_json(status: &str, passed: bool) -> Value {
    json!({
        "submissionId": 7,
        "status": status,
        "passed": passed,
        "score": if passed { 100 } else { 40 },
        "attemptNumber": 1,
        "testCases": [
            {"stdin": "1 2", "stdout": "3", "expectedOutput": "3",
             "verdict": if passed { "Accepted" } else { "WrongAnswer" },
             "timeMs": 3, "memoryKb": 640, "visible": true}
        ]
    })
}

/// Mock result endpoint whose response depends on the 1-based hit number.
pub fn result_router(
    hits: Hits,
    responses: impl Fn(u32) -> Value + Clone + Send + Sync + 'static,
) -> Router {
    Router::new().route(
        "/api/v1/submissions/{id}/result",
        get(move |Path(_id): Path<i32>| {
            let hits = hits.clone();
            let responses = responses.clone();
            async move { axum::Json(responses(hits.record())) }
        }),
    )
}
