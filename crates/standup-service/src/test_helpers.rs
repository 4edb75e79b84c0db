use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::WebhookPayload;

/// One request seen by the stub webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    pub token: Option<String>,
    pub payload: WebhookPayload,
}

/// Shared record of requests seen by a stub webhook. Cheap to clone and
/// safe to read from another thread.
#[derive(Debug, Clone, Default)]
pub struct ReceivedLog(Arc<Mutex<Vec<ReceivedRequest>>>);

impl ReceivedLog {
    fn push(&self, request: ReceivedRequest) {
        self.0.lock().unwrap().push(request);
    }

    pub fn snapshot(&self) -> Vec<ReceivedRequest> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    received: ReceivedLog,
}

async fn receive(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    Json(payload): Json<WebhookPayload>,
) -> (StatusCode, String) {
    state.received.push(ReceivedRequest {
        token: params.get("zapikey").cloned(),
        payload,
    });
    (state.status, state.body.clone())
}

/// Build a stub webhook router answering every POST with `status` and `body`.
pub fn stub_router(status: StatusCode, body: &str) -> (Router, ReceivedLog) {
    let received = ReceivedLog::default();
    let state = StubState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };
    let router = Router::new()
        .route("/webhook", post(receive))
        .with_state(state);
    (router, received)
}

/// A running stub webhook.
pub struct TestWebhook {
    /// Full endpoint URL, e.g. "http://127.0.0.1:12345/webhook".
    pub url: String,
    pub log: ReceivedLog,
    _handle: tokio::task::JoinHandle<()>,
}

impl TestWebhook {
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.log.snapshot()
    }
}

/// Spawn a stub webhook that accepts every message with `{"status":"ok"}`.
pub async fn spawn_test_webhook() -> TestWebhook {
    spawn_test_webhook_with(StatusCode::OK, r#"{"status":"ok"}"#).await
}

/// Spawn a stub webhook on a random port with a fixed reply.
pub async fn spawn_test_webhook_with(status: StatusCode, body: &str) -> TestWebhook {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (app, received) = stub_router(status, body);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestWebhook {
        url: format!("http://{addr}/webhook"),
        log: received,
        _handle: handle,
    }
}
