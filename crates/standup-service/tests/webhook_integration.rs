//! Integration tests for WebhookService + BlockingWebhookService against a stub webhook.
//!
//! Each test spawns an in-process axum stub on 127.0.0.1:0 that records what
//! it receives and answers with a canned status and body.

use axum::http::StatusCode;
use serde_json::json;
use standup_service::test_helpers::{spawn_test_webhook, spawn_test_webhook_with};
use standup_service::{
    BlockingWebhookService, Dispatcher, ServiceError, WebhookPayload, WebhookService,
};

// ---- Async WebhookService tests ----

#[tokio::test]
async fn posts_text_payload_with_token() {
    let hook = spawn_test_webhook().await;
    let svc = WebhookService::with_token(&hook.url, "secret-token".into());

    let reply = svc.dispatch("📅Date: 01/01/2026\nhello").await.unwrap();
    assert_eq!(reply, json!({"status": "ok"}));

    let received = hook.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].token.as_deref(), Some("secret-token"));
    assert_eq!(
        received[0].payload,
        WebhookPayload {
            text: "📅Date: 01/01/2026\nhello".into()
        }
    );
}

#[tokio::test]
async fn no_token_means_no_query() {
    let hook = spawn_test_webhook().await;
    let svc = WebhookService::new(&hook.url);
    assert!(!svc.has_token());

    svc.dispatch("hi").await.unwrap();
    assert_eq!(hook.received()[0].token, None);
}

#[tokio::test]
async fn each_dispatch_is_one_request() {
    let hook = spawn_test_webhook().await;
    let svc = WebhookService::new(&hook.url);

    svc.dispatch("one").await.unwrap();
    svc.dispatch("two").await.unwrap();

    let texts: Vec<String> = hook.received().into_iter().map(|r| r.payload.text).collect();
    assert_eq!(texts, vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let hook = spawn_test_webhook_with(StatusCode::NO_CONTENT, "").await;
    let svc = WebhookService::new(&hook.url);
    let reply = svc.dispatch("hi").await.unwrap();
    assert!(reply.is_null());
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let hook = spawn_test_webhook_with(StatusCode::OK, "not json").await;
    let svc = WebhookService::new(&hook.url);
    let err = svc.dispatch("hi").await.unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)), "got {err:?}");
    // the message still reached the webhook
    assert_eq!(hook.received().len(), 1);
}

#[tokio::test]
async fn error_status_carries_code() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let hook = spawn_test_webhook_with(status, r#"{"message":"nope"}"#).await;
        let svc = WebhookService::with_token(&hook.url, "bad".into());

        let err = svc.dispatch("hi").await.unwrap_err();
        assert_eq!(err.status(), Some(status.as_u16()));
        assert!(
            err.to_string().contains(&status.as_u16().to_string()),
            "message should embed status: {err}"
        );
        match err {
            ServiceError::Status { body, .. } => assert!(body.contains("nope")),
            other => panic!("expected Status, got {other:?}"),
        }
        // no retry
        assert_eq!(hook.received().len(), 1);
    }
}

#[tokio::test]
async fn unreachable_webhook_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let svc = WebhookService::with_token(&format!("http://{addr}/webhook"), "secret".into());
    let err = svc.dispatch("hi").await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
    assert!(!err.to_string().contains("secret"));
}

// ---- BlockingWebhookService tests ----

/// The blocking client owns a runtime, so the stub must run on another thread.
fn spawn_webhook_thread(status: StatusCode, body: &'static str) -> String {
    let (tx, rx) = std::sync::mpsc::sync_channel(1);
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let hook = spawn_test_webhook_with(status, body).await;
            tx.send(hook.url.clone()).unwrap();
            std::future::pending::<()>().await;
        });
    });
    rx.recv().unwrap()
}

#[test]
fn blocking_dispatch_succeeds() {
    let url = spawn_webhook_thread(StatusCode::OK, r#"{"ok":true}"#);
    let svc = BlockingWebhookService::new(WebhookService::new(&url)).unwrap();
    assert_eq!(svc.url(), url);
    assert_eq!(svc.dispatch("hi").unwrap(), json!({"ok": true}));
}

#[test]
fn blocking_dispatch_propagates_status() {
    let url = spawn_webhook_thread(StatusCode::FORBIDDEN, "");
    let svc = BlockingWebhookService::new(WebhookService::new(&url)).unwrap();
    let err = svc.dispatch("hi").unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "HTTP error! status: 403");
}
