//! Shortening client and status-store integration tests
//!
//! These tests run the ShortenClient against a stub front end and verify the
//! typed failure split, the message fallback chain, and the caller protocol
//! driving the observable store.

mod common;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use shortgate::shorten::{self, ShortenClient, ShortenError, ShorteningState, ShorteningStore};
use std::sync::{Arc, Mutex};

/// Stub front end whose create endpoint always answers with the given
/// status and JSON body.
fn service_answering(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/shorten",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

#[tokio::test]
async fn test_shorten_url_success_returns_body_unchanged() {
    let base = common::spawn_backend(service_answering(
        StatusCode::CREATED,
        json!({"short_code": "abc123", "long_url": "https://x.com"}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let response = client.shorten_url("https://x.com").await.unwrap();

    assert_eq!(response.short_code, "abc123");
    assert_eq!(response.long_url, "https://x.com");
}

#[tokio::test]
async fn test_backend_failure_prefers_reason() {
    let base = common::spawn_backend(service_answering(
        StatusCode::BAD_REQUEST,
        json!({"error": "bad_input", "reason": "URL too long"}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let err = client.shorten_url("https://x.com").await.unwrap_err();

    match err {
        ShortenError::Backend { message } => assert_eq!(message, "URL too long"),
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_backend_failure_falls_back_to_error_field() {
    let base = common::spawn_backend(service_answering(
        StatusCode::BAD_REQUEST,
        json!({"error": "bad_input"}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let err = client.shorten_url("https://x.com").await.unwrap_err();

    match err {
        ShortenError::Backend { message } => assert_eq!(message, "bad_input"),
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_backend_failure_with_empty_body_uses_generic_message() {
    let base = common::spawn_backend(service_answering(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let err = client.shorten_url("https://x.com").await.unwrap_err();

    match err {
        ShortenError::Backend { message } => assert_eq!(message, "Failed to shorten URL"),
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_failure() {
    let base = common::unreachable_base_url().await;

    let client = ShortenClient::new(base).unwrap();
    let err = client.shorten_url("https://x.com").await.unwrap_err();

    assert!(
        matches!(err, ShortenError::Transport(_)),
        "expected Transport error, got {err:?}"
    );
    // Transport failures display the generic message, the cause stays inside.
    assert_eq!(err.to_string(), "Failed to shorten URL");
}

#[tokio::test]
async fn test_run_attempt_success_drives_store_through_loading() {
    let base = common::spawn_backend(service_answering(
        StatusCode::CREATED,
        json!({"short_code": "abc123", "long_url": "https://x.com"}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let store = ShorteningStore::new();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |status| sink.lock().unwrap().push(status.state));

    let response = shorten::run_attempt(&store, &client, "https://x.com", "http://short.example")
        .await
        .unwrap();
    assert_eq!(response.short_code, "abc123");

    let status = store.snapshot();
    assert_eq!(status.state, ShorteningState::Success);
    assert_eq!(status.original_url, "https://x.com");
    assert_eq!(status.short_code.as_deref(), Some("abc123"));
    assert_eq!(
        status.short_url.as_deref(),
        Some("http://short.example/abc123")
    );
    assert!(status.error.is_none());

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ShorteningState::Idle, // replayed at subscription
            ShorteningState::Loading,
            ShorteningState::Success,
        ]
    );
}

#[tokio::test]
async fn test_run_attempt_failure_surfaces_backend_message() {
    let base = common::spawn_backend(service_answering(
        StatusCode::BAD_REQUEST,
        json!({"error": "bad_input", "reason": "URL too long"}),
    ))
    .await;

    let client = ShortenClient::new(base).unwrap();
    let store = ShorteningStore::new();

    let result = shorten::run_attempt(&store, &client, "https://x.com", "http://short.example").await;
    assert!(result.is_err());

    let status = store.snapshot();
    assert_eq!(status.state, ShorteningState::Error);
    assert_eq!(status.error.as_deref(), Some("URL too long"));
    assert!(status.short_code.is_none());
    assert!(status.short_url.is_none());
}
