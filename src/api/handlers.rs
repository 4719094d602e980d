use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::models::{ErrorResponse, ShortenRequest};

use super::static_files::serve_form_page;

pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: String,
    pub static_dir: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Forward a create-short-link request to the backend and relay its status
/// code and JSON body verbatim.
pub async fn shorten_proxy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ShortenRequest>,
) -> Response {
    let endpoint = format!("{}/shorten", state.backend_url.trim_end_matches('/'));

    let upstream = match state.http.post(&endpoint).json(&payload).send().await {
        Ok(upstream) => upstream,
        Err(err) => {
            tracing::error!(error = %err, "could not reach backend for shortening");
            return service_unavailable();
        }
    };

    let status = upstream.status();
    match upstream.json::<serde_json::Value>().await {
        Ok(body) => {
            let status =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "backend answered with a non-JSON body");
            service_unavailable()
        }
    }
}

fn service_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "Service temporarily unavailable".to_string(),
            reason: Some("Could not connect to backend service".to_string()),
        }),
    )
        .into_response()
}

/// Serve the shortening form page
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    serve_form_page(state.static_dir.clone()).await
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
