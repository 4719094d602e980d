use anyhow::Context;
use reqwest::Client;
use thiserror::Error;

use crate::models::{ErrorResponse, ShortenRequest, ShortenResponse};

/// Failure of a single shortening attempt.
///
/// Callers can tell an application-level rejection (`Backend`) apart from not
/// reaching the service at all (`Transport`).
#[derive(Debug, Error)]
pub enum ShortenError {
    /// The service answered with a failure status and a structured body.
    #[error("{message}")]
    Backend { message: String },
    /// The service could not be reached, or its answer was not JSON.
    #[error("Failed to shorten URL")]
    Transport(#[source] reqwest::Error),
}

/// Client for the front end's create-short-link endpoint.
///
/// One attempt per call, no retries; a hung service hangs the attempt.
pub struct ShortenClient {
    http: Client,
    base_url: String,
}

impl ShortenClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent("shortgate-client/0.1.0")
            .build()
            .context("failed to build HTTP client for shortening")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Submit a long URL for shortening.
    pub async fn shorten_url(&self, long_url: &str) -> Result<ShortenResponse, ShortenError> {
        let endpoint = format!("{}/api/shorten", self.base_url.trim_end_matches('/'));
        let request = ShortenRequest {
            long_url: long_url.to_string(),
        };

        let response = self
            .http
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(ShortenError::Transport)?;

        // The service answers JSON on success and failure alike.
        let status = response.status();
        if status.is_success() {
            response
                .json::<ShortenResponse>()
                .await
                .map_err(ShortenError::Transport)
        } else {
            let body = response
                .json::<ErrorResponse>()
                .await
                .map_err(ShortenError::Transport)?;
            Err(ShortenError::Backend {
                message: failure_message(body),
            })
        }
    }
}

/// Pick the user-facing message out of a failure body: `reason` first, then
/// `error`, then a fixed fallback. The order is a contract.
fn failure_message(body: ErrorResponse) -> String {
    if let Some(reason) = body.reason.filter(|reason| !reason.is_empty()) {
        return reason;
    }
    if !body.error.is_empty() {
        return body.error;
    }
    "Failed to shorten URL".to_string()
}
