use anyhow::Context;
use reqwest::{header, redirect, Client, StatusCode};
use tracing::{debug, error};

/// Generic message shown when the backend cannot be reached; the real cause
/// is logged, not surfaced.
const FALLBACK_MESSAGE: &str = "Failed to resolve short URL";

/// Result of resolving a short code against the backend, consumed by the
/// rendering layer. The redirect itself is decided here and performed there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Redirect { location: String },
    NotFound { short_code: String },
    Error { short_code: String, message: String },
}

/// Resolves short codes by querying the backend's redirect endpoint.
///
/// Holds no per-request state; every call is independent. The backend base
/// URL is injected so tests can point it at a stub.
pub struct Resolver {
    http: Client,
    backend_url: String,
}

impl Resolver {
    pub fn new(backend_url: impl Into<String>) -> anyhow::Result<Self> {
        // The raw 301/302 and Location header must be observed, so the
        // client must not follow redirects itself.
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent("shortgate-resolver/0.1.0")
            .build()
            .context("failed to build HTTP client for short-code resolution")?;

        Ok(Self {
            http,
            backend_url: backend_url.into(),
        })
    }

    /// Map a short code to an outcome. Never panics and never returns a
    /// transport error; failures become `ResolutionOutcome::Error`.
    pub async fn resolve(&self, short_code: &str) -> ResolutionOutcome {
        let endpoint = format!("{}/{}", self.backend_url.trim_end_matches('/'), short_code);

        let response = match self.http.get(&endpoint).send().await {
            Ok(response) => response,
            Err(err) => {
                error!(short_code, error = %err, "could not reach backend for resolution");
                return ResolutionOutcome::Error {
                    short_code: short_code.to_string(),
                    message: FALLBACK_MESSAGE.to_string(),
                };
            }
        };

        let status = response.status();
        if status == StatusCode::FOUND || status == StatusCode::MOVED_PERMANENTLY {
            if let Some(location) = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
            {
                debug!(short_code, location, "short code resolved");
                return ResolutionOutcome::Redirect {
                    location: location.to_string(),
                };
            }
            // A redirect status without a Location header falls through to
            // the unexpected-status branch, it is not a silent no-op.
        } else if status == StatusCode::NOT_FOUND {
            debug!(short_code, "short code not found");
            return ResolutionOutcome::NotFound {
                short_code: short_code.to_string(),
            };
        }

        ResolutionOutcome::Error {
            short_code: short_code.to_string(),
            message: format!("Unexpected response status: {}", status.as_u16()),
        }
    }
}
