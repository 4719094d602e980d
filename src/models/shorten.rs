use serde::{Deserialize, Serialize};

/// Body of a create-short-link request, forwarded verbatim to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Successful backend answer. The short code is opaque and backend-generated;
/// its shape is trusted, not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub long_url: String,
}

/// Structured failure body the backend returns on non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
