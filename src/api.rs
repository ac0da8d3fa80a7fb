//! Backend version probe
//! Any failure resolves to `Unavailable` rather than an error

use serde_json::Value;
use std::time::Duration;

use crate::guards;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from the version endpoint, internal to this module. The public
/// surface collapses them all into `BackendStatus::Unavailable`.
#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("received {0} from version endpoint")]
    Status(reqwest::StatusCode),

    #[error("version field missing or not a string")]
    MalformedVersion,
}

/// Outcome of probing the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Available { version: String },
    Unavailable,
}

impl BackendStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendStatus::Available { .. })
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            BackendStatus::Available { version } => Some(version),
            BackendStatus::Unavailable => None,
        }
    }
}

/// Client for the portal backend API.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Probe the backend's version endpoint.
    ///
    /// Returns `Unavailable` on any failure: connection errors, timeouts,
    /// non-2xx statuses, bodies that aren't JSON, or a missing version
    /// field. The sentinel is only produced once the request has
    /// definitively failed or resolved with unusable data.
    pub async fn version(&self) -> BackendStatus {
        match self.fetch_version().await {
            Ok(version) => BackendStatus::Available { version },
            Err(e) => {
                tracing::warn!("Backend version probe failed: {}", e);
                BackendStatus::Unavailable
            }
        }
    }

    async fn fetch_version(&self) -> Result<String, ApiError> {
        let url = format!("{}/version", self.base_url.trim_end_matches('/'));

        let res = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        let body: Value = res.json().await?;
        version_from_body(&body)
    }
}

/// Extract the `version` field from a version endpoint response body.
fn version_from_body(body: &Value) -> Result<String, ApiError> {
    match body.get("version") {
        Some(value) if guards::is_string(value) => {
            // is_string guarantees as_str succeeds
            Ok(value.as_str().unwrap_or_default().to_string())
        }
        _ => Err(ApiError::MalformedVersion),
    }
}
