//! Server error types.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures (`ConfigError`, `ServerError`) end the process with a
//! logged error. Per-request proxy failures (`ProxyError`) become a 502 with
//! a JSON `{"error": ...}` body, the same shape the backend uses, so the
//! browser client reports them like any other rejection.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend did not answer within the configured timeout.
    #[error("backend timed out")]
    Timeout,

    /// The backend could not be reached or its body could not be read.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unavailable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
