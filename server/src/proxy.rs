//! Same-origin forwarding of `/api/*` to the lap-tracker backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to this server, so API calls share
//! the page's origin. Each request is replayed against `BACKEND_URL` with
//! its method, path, query, body and end-to-end headers (including
//! `Authorization`); the backend's status, headers and body come back
//! unchanged. Non-2xx backend answers are passed through, not rewritten.
//!
//! DESIGN
//! ======
//! Hop-by-hop headers describe a single connection and are dropped in both
//! directions, as are `host` and `content-length`, which the outgoing client
//! and the response body recompute.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::Response;

use crate::config::ServerConfig;
use crate::error::{ProxyError, ServerError};

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: Arc<str>,
}

impl ProxyState {
    /// Build the shared outbound client for `config.backend_url`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::HttpClientBuild` if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ServerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}

/// Backend URL for an incoming request URI, keeping path and query.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// False for hop-by-hop headers plus `host` and `content-length`.
pub fn forwardable_header(name: &HeaderName) -> bool {
    !matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

/// Copy every forwardable header, keeping repeated values.
pub fn copy_headers(source: &HeaderMap) -> HeaderMap {
    source
        .iter()
        .filter(|(name, _)| forwardable_header(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}` handler.
///
/// # Errors
///
/// Returns `ProxyError` when the backend cannot be reached, times out, or
/// its body cannot be read.
pub async fn forward(
    State(proxy): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&proxy.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding");

    let upstream = proxy
        .http
        .request(method, &url)
        .headers(copy_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = copy_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
