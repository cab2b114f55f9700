//! HTTP transport seam between the controller and the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: a stub that reports a network error,
//! since these endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::api::{ApiError, ApiRequest, ApiResponse};
#[cfg(feature = "hydrate")]
use super::api::Method;

/// Sends an `ApiRequest` and returns the raw response.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform one HTTP exchange. Any non-2xx status is still `Ok`; only a
    /// missing response is an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport. `base_url` is prefixed to every request path;
/// empty means same origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url_for(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(network)?.send().await,
                None => builder.send().await,
            }
            .map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Network(format!("{} unavailable outside the browser", self.url_for(&request.path))))
        }
    }
}
