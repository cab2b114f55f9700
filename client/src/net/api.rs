//! REST request construction and response interpretation.
//!
//! Everything here is pure: requests are plain `ApiRequest` values and
//! responses are `ApiResponse` values, so the controller can be exercised
//! without a browser. The `transport` module turns them into real HTTP calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto one `ApiError` variant. Server rejections keep the
//! body's `error` string verbatim; transport and decode failures collapse to a
//! per-operation generic message when shown to the user.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Credentials, ErrorBody, LapPayload, NewRecord, Registration};
use crate::state::reference::ReferenceKind;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const CURRENT_USER_PATH: &str = "/api/user";
pub const RECORDS_PATH: &str = "/api/records";
pub const LAPS_PATH: &str = "/api/laps";

/// Message shown for guard failures on mutations.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Login required.";

/// Errors surfaced by client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// A mutation was attempted without a session token.
    #[error("login required")]
    NotLoggedIn,

    /// The backend answered with a non-2xx status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// No response at all (connection refused, CORS, offline).
    #[error("network failure: {0}")]
    Network(String),

    /// A 2xx body could not be parsed.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A request body could not be serialized; nothing was sent.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text to show the user. `fallback` is the operation's generic failure
    /// message, used whenever there is no more specific text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::NotLoggedIn => LOGIN_REQUIRED_MESSAGE.to_owned(),
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } | Self::Network(_) | Self::Decode(_) | Self::Encode(_) => {
                fallback.to_owned()
            }
        }
    }
}

/// HTTP verbs used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described request, independent of the HTTP stack.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), bearer: None, body: None }
    }

    fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_owned);
        self
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Value for the `Authorization` header, when the request is authenticated.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body, or turn a non-2xx into `ApiError::Rejected`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for non-2xx statuses and `Decode` for malformed bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.check()?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Succeed on 2xx regardless of body content.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for non-2xx statuses.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.ok() {
            return Ok(());
        }
        Err(ApiError::Rejected { status: self.status, message: error_message_from_body(&self.body) })
    }
}

/// Extract the backend's `error` field, if the body is JSON and carries one.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}

fn lap_endpoint(id: i64) -> String {
    format!("{LAPS_PATH}/{id}")
}

pub fn login_request(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, LOGIN_PATH).json(credentials)
}

pub fn register_request(registration: &Registration) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, REGISTER_PATH).json(registration)
}

pub fn logout_request(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, LOGOUT_PATH).bearer(Some(token))
}

pub fn current_user_request(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, CURRENT_USER_PATH).bearer(Some(token))
}

pub fn reference_request(kind: ReferenceKind, token: Option<&str>) -> ApiRequest {
    ApiRequest::new(Method::Get, kind.path()).bearer(token)
}

pub fn records_request(token: Option<&str>) -> ApiRequest {
    ApiRequest::new(Method::Get, RECORDS_PATH).bearer(token)
}

pub fn create_record_request(token: &str, record: &NewRecord) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, RECORDS_PATH).bearer(Some(token)).json(record)
}

pub fn laps_request(token: Option<&str>) -> ApiRequest {
    ApiRequest::new(Method::Get, LAPS_PATH).bearer(token)
}

pub fn lap_request(token: Option<&str>, id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, lap_endpoint(id)).bearer(token)
}

/// `PUT /api/laps/{id}` when `id` is set, `POST /api/laps` otherwise.
pub fn save_lap_request(token: &str, id: Option<i64>, payload: &LapPayload) -> Result<ApiRequest, ApiError> {
    let request = match id {
        Some(id) => ApiRequest::new(Method::Put, lap_endpoint(id)),
        None => ApiRequest::new(Method::Post, LAPS_PATH),
    };
    request.bearer(Some(token)).json(payload)
}

pub fn delete_lap_request(token: &str, id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, lap_endpoint(id)).bearer(Some(token))
}
