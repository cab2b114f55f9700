//! `ClientController`: every backend operation the pages can trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own form state in signals and call into the controller from event
//! handlers. The controller validates input, enforces the session guard on
//! mutations, builds the request, sends it through a `Transport` and returns a
//! typed result. It never touches signals, so a failed call cannot leave
//! partial state behind: callers only write state on `Ok`.
//!
//! Requests run to completion or transport failure. There is no retry,
//! timeout or deduplication; a repeated submit sends a repeated request.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{self, ApiError, ApiRequest, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{Credentials, Lap, LoginResponse, MessageBody, RecordSummary, ReferenceItem, Registration, User};
use crate::state::laps::LapForm;
use crate::state::records::RecordDraft;
use crate::state::reference::ReferenceKind;
use crate::state::session::Session;
use crate::util::validation::{CredentialPolicy, validate_credentials};

pub const LOGIN_FAILED: &str = "Login failed.";
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const REGISTERED: &str = "Registration complete. Please log in.";
pub const RECORD_SAVE_FAILED: &str = "Failed to save the record.";
pub const RECORD_SAVED: &str = "Record saved.";
pub const LAP_SAVE_FAILED: &str = "Failed to save the lap.";
pub const LAP_LOAD_FAILED: &str = "Failed to load the lap.";
pub const LAP_DELETE_FAILED: &str = "Failed to delete the lap.";
pub const LIST_LOAD_FAILED: &str = "Failed to load the list.";
pub const DELETE_CONFIRM_PROMPT: &str = "Delete this lap time?";

/// Result of a delete attempt that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

/// What a successful registration told us to do next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub message: String,
    pub redirect: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ClientController<T> {
    transport: T,
    policy: CredentialPolicy,
}

impl<T: Transport> ClientController<T> {
    pub fn new(transport: T, policy: CredentialPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{:?} {}", request.method, request.path);
        let path = request.path.clone();
        let result = self.transport.send(request).await;
        match &result {
            Ok(response) if !response.ok() => log::debug!("{path} -> {}", response.status),
            Err(e) => log::warn!("{path} failed: {e}"),
            Ok(_) => {}
        }
        result
    }

    fn validate(&self, email: &str, password: &str) -> Result<(), ApiError> {
        validate_credentials(self.policy, email, password).map_err(|m| ApiError::Validation(m.to_owned()))
    }

    /// Authenticate and build the session from the response.
    ///
    /// # Errors
    ///
    /// `Validation` before sending, `Rejected` with the server message on
    /// non-2xx, `Network` on transport failure, `Decode` when a 2xx body has
    /// no token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let (email, password) = (email.trim(), password.trim());
        self.validate(email, password)?;
        let request =
            api::login_request(&Credentials { email: email.to_owned(), password: password.to_owned() })?;
        let body: LoginResponse = self.dispatch(request).await?.json()?;
        let token = body
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carried no token".to_owned()))?;
        Ok(Session { user: body.user, token })
    }

    /// Create an account. `username` is sent only when non-empty.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::login`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        username: Option<String>,
    ) -> Result<RegisterOutcome, ApiError> {
        let (email, password) = (email.trim(), password.trim());
        self.validate(email, password)?;
        let request = api::register_request(&Registration {
            email: email.to_owned(),
            password: password.to_owned(),
            username: username.filter(|name| !name.trim().is_empty()),
        })?;
        let response = self.dispatch(request).await?;
        response.check()?;
        let body: MessageBody = serde_json::from_str(&response.body).unwrap_or_default();
        Ok(RegisterOutcome {
            message: body.message.unwrap_or_else(|| REGISTERED.to_owned()),
            redirect: body.redirect.filter(|target| !target.is_empty()),
        })
    }

    /// End the backend session.
    ///
    /// # Errors
    ///
    /// `Rejected` or `Network`; callers clear local state either way.
    pub async fn logout(&self, session: &Session) -> Result<(), ApiError> {
        self.dispatch(api::logout_request(&session.token)).await?.check()
    }

    /// Re-read the identity behind the session token.
    ///
    /// # Errors
    ///
    /// `Rejected` when the token is no longer accepted.
    pub async fn current_user(&self, session: &Session) -> Result<User, ApiError> {
        self.dispatch(api::current_user_request(&session.token)).await?.json()
    }

    /// Fetch one reference list. Sends the bearer token only when logged in.
    ///
    /// # Errors
    ///
    /// Any transport or decode failure of that list.
    pub async fn load_reference_list(
        &self,
        session: Option<&Session>,
        kind: ReferenceKind,
    ) -> Result<Vec<ReferenceItem>, ApiError> {
        let token = session.map(|s| s.token.as_str());
        self.dispatch(api::reference_request(kind, token)).await?.json()
    }

    /// Fetch all three reference lists concurrently. `on_loaded` runs as each
    /// list arrives, in completion order; failed lists are logged and skipped.
    pub async fn load_reference_data<F>(&self, session: Option<&Session>, on_loaded: F)
    where
        F: Fn(ReferenceKind, Vec<ReferenceItem>),
    {
        let on_loaded = &on_loaded;
        let loads = ReferenceKind::ALL.map(|kind| async move {
            match self.load_reference_list(session, kind).await {
                Ok(items) => on_loaded(kind, items),
                Err(e) => log::warn!("loading {} failed: {e}", kind.path()),
            }
        });
        futures::future::join_all(loads).await;
    }

    /// Fetch the leaderboard.
    ///
    /// # Errors
    ///
    /// Any transport, rejection or decode failure.
    pub async fn load_records(&self, session: Option<&Session>) -> Result<Vec<RecordSummary>, ApiError> {
        let token = session.map(|s| s.token.as_str());
        self.dispatch(api::records_request(token)).await?.json()
    }

    /// Submit a record with its lap times numbered 1..N in input order.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn` without a session (nothing is sent), otherwise the
    /// server's rejection or a transport failure.
    pub async fn submit_record(&self, session: Option<&Session>, draft: &RecordDraft) -> Result<(), ApiError> {
        let session = session.ok_or(ApiError::NotLoggedIn)?;
        let request = api::create_record_request(&session.token, &draft.to_payload())?;
        self.dispatch(request).await?.check()
    }

    /// Fetch the lap list.
    ///
    /// # Errors
    ///
    /// Any transport, rejection or decode failure.
    pub async fn load_laps(&self, session: Option<&Session>) -> Result<Vec<Lap>, ApiError> {
        let token = session.map(|s| s.token.as_str());
        self.dispatch(api::laps_request(token)).await?.json()
    }

    /// Fetch a single lap, e.g. to populate the form for editing.
    ///
    /// # Errors
    ///
    /// Any transport, rejection or decode failure.
    pub async fn fetch_lap(&self, session: Option<&Session>, id: i64) -> Result<Lap, ApiError> {
        let token = session.map(|s| s.token.as_str());
        self.dispatch(api::lap_request(token, id)).await?.json()
    }

    /// Create (no id) or replace (id) a lap with the form contents.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn` without a session (nothing is sent), otherwise the
    /// server's rejection or a transport failure.
    pub async fn save_lap(&self, session: Option<&Session>, form: &LapForm) -> Result<(), ApiError> {
        let session = session.ok_or(ApiError::NotLoggedIn)?;
        let request = api::save_lap_request(&session.token, form.lap_id, &form.payload())?;
        self.dispatch(request).await?.check()
    }

    /// Delete a lap after `confirm` agrees. Declining sends nothing.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn` without a session, otherwise the server's rejection or a
    /// transport failure.
    pub async fn delete_lap<C>(&self, session: Option<&Session>, id: i64, confirm: C) -> Result<DeleteOutcome, ApiError>
    where
        C: FnOnce() -> bool,
    {
        let session = session.ok_or(ApiError::NotLoggedIn)?;
        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.dispatch(api::delete_lap_request(&session.token, id)).await?.check()?;
        Ok(DeleteOutcome::Deleted)
    }
}
