//! In-memory session for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from the root component. Written by
//! login and logout only; everything else reads the token. Nothing is
//! persisted, so a reload starts logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// A logged-in identity and the bearer token that authenticates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Session holder with explicit begin/clear lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    pub fn begin(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn clear(&mut self) {
        self.session = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Replace the stored user while keeping the token, e.g. after `/api/user`.
    pub fn refresh_user(&mut self, user: User) {
        if let Some(session) = self.session.as_mut() {
            session.user = user;
        }
    }

    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map_or_else(String::new, |s| s.user.display_name().to_owned())
    }
}
