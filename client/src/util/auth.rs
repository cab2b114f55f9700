//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated pages apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_authenticated()
}

/// Redirect to `/login` whenever no session is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
