use super::*;
use crate::net::types::User;
use crate::state::session::Session;

#[test]
fn should_redirect_unauth_when_session_missing() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let mut state = SessionState::default();
    state.begin(Session { user: User::default(), token: "t".to_owned() });
    assert!(!should_redirect_unauth(&state));
}
