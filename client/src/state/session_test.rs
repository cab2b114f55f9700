use super::*;

fn session(token: &str) -> Session {
    Session {
        user: User { id: Some(1), username: Some("driver".to_owned()), email: None },
        token: token.to_owned(),
    }
}

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.current().map(|s| s.token.as_str()), None);
    assert_eq!(state.display_name(), "");
}

#[test]
fn begin_then_clear_round_trips_lifecycle() {
    let mut state = SessionState::default();
    state.begin(session("t1"));
    assert_eq!(state.current().map(|s| s.token.as_str()), Some("t1"));
    assert_eq!(state.display_name(), "driver");
    state.clear();
    assert!(state.current().is_none());
}

#[test]
fn refresh_user_keeps_token() {
    let mut state = SessionState::default();
    state.begin(session("t1"));
    state.refresh_user(User { id: Some(1), username: Some("renamed".to_owned()), email: None });
    assert_eq!(state.current().map(|s| s.token.as_str()), Some("t1"));
    assert_eq!(state.display_name(), "renamed");
}

#[test]
fn refresh_user_without_session_is_noop() {
    let mut state = SessionState::default();
    state.refresh_user(User::default());
    assert!(!state.is_authenticated());
}
