use super::*;

fn sample_user() -> User {
    User {
        id: 7,
        username: "luna".to_owned(),
        email: "luna@example.com".to_owned(),
        created_at: None,
    }
}

// =============================================================
// AuthState projections
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(state.username(), "");
}

#[test]
fn authenticated_state_holds_user_and_token() {
    let state = AuthState::authenticated(sample_user(), "jwt-abc".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.username(), "luna");
    assert_eq!(state.token.as_deref(), Some("jwt-abc"));
}

#[test]
fn token_without_user_is_not_authenticated() {
    let state = AuthState { user: None, token: Some("jwt-abc".to_owned()) };
    assert!(!state.is_authenticated());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let state = AuthState { user: Some(sample_user()), token: None };
    assert!(!state.is_authenticated());
}
