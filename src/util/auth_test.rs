use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        id: 7,
        username: "luna".to_owned(),
        email: "luna@example.com".to_owned(),
        created_at: None,
    }
}

#[test]
fn unauthenticated_visitor_is_sent_to_login() {
    assert_eq!(redirect_target(&AuthState::default()), Some("/login"));
}

#[test]
fn authenticated_visitor_proceeds() {
    let state = AuthState::authenticated(sample_user(), "jwt-abc".to_owned());
    assert_eq!(redirect_target(&state), None);
}

#[test]
fn partial_session_is_treated_as_unauthenticated() {
    let state = AuthState { user: Some(sample_user()), token: None };
    assert_eq!(redirect_target(&state), Some("/login"));
}
