//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthState>` is provided from `App` and shared by the
//! route guards, the navbar, and user-aware pages. Only the operations in
//! `state::session` mutate it; everything else reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// In-memory session: the signed-in user and their bearer token.
///
/// The two states are {authenticated, unauthenticated}; the state is
/// authenticated exactly when both fields are present, and both are only
/// ever set together by a login or a successful restore.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// State carrying a freshly issued identity and token.
    pub fn authenticated(user: User, token: String) -> Self {
        Self { user: Some(user), token: Some(token) }
    }

    /// True when both an identity and a token are held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Display name of the signed-in user, empty when signed out.
    pub fn username(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.username.as_str())
    }
}
