//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every auth-required page applies the identical unauthenticated redirect.
//! The check is synchronous against the in-memory session flag; it never
//! consults the server, so a token the backend has since expired still
//! passes until a request comes back 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where an unauthenticated visitor is sent instead of a guarded page.
pub const LOGIN_ROUTE: &str = "/login";

/// Redirect to the login route whenever the session reports
/// unauthenticated. Install from any page that requires a signed-in user.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Guard decision: `Some(route)` when navigation must divert, `None` when
/// the visitor may proceed.
pub(crate) fn redirect_target(state: &AuthState) -> Option<&'static str> {
    if state.is_authenticated() { None } else { Some(LOGIN_ROUTE) }
}
