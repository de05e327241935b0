//! Persisted session record and the operations that mutate auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads as two localStorage entries: the raw
//! bearer token and the JSON-serialized user record. This module owns every
//! transition of `AuthState`: pages call `login`/`logout`/`update_user`
//! and never touch storage themselves.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed persisted record silently degrades to the
//! signed-out state; nothing here raises.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::types::User;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Rebuild the in-memory session from persistent storage.
///
/// Authenticated only when both entries exist and the user record parses;
/// any other combination yields the empty state.
pub fn restore() -> AuthState {
    let state = decode(storage_get(TOKEN_KEY), storage_get(USER_KEY));
    if state.is_authenticated() {
        leptos::logging::log!("session restored for {}", state.username());
    }
    state
}

/// Unconditionally overwrite both the persisted record and the in-memory
/// session. The caller is trusted; no shape or format checks.
pub fn login(auth: RwSignal<AuthState>, user: User, token: String) {
    storage_set(TOKEN_KEY, &token);
    if let Some(raw) = encode_user(&user) {
        storage_set(USER_KEY, &raw);
    }
    leptos::logging::log!("signed in as {}", user.username);
    auth.set(AuthState::authenticated(user, token));
}

/// Clear the persisted record and the in-memory session. Idempotent.
pub fn logout(auth: RwSignal<AuthState>) {
    clear();
    auth.set(AuthState::default());
}

/// Replace the stored identity while keeping the token, e.g. after a
/// fresh `/api/auth/me` fetch.
pub fn update_user(auth: RwSignal<AuthState>, user: User) {
    if let Some(raw) = encode_user(&user) {
        storage_set(USER_KEY, &raw);
    }
    auth.update(|state| state.user = Some(user));
}

/// Remove both halves of the persisted record. Safe when already absent.
pub fn clear() {
    storage_remove(TOKEN_KEY);
    storage_remove(USER_KEY);
}

/// Token as currently persisted. The HTTP layer reads this directly rather
/// than going through the signal, mirroring the original request
/// interceptor.
pub fn stored_token() -> Option<String> {
    storage_get(TOKEN_KEY)
}

fn decode(token: Option<String>, raw_user: Option<String>) -> AuthState {
    match (token, raw_user) {
        (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => AuthState::authenticated(user, token),
            // Tampered or corrupted record reads as "absent".
            Err(_) => AuthState::default(),
        },
        _ => AuthState::default(),
    }
}

fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

// Browser storage glue. Outside the csr build these no-op so the pure
// layer above stays natively compilable.

fn storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn storage_set(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn storage_remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
