//! REST API wrapper for the journal backend.
//!
//! Every request goes out with a JSON content type, the bearer token from
//! persistent storage when one exists, and a fixed overall timeout. A 401
//! response is handled according to the configured [`UnauthorizedPolicy`]
//! before the typed error reaches the caller.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade to inline page messages. There is no retry and no refresh-token
//! flow; each request stands alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AuthResponse, Dream, DreamStats, DreamsPage, FindUsersResponse, HealthResponse, NewDream, User,
};
#[cfg(any(test, feature = "csr"))]
use crate::config::UnauthorizedPolicy;
#[cfg(feature = "csr")]
use crate::{config, state::session};

/// Fixed overall request timeout.
#[cfg(any(test, feature = "csr"))]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "csr"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "csr"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "csr"))]
const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "csr"))]
const DREAMS_ENDPOINT: &str = "/api/dreams";
#[cfg(any(test, feature = "csr"))]
const DREAM_STATS_ENDPOINT: &str = "/api/dreams/stats";
#[cfg(any(test, feature = "csr"))]
const FEED_ENDPOINT: &str = "/api/dreams/feed";
#[cfg(any(test, feature = "csr"))]
const FIND_USERS_ENDPOINT: &str = "/api/users/find";
#[cfg(any(test, feature = "csr"))]
const HEALTH_ENDPOINT: &str = "/api/health";

#[cfg(any(test, feature = "csr"))]
fn dream_endpoint(id: i64) -> String {
    format!("{DREAMS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status forces the stored session to be dropped.
#[cfg(any(test, feature = "csr"))]
fn should_clear_session(status: u16, policy: UnauthorizedPolicy) -> bool {
    status == 401 && policy == UnauthorizedPolicy::Redirect
}

#[cfg(any(test, feature = "csr"))]
fn dreams_query(page: i64, per_page: i64, search: &str) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
    let search = search.trim();
    if !search.is_empty() {
        pairs.push(("search", search.to_owned()));
    }
    pairs
}

#[cfg(any(test, feature = "csr"))]
fn feed_query(page: i64, per_page: i64) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("per_page", per_page.to_string())]
}

#[cfg(any(test, feature = "csr"))]
fn find_users_query(term: &str, limit: i64) -> Vec<(&'static str, String)> {
    vec![("q", term.trim().to_owned()), ("limit", limit.to_string())]
}

// ---------------------------------------------------------------------
// Request core (browser only)
// ---------------------------------------------------------------------

#[cfg(feature = "csr")]
fn request_url(path: &str) -> String {
    format!("{}{path}", config::api_base_url())
}

/// Default headers shared by every request: JSON content type plus the
/// bearer token read from persistent storage, when present.
#[cfg(feature = "csr")]
fn with_default_headers(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &bearer_header_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn get(path: &str) -> gloo_net::http::RequestBuilder {
    with_default_headers(gloo_net::http::Request::get(&request_url(path)))
}

#[cfg(feature = "csr")]
fn post(path: &str) -> gloo_net::http::RequestBuilder {
    with_default_headers(gloo_net::http::Request::post(&request_url(path)))
}

#[cfg(feature = "csr")]
fn put(path: &str) -> gloo_net::http::RequestBuilder {
    with_default_headers(gloo_net::http::Request::put(&request_url(path)))
}

#[cfg(feature = "csr")]
fn delete(path: &str) -> gloo_net::http::RequestBuilder {
    with_default_headers(gloo_net::http::Request::delete(&request_url(path)))
}

/// Send a built request, racing it against the overall timeout, and map a
/// non-2xx response into an `ApiError` after applying the 401 policy.
#[cfg(feature = "csr")]
async fn execute(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::FutureExt;

    let send = request.send().fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
    futures::pin_mut!(send, timeout);

    let response = futures::select! {
        result = send => result.map_err(|e| ApiError::Network(e.to_string()))?,
        () = timeout => return Err(ApiError::Timeout),
    };

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if should_clear_session(status, config::unauthorized_policy()) {
        leptos::logging::warn!("unauthorized response - clearing session");
        session::clear();
        redirect_to_login();
    }
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "csr")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(feature = "csr")]
async fn decode_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------
// Typed endpoints
// ---------------------------------------------------------------------

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// `ApiError::Unauthorized` on bad credentials, otherwise the mapped
/// transport or server error.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`. The server issues a
/// token on success, so this signs the caller in as a side effect.
///
/// # Errors
///
/// Returns the mapped error; a duplicate username or email surfaces as
/// `ApiError::Status { status: 400, .. }` with the server message.
pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        let request = post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated user from `GET /api/auth/me`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the stored token no longer works.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = execute(get(ME_ENDPOINT).build().map_err(|e| ApiError::Network(e.to_string()))?)
            .await?;
        let body: super::types::MeResponse = decode_json(response).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the caller's journal via `GET /api/dreams`.
///
/// # Errors
///
/// Returns the mapped transport or server error.
pub async fn list_dreams(page: i64, per_page: i64, search: &str) -> Result<DreamsPage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = get(DREAMS_ENDPOINT)
            .query(dreams_query(page, per_page, search).iter().map(|(k, v)| (*k, v.as_str())))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (page, per_page, search);
        Err(ApiError::Unavailable)
    }
}

/// Create a journal entry via `POST /api/dreams`.
///
/// # Errors
///
/// Validation failures surface as `ApiError::Status { status: 400, .. }`.
pub async fn create_dream(payload: &NewDream) -> Result<Dream, ApiError> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct CreatedResponse {
            dream: Dream,
        }
        let request =
            post(DREAMS_ENDPOINT).json(payload).map_err(|e| ApiError::Network(e.to_string()))?;
        let body: CreatedResponse = decode_json(execute(request).await?).await?;
        Ok(body.dream)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update fields of an existing entry via `PUT /api/dreams/{id}`.
///
/// # Errors
///
/// `ApiError::NotFound` when the entry does not exist or belongs to
/// someone else.
pub async fn update_dream(id: i64, patch: &serde_json::Value) -> Result<Dream, ApiError> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct UpdatedResponse {
            dream: Dream,
        }
        let request =
            put(&dream_endpoint(id)).json(patch).map_err(|e| ApiError::Network(e.to_string()))?;
        let body: UpdatedResponse = decode_json(execute(request).await?).await?;
        Ok(body.dream)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, patch);
        Err(ApiError::Unavailable)
    }
}

/// Delete an entry via `DELETE /api/dreams/{id}`.
///
/// # Errors
///
/// `ApiError::NotFound` when the entry does not exist or belongs to
/// someone else.
pub async fn delete_dream(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = delete(&dream_endpoint(id))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        execute(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Aggregate journal statistics via `GET /api/dreams/stats`.
///
/// # Errors
///
/// Returns the mapped transport or server error.
pub async fn dream_stats() -> Result<DreamStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = get(DREAM_STATS_ENDPOINT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// One page of public dreams from other users via `GET /api/dreams/feed`.
///
/// # Errors
///
/// Returns the mapped transport or server error.
pub async fn fetch_feed(page: i64, per_page: i64) -> Result<DreamsPage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = get(FEED_ENDPOINT)
            .query(feed_query(page, per_page).iter().map(|(k, v)| (*k, v.as_str())))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (page, per_page);
        Err(ApiError::Unavailable)
    }
}

/// Username search via `GET /api/users/find`. Terms under two characters
/// come back as an empty result rather than an error.
///
/// # Errors
///
/// Returns the mapped transport or server error.
pub async fn find_users(term: &str, limit: i64) -> Result<FindUsersResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = get(FIND_USERS_ENDPOINT)
            .query(find_users_query(term, limit).iter().map(|(k, v)| (*k, v.as_str())))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (term, limit);
        Err(ApiError::Unavailable)
    }
}

/// Backend reachability probe via `GET /api/health`.
///
/// # Errors
///
/// `ApiError::Network` or `ApiError::Timeout` when the backend is down.
pub async fn health() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request =
            get(HEALTH_ENDPOINT).build().map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}
