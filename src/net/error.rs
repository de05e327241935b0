//! Error taxonomy for the HTTP layer.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request collapses into one `ApiError` so pages can show a
//! single message string. The server reports failures as `{"message": ...}`
//! bodies; `from_status` recovers that message when it parses.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("unauthorized - session token missing or expired")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited - please wait before retrying")]
    RateLimited,

    #[error("server error: {0}")]
    ServerError(String),

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("not available outside the browser")]
    Unavailable,
}

/// Maximum length of a response body echoed into an error message.
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Map a non-2xx response to an error, preferring the server's own
    /// `message` field over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| truncate_body(body));
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound(message),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::Status { status, message },
        }
    }
}

/// Pull the `message` field out of a JSON error body, if there is one.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        body.to_owned()
    } else {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i <= MAX_ERROR_BODY_LENGTH)
            .last()
            .map_or(0, |(i, _)| i);
        format!("{}... (truncated, {} total bytes)", &body[..cut], body.len())
    }
}
