//! Request/response DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON envelopes the backend emits so serde can do
//! all decoding. Optional fields default instead of failing, because older
//! server revisions omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Unique handle, lowercase letters/digits/underscores.
    pub username: String,
    /// Contact address used to sign in.
    pub email: String,
    /// ISO 8601 creation timestamp, if the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A journal entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Calendar date the dream occurred, `YYYY-MM-DD`.
    pub date_dreamed: String,
    /// Free-form mood label, lowercased by the server.
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub is_lucid: bool,
    /// Private dreams never appear in the public feed.
    #[serde(default = "default_private")]
    pub is_private: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_private() -> bool {
    true
}

/// Payload for creating a journal entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewDream {
    pub title: String,
    pub content: String,
    pub date_dreamed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub is_lucid: bool,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Successful login or registration response. Registration issues a token
/// immediately, so both endpoints share this envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub user: User,
}

/// Envelope for `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// One page of journal entries.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DreamsPage {
    #[serde(default)]
    pub dreams: Vec<Dream>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub pages: Option<i64>,
}

/// Aggregated journal statistics for the profile page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DreamStats {
    #[serde(default)]
    pub total_dreams: i64,
    #[serde(default)]
    pub lucid_dreams: i64,
    #[serde(default)]
    pub mood_distribution: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub dreams_by_month: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub most_common_tags: Vec<serde_json::Value>,
}

/// Result of a username search.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FindUsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total: i64,
}

/// Envelope for `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
