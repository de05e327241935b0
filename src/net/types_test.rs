use super::*;

fn sample_user_json() -> &'static str {
    r#"{"id": 7, "username": "luna", "email": "luna@example.com", "created_at": "2024-03-01T09:30:00"}"#
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_full_record() {
    let user: User = serde_json::from_str(sample_user_json()).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "luna");
    assert_eq!(user.email, "luna@example.com");
    assert_eq!(user.created_at.as_deref(), Some("2024-03-01T09:30:00"));
}

#[test]
fn user_tolerates_missing_created_at() {
    let user: User =
        serde_json::from_str(r#"{"id": 1, "username": "sol", "email": "sol@example.com"}"#).unwrap();
    assert!(user.created_at.is_none());
}

#[test]
fn user_round_trips_through_json() {
    let user: User = serde_json::from_str(sample_user_json()).unwrap();
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// Dream
// =============================================================

#[test]
fn dream_defaults_optional_fields() {
    let dream: Dream = serde_json::from_str(
        r#"{"id": 3, "title": "Flying", "content": "Over the sea.", "date_dreamed": "2024-05-12"}"#,
    )
    .unwrap();
    assert!(dream.mood.is_none());
    assert!(!dream.is_lucid);
    assert!(dream.is_private);
    assert!(dream.tags.is_none());
}

#[test]
fn dream_reads_tags_list() {
    let dream: Dream = serde_json::from_str(
        r#"{"id": 3, "title": "Flying", "content": "x", "date_dreamed": "2024-05-12",
            "tags": ["sky", "water"], "is_lucid": true, "is_private": false}"#,
    )
    .unwrap();
    assert_eq!(dream.tags.as_deref(), Some(["sky".to_owned(), "water".to_owned()].as_slice()));
    assert!(dream.is_lucid);
    assert!(!dream.is_private);
}

#[test]
fn new_dream_skips_absent_optionals() {
    let payload = NewDream {
        title: "Flying".to_owned(),
        content: "Over the sea.".to_owned(),
        date_dreamed: "2024-05-12".to_owned(),
        mood: None,
        is_lucid: false,
        is_private: true,
        tags: None,
    };
    let raw = serde_json::to_string(&payload).unwrap();
    assert!(!raw.contains("mood"));
    assert!(!raw.contains("tags"));
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn auth_response_carries_token_and_user() {
    let raw = format!(
        r#"{{"message": "Login successful", "access_token": "jwt-abc", "user": {}}}"#,
        sample_user_json()
    );
    let resp: AuthResponse = serde_json::from_str(&raw).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.user.username, "luna");
}

#[test]
fn dreams_page_defaults_to_empty() {
    let page: DreamsPage = serde_json::from_str("{}").unwrap();
    assert!(page.dreams.is_empty());
    assert!(page.total.is_none());
}

#[test]
fn find_users_response_reads_list() {
    let raw = format!(r#"{{"users": [{}], "total": 1, "query": "lu"}}"#, sample_user_json());
    let resp: FindUsersResponse = serde_json::from_str(&raw).unwrap();
    assert_eq!(resp.users.len(), 1);
    assert_eq!(resp.total, 1);
}

#[test]
fn dream_stats_tolerates_empty_body() {
    let stats: DreamStats = serde_json::from_str("{}").unwrap();
    assert_eq!(stats.total_dreams, 0);
    assert!(stats.mood_distribution.is_empty());
}
