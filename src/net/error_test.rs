use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn from_status_401_is_unauthorized() {
    assert_eq!(ApiError::from_status(401, r#"{"message": "Token scaduto"}"#), ApiError::Unauthorized);
}

#[test]
fn from_status_404_keeps_server_message() {
    assert_eq!(
        ApiError::from_status(404, r#"{"message": "Dream not found"}"#),
        ApiError::NotFound("Dream not found".to_owned())
    );
}

#[test]
fn from_status_429_is_rate_limited() {
    assert_eq!(ApiError::from_status(429, ""), ApiError::RateLimited);
}

#[test]
fn from_status_5xx_is_server_error() {
    assert_eq!(
        ApiError::from_status(503, "upstream down"),
        ApiError::ServerError("upstream down".to_owned())
    );
}

#[test]
fn from_status_other_carries_status_and_message() {
    assert_eq!(
        ApiError::from_status(400, r#"{"message": "Validation error"}"#),
        ApiError::Status { status: 400, message: "Validation error".to_owned() }
    );
}

#[test]
fn from_status_falls_back_to_raw_body() {
    assert_eq!(
        ApiError::from_status(400, "not json at all"),
        ApiError::Status { status: 400, message: "not json at all".to_owned() }
    );
}

// =============================================================
// Body handling
// =============================================================

#[test]
fn long_bodies_are_truncated() {
    let body = "x".repeat(2000);
    let ApiError::Status { message, .. } = ApiError::from_status(418, &body) else {
        panic!("expected status error");
    };
    assert!(message.len() < 600);
    assert!(message.contains("truncated"));
    assert!(message.contains("2000 total bytes"));
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 400, message: "bad".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 400: bad");
}
