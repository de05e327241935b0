use super::*;

// =============================================================
// Username rules
// =============================================================

#[test]
fn username_is_trimmed_and_lowercased() {
    assert_eq!(validate_username("  Luna_7  "), Ok("luna_7".to_owned()));
}

#[test]
fn username_too_short_is_rejected() {
    assert_eq!(validate_username("ab"), Err("Username must be 3-80 characters."));
}

#[test]
fn username_with_punctuation_is_rejected() {
    assert!(validate_username("luna!").is_err());
    assert!(validate_username("lu na").is_err());
}

#[test]
fn username_at_length_bounds_is_accepted() {
    assert!(validate_username("abc").is_ok());
    assert!(validate_username(&"a".repeat(80)).is_ok());
    assert!(validate_username(&"a".repeat(81)).is_err());
}

// =============================================================
// Email rules
// =============================================================

#[test]
fn email_is_normalized() {
    assert_eq!(validate_email(" Luna@Example.COM "), Ok("luna@example.com".to_owned()));
}

#[test]
fn email_without_at_sign_is_rejected() {
    assert!(validate_email("luna.example.com").is_err());
}

#[test]
fn email_without_domain_dot_is_rejected() {
    assert!(validate_email("luna@example").is_err());
}

#[test]
fn email_with_empty_local_part_is_rejected() {
    assert!(validate_email("@example.com").is_err());
}

// =============================================================
// Password rules
// =============================================================

#[test]
fn password_needs_all_three_character_classes() {
    assert!(validate_password("Abcdef12").is_ok());
    assert!(validate_password("abcdef12").is_err());
    assert!(validate_password("ABCDEF12").is_err());
    assert!(validate_password("Abcdefgh").is_err());
}

#[test]
fn password_length_bounds_are_enforced() {
    assert!(validate_password("Abc1234").is_err());
    assert!(validate_password(&format!("Abc1{}", "x".repeat(125))).is_err());
}

// =============================================================
// Combined validation
// =============================================================

#[test]
fn full_registration_passes_with_valid_fields() {
    assert_eq!(
        validate_registration(" Luna ", "Luna@Example.com", "Abcdef12"),
        Ok(("luna".to_owned(), "luna@example.com".to_owned(), "Abcdef12".to_owned()))
    );
}

#[test]
fn full_registration_reports_first_failure() {
    assert_eq!(
        validate_registration("x", "bad", "short"),
        Err("Username must be 3-80 characters.")
    );
}
