use super::*;

#[test]
fn validate_login_input_trims_and_lowercases_email() {
    assert_eq!(
        validate_login_input("  User@Example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords are never trimmed; leading spaces are significant.
    assert_eq!(
        validate_login_input("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}
