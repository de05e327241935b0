use super::*;

// =============================================================
// Tag parsing
// =============================================================

#[test]
fn tags_split_on_commas_and_trim() {
    assert_eq!(
        parse_tags(" flying ,  ocean,night "),
        Some(vec!["flying".to_owned(), "ocean".to_owned(), "night".to_owned()])
    );
}

#[test]
fn tags_are_lowercased() {
    assert_eq!(parse_tags("Flying"), Some(vec!["flying".to_owned()]));
}

#[test]
fn empty_tag_field_means_no_tags() {
    assert_eq!(parse_tags(""), None);
    assert_eq!(parse_tags(" , , "), None);
}

#[test]
fn overlong_tags_are_clipped() {
    let tag = "x".repeat(80);
    let parsed = parse_tags(&tag).unwrap();
    assert_eq!(parsed[0].len(), 50);
}

// =============================================================
// Mood normalization
// =============================================================

#[test]
fn mood_is_trimmed_and_lowercased() {
    assert_eq!(normalize_mood("  Anxious "), Some("anxious".to_owned()));
}

#[test]
fn blank_mood_is_none() {
    assert_eq!(normalize_mood("   "), None);
}

// =============================================================
// Entry validation
// =============================================================

#[test]
fn valid_entry_passes() {
    assert_eq!(validate_new_dream("Flying", "Over the sea.", "2024-05-12"), Ok(()));
}

#[test]
fn blank_title_is_rejected() {
    assert_eq!(
        validate_new_dream("   ", "Over the sea.", "2024-05-12"),
        Err("Title must be 1-200 characters.")
    );
}

#[test]
fn overlong_title_is_rejected() {
    assert!(validate_new_dream(&"x".repeat(201), "content", "2024-05-12").is_err());
}

#[test]
fn blank_content_is_rejected() {
    assert_eq!(
        validate_new_dream("Flying", "", "2024-05-12"),
        Err("Content must be 1-5000 characters.")
    );
}

#[test]
fn overlong_content_is_rejected() {
    assert!(validate_new_dream("Flying", &"x".repeat(5001), "2024-05-12").is_err());
}

#[test]
fn missing_date_is_rejected() {
    assert_eq!(
        validate_new_dream("Flying", "Over the sea.", " "),
        Err("Pick the date you dreamed this.")
    );
}
