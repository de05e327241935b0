use super::*;

#[test]
fn query_is_trimmed() {
    assert_eq!(normalize_find_query("  luna  "), Some("luna".to_owned()));
}

#[test]
fn one_character_query_is_dropped() {
    assert_eq!(normalize_find_query("l"), None);
}

#[test]
fn whitespace_only_query_is_dropped() {
    assert_eq!(normalize_find_query("   "), None);
}

#[test]
fn two_characters_is_the_minimum() {
    assert_eq!(normalize_find_query("lu"), Some("lu".to_owned()));
}

#[test]
fn multibyte_characters_count_as_characters() {
    assert_eq!(normalize_find_query("ñá"), Some("ñá".to_owned()));
}
