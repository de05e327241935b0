use super::*;

// =============================================================
// Environment selection
// =============================================================

#[test]
fn select_environment_prefers_local_network_mode() {
    assert_eq!(select_environment(Some("local"), true), Environment::LocalNetwork);
    assert_eq!(select_environment(Some("local"), false), Environment::LocalNetwork);
}

#[test]
fn select_environment_debug_is_development() {
    assert_eq!(select_environment(None, true), Environment::Development);
}

#[test]
fn select_environment_release_is_production() {
    assert_eq!(select_environment(None, false), Environment::Production);
}

#[test]
fn select_environment_ignores_unknown_network_mode() {
    assert_eq!(select_environment(Some("tunnel"), false), Environment::Production);
}

// =============================================================
// Base URL selection
// =============================================================

#[test]
fn development_base_url_ignores_override() {
    assert_eq!(
        select_api_base_url(Some("https://staging.example.com"), Environment::Development),
        "http://localhost:5000"
    );
}

#[test]
fn production_base_url_takes_override() {
    assert_eq!(
        select_api_base_url(Some("https://staging.example.com"), Environment::Production),
        "https://staging.example.com"
    );
}

#[test]
fn production_base_url_falls_back_to_preset() {
    assert_eq!(select_api_base_url(None, Environment::Production), "https://dreamkeeper.app");
}

#[test]
fn local_network_base_url_falls_back_to_preset() {
    assert_eq!(
        select_api_base_url(None, Environment::LocalNetwork),
        "http://192.168.1.100:5000"
    );
}

// =============================================================
// Unauthorized policy selection
// =============================================================

#[test]
fn unauthorized_policy_defaults_to_redirect() {
    assert_eq!(select_unauthorized_policy(None), UnauthorizedPolicy::Redirect);
}

#[test]
fn unauthorized_policy_delegate_opt_in() {
    assert_eq!(select_unauthorized_policy(Some("delegate")), UnauthorizedPolicy::Delegate);
}

#[test]
fn unauthorized_policy_unknown_value_is_redirect() {
    assert_eq!(select_unauthorized_policy(Some("panic")), UnauthorizedPolicy::Redirect);
}
