//! Build-time environment configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is compiled for exactly one deployment environment; the HTTP
//! layer reads its base URL and unauthorized-response policy from here so
//! pages never hard-code origins.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Deployment environment the bundle was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development against a backend on localhost.
    Development,
    /// Public deployment.
    Production,
    /// Development against a backend elsewhere on the LAN.
    LocalNetwork,
}

/// How the HTTP layer reacts to an unauthorized (401) response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Clear the stored session and send the browser to `/login`.
    #[default]
    Redirect,
    /// Leave the response untouched; the calling page decides.
    Delegate,
}

const DEV_API_BASE_URL: &str = "http://localhost:5000";
const LOCAL_NETWORK_API_BASE_URL: &str = "http://192.168.1.100:5000";
const PROD_API_BASE_URL: &str = "https://dreamkeeper.app";

// Compile-time overrides, standing in for the Vite env flags the original
// deployment used.
const API_URL_OVERRIDE: Option<&str> = option_env!("DREAMKEEPER_API_URL");
const NETWORK_MODE: Option<&str> = option_env!("DREAMKEEPER_NETWORK_MODE");
const ON_UNAUTHORIZED: Option<&str> = option_env!("DREAMKEEPER_ON_UNAUTHORIZED");

/// Environment this bundle was compiled for.
pub fn environment() -> Environment {
    select_environment(NETWORK_MODE, cfg!(debug_assertions))
}

/// Base URL for all API requests, without a trailing slash.
pub fn api_base_url() -> &'static str {
    select_api_base_url(API_URL_OVERRIDE, environment())
}

/// Policy applied by the HTTP layer when a request comes back 401.
pub fn unauthorized_policy() -> UnauthorizedPolicy {
    select_unauthorized_policy(ON_UNAUTHORIZED)
}

fn select_environment(network_mode: Option<&str>, debug: bool) -> Environment {
    if network_mode == Some("local") {
        Environment::LocalNetwork
    } else if debug {
        Environment::Development
    } else {
        Environment::Production
    }
}

// The localhost preset is fixed; only LAN and production deployments take
// the URL override, matching the original per-environment config table.
fn select_api_base_url(override_url: Option<&'static str>, env: Environment) -> &'static str {
    match env {
        Environment::Development => DEV_API_BASE_URL,
        Environment::LocalNetwork => override_url.unwrap_or(LOCAL_NETWORK_API_BASE_URL),
        Environment::Production => override_url.unwrap_or(PROD_API_BASE_URL),
    }
}

fn select_unauthorized_policy(raw: Option<&str>) -> UnauthorizedPolicy {
    match raw {
        Some("delegate") => UnauthorizedPolicy::Delegate,
        _ => UnauthorizedPolicy::Redirect,
    }
}
