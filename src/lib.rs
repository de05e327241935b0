//! # dreamkeeper-client
//!
//! Leptos + WASM single-page frontend for the DreamKeeper journal.
//!
//! This crate contains pages, components, application state (the
//! localStorage-backed auth session), and the HTTP API wrapper. The pure
//! logic compiles natively for tests; everything that touches the browser
//! sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// mount the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
