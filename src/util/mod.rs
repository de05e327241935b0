//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cross-page concerns (route guarding) from page
//! and component logic to improve reuse and testability.

pub mod auth;
