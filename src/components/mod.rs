//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome and list items while reading the
//! session from the Leptos context provider.

pub mod dream_card;
pub mod navbar;
