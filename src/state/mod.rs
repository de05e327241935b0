//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the in-memory session; `session` owns its transitions and the
//! persisted localStorage record behind them.

pub mod auth;
pub mod session;
