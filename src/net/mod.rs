//! Networking modules for the HTTP API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every outgoing request (bearer injection, timeout, 401
//! policy), `error` is the shared failure taxonomy, and `types` defines the
//! JSON envelopes.

pub mod api;
pub mod error;
pub mod types;
