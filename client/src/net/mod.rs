//! Networking modules for the account REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and classifies failures, `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
