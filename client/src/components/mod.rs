//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form pieces while reading/writing shared
//! state from Leptos context providers.

pub mod authenticated_route;
pub mod form_field;
pub mod header;
pub mod toaster;
