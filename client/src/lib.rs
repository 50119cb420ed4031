//! # portal-client
//!
//! Leptos + WASM front end for account registration, sign-in and profile
//! management against a remote REST API.
//!
//! The signed-in account lives in a persisted session store (`state::session`);
//! protected routes consult the route guard (`util::auth`) on every render;
//! pages run the validate → submit → react sequences in `flows`.

pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
