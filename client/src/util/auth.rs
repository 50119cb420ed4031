//! Route guard for signed-in-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. The
//! decision is recomputed from the session on every evaluation and never
//! cached.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::LOGIN_PATH;
use crate::net::types::UserAccount;

/// Outcome of guarding one render pass of a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A user is signed in; render the requested view.
    Render,
    /// Nobody is signed in; send the browser here instead.
    Redirect(&'static str),
}

/// Decide whether a protected view may render for `account`.
pub fn evaluate(account: Option<&UserAccount>) -> GuardDecision {
    if account.is_some() { GuardDecision::Render } else { GuardDecision::Redirect(LOGIN_PATH) }
}
