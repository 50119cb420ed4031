//! Form flows: validate, submit once, react to the result.
//!
//! ARCHITECTURE
//! ============
//! Each flow is an async function over an [`AccountApi`] and a
//! [`SessionAccess`], so pages stay thin and the whole sequence runs under
//! test with a recording API and in-memory storage.
//!
//! Validation failures never reach the network. A failed call leaves the
//! session untouched. There are no retries.
//!
//! [`AccountApi`]: crate::net::api::AccountApi
//! [`SessionAccess`]: crate::state::session::SessionAccess

pub mod login;
pub mod profile;
pub mod register;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

use thiserror::Error;

use crate::net::api::ApiError;
use crate::util::validation::FieldErrors;

/// Why a flow did not complete.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// Input failed validation; nothing was sent.
    #[error("please fix the highlighted fields")]
    Invalid(FieldErrors),

    /// The flow needs a signed-in user and there is none.
    #[error("you are not signed in")]
    NotSignedIn,

    /// The single request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FlowError {
    /// Field messages to render, if this was a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// What the page should do after a successful flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowSuccess {
    /// Text for the success notification.
    pub notice: &'static str,
    /// Where to navigate next, if anywhere.
    pub redirect: Option<&'static str>,
}
