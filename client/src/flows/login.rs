//! Sign-in flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{FlowError, FlowSuccess};
use crate::config::HOME_PATH;
use crate::net::api::AccountApi;
use crate::net::types::Credentials;
use crate::state::session::SessionAccess;
use crate::util::validation::{Field, FieldErrors, PASSWORD_REQUIRED, require, require_email};

pub const LOGIN_NOTICE: &str = "Connexion réussie";

/// Raw sign-in form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Check the sign-in form and build the request body.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(form: &LoginForm) -> Result<Credentials, FieldErrors> {
    let email = form.email.trim();
    let mut errors = FieldErrors::new();
    require_email(&mut errors, email);
    require(&mut errors, Field::Password, &form.password, PASSWORD_REQUIRED);
    errors.into_result(Credentials { email: email.to_owned(), password: form.password.clone() })
}

/// Validate, sign in, and store the returned account.
///
/// # Errors
///
/// Returns [`FlowError::Invalid`] without any request when validation fails,
/// or [`FlowError::Api`] when the request fails. The session is only touched
/// on success.
pub async fn submit(api: &impl AccountApi, session: &impl SessionAccess, form: &LoginForm) -> Result<FlowSuccess, FlowError> {
    let credentials = validate(form).map_err(FlowError::Invalid)?;
    let account = api.login(&credentials).await.inspect_err(|err| {
        log::warn!("login failed: {err}");
    })?;
    log::info!("signed in as {}", account.id);
    session.replace(Some(account));
    Ok(FlowSuccess { notice: LOGIN_NOTICE, redirect: Some(HOME_PATH) })
}
