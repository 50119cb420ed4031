//! Signed-in account flows: profile update, account deletion and sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::{FlowError, FlowSuccess};
use crate::config::LOGIN_PATH;
use crate::net::api::AccountApi;
use crate::net::types::{ProfileChanges, UserAccount};
use crate::state::session::SessionAccess;
use crate::util::validation::{FIRST_NAME_REQUIRED, Field, FieldErrors, LAST_NAME_REQUIRED};

pub const UPDATE_NOTICE: &str = "User is updated successfully!";
pub const DELETE_NOTICE: &str = "Account deleted";
pub const SIGN_OUT_NOTICE: &str = "Signed out";
/// Inline message the profile page shows for any failed action.
pub const PROFILE_FAILURE: &str = "Something went wrong!";

/// Profile form as currently edited. Fields start out as the signed-in
/// account's values; the password starts empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

impl ProfileForm {
    /// Form prefilled from `account`.
    pub fn from_account(account: &UserAccount) -> Self {
        Self { firstname: account.firstname.clone(), lastname: account.lastname.clone(), password: String::new() }
    }
}

/// Compute the partial update for `form` against the stored `account`.
///
/// Only changed names are sent, and the password only when one was typed.
///
/// # Errors
///
/// Returns the per-field messages when a changed name is blank.
pub fn changes(account: &UserAccount, form: &ProfileForm) -> Result<ProfileChanges, FieldErrors> {
    let firstname = form.firstname.trim();
    let lastname = form.lastname.trim();

    let mut errors = FieldErrors::new();
    let mut changes = ProfileChanges::default();
    if firstname != account.firstname {
        if firstname.is_empty() {
            errors.add(Field::FirstName, FIRST_NAME_REQUIRED);
        }
        changes.firstname = Some(firstname.to_owned());
    }
    if lastname != account.lastname {
        if lastname.is_empty() {
            errors.add(Field::LastName, LAST_NAME_REQUIRED);
        }
        changes.lastname = Some(lastname.to_owned());
    }
    if !form.password.is_empty() {
        changes.password = Some(form.password.clone());
    }
    errors.into_result(changes)
}

/// Validate, send the partial update, and replace the session with the
/// account the server returns.
///
/// # Errors
///
/// [`FlowError::NotSignedIn`] or [`FlowError::Invalid`] without a request;
/// [`FlowError::Api`] when the request fails, leaving the session as it was.
pub async fn update(api: &impl AccountApi, session: &impl SessionAccess, form: &ProfileForm) -> Result<FlowSuccess, FlowError> {
    let account = session.current().ok_or(FlowError::NotSignedIn)?;
    let changes = changes(&account, form).map_err(FlowError::Invalid)?;
    let updated = api.update_account(&account.id, &changes).await.inspect_err(|err| {
        log::warn!("profile update failed for {}: {err}", account.id);
    })?;
    log::info!("profile updated for {}", updated.id);
    session.replace(Some(updated));
    Ok(FlowSuccess { notice: UPDATE_NOTICE, redirect: None })
}

/// Delete the signed-in account and sign out locally.
///
/// # Errors
///
/// [`FlowError::NotSignedIn`] without a request; [`FlowError::Api`] when the
/// request fails, leaving the session as it was.
pub async fn delete(api: &impl AccountApi, session: &impl SessionAccess) -> Result<FlowSuccess, FlowError> {
    let account = session.current().ok_or(FlowError::NotSignedIn)?;
    api.delete_account(&account.id).await.inspect_err(|err| {
        log::warn!("account deletion failed for {}: {err}", account.id);
    })?;
    log::info!("account {} deleted", account.id);
    session.replace(None);
    Ok(FlowSuccess { notice: DELETE_NOTICE, redirect: Some(LOGIN_PATH) })
}

/// End the server session and clear the local one.
///
/// # Errors
///
/// [`FlowError::Api`] when the request cannot be sent; the session is kept.
pub async fn sign_out(api: &impl AccountApi, session: &impl SessionAccess) -> Result<FlowSuccess, FlowError> {
    api.sign_out().await.inspect_err(|err| {
        log::warn!("sign-out failed: {err}");
    })?;
    log::info!("signed out");
    session.replace(None);
    Ok(FlowSuccess { notice: SIGN_OUT_NOTICE, redirect: Some(LOGIN_PATH) })
}
