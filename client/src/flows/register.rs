//! Sign-up flow. A successful registration does not sign the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{FlowError, FlowSuccess};
use crate::net::api::AccountApi;
use crate::net::types::Registration;
use crate::util::validation::{
    CONFIRMATION_REQUIRED, FIRST_NAME_REQUIRED, Field, FieldErrors, LAST_NAME_REQUIRED, PASSWORD_REQUIRED,
    PASSWORDS_MISMATCH, require, require_email,
};

pub const REGISTER_NOTICE: &str =
    "Votre inscription a bien été enregistrée, vous allez recevoir un mail de verification";

/// Raw sign-up form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Check the sign-up form and build the request body.
///
/// The confirmation mismatch is reported on the confirmation field whenever
/// the two passwords differ, including an empty password next to a typed
/// confirmation. Other fields do not affect it.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(form: &RegistrationForm) -> Result<Registration, FieldErrors> {
    let firstname = form.firstname.trim();
    let lastname = form.lastname.trim();
    let email = form.email.trim();

    let mut errors = FieldErrors::new();
    require(&mut errors, Field::FirstName, firstname, FIRST_NAME_REQUIRED);
    require(&mut errors, Field::LastName, lastname, LAST_NAME_REQUIRED);
    require_email(&mut errors, email);
    require(&mut errors, Field::Password, &form.password, PASSWORD_REQUIRED);
    require(&mut errors, Field::PasswordConfirmation, &form.password_confirmation, CONFIRMATION_REQUIRED);
    if form.password != form.password_confirmation {
        errors.add(Field::PasswordConfirmation, PASSWORDS_MISMATCH);
    }

    errors.into_result(Registration {
        firstname: firstname.to_owned(),
        lastname: lastname.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate and register. The session is never touched.
///
/// # Errors
///
/// Returns [`FlowError::Invalid`] without any request when validation fails,
/// or [`FlowError::Api`] when the request fails.
pub async fn submit(api: &impl AccountApi, form: &RegistrationForm) -> Result<FlowSuccess, FlowError> {
    let registration = validate(form).map_err(FlowError::Invalid)?;
    api.register(&registration).await.inspect_err(|err| {
        log::warn!("registration failed: {err}");
    })?;
    log::info!("registered {}", registration.email);
    Ok(FlowSuccess { notice: REGISTER_NOTICE, redirect: None })
}
