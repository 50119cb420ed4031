//! Field-level form validation.
//!
//! Messages are surfaced next to the offending input, one per field: the first
//! failing rule for a field wins.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const CONFIRMATION_REQUIRED: &str = "Password confirmation is required";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

// Leading dots and ".." are rejected separately; the regex crate has no
// lookahead.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .unwrap_or_else(|e| unreachable!("static email pattern: {e}"))
});

/// Form inputs that can carry a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Input name used in markup and wire payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

/// Messages keyed by field. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless it already has one.
    pub fn add(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no field failed, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one message was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    !raw.starts_with('.') && !raw.contains("..") && EMAIL_RE.is_match(raw)
}

/// Require a non-empty value.
pub fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &'static str) {
    if value.is_empty() {
        errors.add(field, message);
    }
}

/// Require a non-empty, well-formed email address.
pub fn require_email(errors: &mut FieldErrors, value: &str) {
    require(errors, Field::Email, value, EMAIL_REQUIRED);
    if !value.is_empty() && !is_valid_email(value) {
        errors.add(Field::Email, EMAIL_INVALID);
    }
}
