//! Credential form state: field values, submission lifecycle, and the
//! password visibility toggle.

use super::submission::SubmissionState;
use crate::credentials::{Credentials, UnknownField, password_hint};
use crate::error::AuthError;

/// Wire name used for the terms-of-service checkbox in validation errors.
pub const TERMS_FIELD: &str = "terms";

/// Snapshot of one credential form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<C> {
    pub credentials: C,
    pub submission: SubmissionState,
    pub show_password: bool,
    pub accepted_terms: bool,
}

impl<C: Credentials> FormState<C> {
    #[must_use]
    pub fn new(credentials: C) -> Self {
        Self { credentials, ..Self::default() }
    }

    /// Merge one field into the credentials. No validation happens here.
    #[must_use]
    pub fn with_field(self, field: C::Field, value: impl Into<String>) -> Self {
        Self { credentials: self.credentials.with_field(field, value.into()), ..self }
    }

    /// Like [`FormState::with_field`], addressed by the input's `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a field of this form.
    pub fn with_named_field(self, name: &str, value: impl Into<String>) -> Result<Self, UnknownField> {
        let field = name.parse::<C::Field>()?;
        Ok(self.with_field(field, value))
    }

    #[must_use]
    pub fn with_password_visibility_toggled(self) -> Self {
        Self { show_password: !self.show_password, ..self }
    }

    #[must_use]
    pub fn with_terms_accepted(self, accepted: bool) -> Self {
        Self { accepted_terms: accepted, ..self }
    }

    #[must_use]
    pub fn with_submission(self, submission: SubmissionState) -> Self {
        Self { submission, ..self }
    }

    /// Required-field check run before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), AuthError> {
        if let Some(field) = self.credentials.first_missing() {
            return Err(AuthError::Validation { field });
        }
        if C::REQUIRES_TERMS && !self.accepted_terms {
            return Err(AuthError::Validation { field: TERMS_FIELD });
        }
        Ok(())
    }

    /// HTML input type for the password field.
    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Label for the visibility toggle button.
    #[must_use]
    pub fn visibility_label(&self) -> &'static str {
        if self.show_password { "Hide" } else { "Show" }
    }

    #[must_use]
    pub fn password_hint(&self) -> Option<&'static str> {
        password_hint(self.credentials.password())
    }

    /// Submit control is disabled while a request is in flight.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        !self.submission.is_pending()
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
