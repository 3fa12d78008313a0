//! Signup screen: email, username, full name, and password against
//! `POST /api/auth/signup`, plus the required terms checkbox.

use serde_json::Value;

use super::form::{AuthForm, AuthRequest};
use crate::credentials::{SignupCredentials, SignupField};
use crate::error::AuthError;
use crate::net::api::AuthApi;

pub const ACCOUNT_CREATED: &str = "Account created successfully";

pub type SignupPage = AuthForm<SignupCredentials>;

#[async_trait::async_trait]
impl AuthRequest for SignupCredentials {
    const NAME: &'static str = "signup";
    const SUCCESS_NOTICE: Option<&'static str> = Some(ACCOUNT_CREATED);
    const SUBMIT_LABEL: &'static str = "Sign up";
    const PENDING_LABEL: &'static str = "Creating account...";

    async fn send(&self, api: &dyn AuthApi) -> Result<Option<Value>, AuthError> {
        api.signup(self).await.map(Some)
    }
}

impl SignupPage {
    pub fn set_email(&self, value: impl Into<String>) {
        self.update_field(SignupField::Email, value);
    }

    pub fn set_username(&self, value: impl Into<String>) {
        self.update_field(SignupField::Username, value);
    }

    pub fn set_full_name(&self, value: impl Into<String>) {
        self.update_field(SignupField::FullName, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.update_field(SignupField::Password, value);
    }
}

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;
