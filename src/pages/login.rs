//! Login screen: username + password against `POST /api/auth/login`.

use serde_json::Value;

use super::form::{AuthForm, AuthRequest};
use crate::credentials::{LoginCredentials, LoginField};
use crate::error::AuthError;
use crate::net::api::AuthApi;

pub type LoginPage = AuthForm<LoginCredentials>;

#[async_trait::async_trait]
impl AuthRequest for LoginCredentials {
    const NAME: &'static str = "login";
    const SUCCESS_NOTICE: Option<&'static str> = None;
    const SUBMIT_LABEL: &'static str = "Login";
    const PENDING_LABEL: &'static str = "Logging in...";

    async fn send(&self, api: &dyn AuthApi) -> Result<Option<Value>, AuthError> {
        api.login(self).await.map(|()| None)
    }
}

impl LoginPage {
    pub fn set_username(&self, value: impl Into<String>) {
        self.update_field(LoginField::Username, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.update_field(LoginField::Password, value);
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
