//! REST API executor for the auth endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, AuthError>`; transport failures are
//! wrapped as [`AuthError::Transport`] and server rejections as
//! [`AuthError::Authentication`]. Nothing panics on a bad response.

use serde::Serialize;
use serde_json::Value;

use super::types::{AuthUser, classify_response};
use crate::config::{AuthConfig, CURRENT_USER_PATH, LOGIN_PATH, LOGOUT_PATH, LoginStatusCheck, SIGNUP_PATH};
use crate::credentials::{LoginCredentials, SignupCredentials};
use crate::error::AuthError;

pub(crate) fn current_user_failed_message(status: u16) -> String {
    format!("current user request failed: {status}")
}

/// Calls the auth backend on behalf of the forms and the session cache.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/auth/login`. Resolves with no payload.
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError>;

    /// `POST /api/auth/signup`. Resolves with the response body verbatim.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<Value, AuthError>;

    /// `GET /api/auth/me`. `None` when no session is active.
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;

    /// `POST /api/auth/logout`.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// [`AuthApi`] backed by a cookie-keeping `reqwest` client.
///
/// The cookie store plays the role of the browser's `credentials: "include"`:
/// a session cookie set by login or signup rides along on later calls.
#[derive(Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    config: AuthConfig,
}

impl HttpAuthApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<(u16, String), AuthError> {
        let url = self.config.endpoint(path);
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(%url, status, "auth request completed");
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        let (status, text) = self.post_json(LOGIN_PATH, credentials).await?;
        classify_response(status, &text, self.config.login_status_check)?;
        Ok(())
    }

    async fn signup(&self, credentials: &SignupCredentials) -> Result<Value, AuthError> {
        let (status, text) = self.post_json(SIGNUP_PATH, credentials).await?;
        classify_response(status, &text, LoginStatusCheck::Strict)
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        let url = self.config.endpoint(CURRENT_USER_PATH);
        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(%url, status, "current user fetched");

        if matches!(status, 401 | 403) {
            return Ok(None);
        }
        if !(200..300).contains(&status) {
            return Err(AuthError::Transport(current_user_failed_message(status)));
        }
        let data = match classify_response(status, &text, LoginStatusCheck::Strict) {
            Ok(data) => data,
            Err(AuthError::Authentication(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        if data.is_null() {
            return Ok(None);
        }
        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| AuthError::Transport(format!("invalid user payload: {e}")))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let (status, text) = self.post_json(LOGOUT_PATH, &serde_json::json!({})).await?;
        if text.trim().is_empty() {
            return if (200..300).contains(&status) { Ok(()) } else { Err(AuthError::rejected(None)) };
        }
        classify_response(status, &text, LoginStatusCheck::Strict)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
