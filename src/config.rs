//! Auth client configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// How the login path treats a non-2xx response whose body carries no `error`.
///
/// `Legacy` fails a login only on an `error` field and ignores the status,
/// matching older web clients whose status check never fired. `Strict` also
/// fails on any non-2xx.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStatusCheck {
    #[default]
    Strict,
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
    pub login_status_check: LoginStatusCheck,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl AuthConfig {
    /// Config pointing at `base_url` with default timeouts and strict login checks.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeouts: Timeouts::default(),
            login_status_check: LoginStatusCheck::default(),
        }
    }

    /// Build typed auth config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_BASE_URL`: default `http://127.0.0.1:3000`
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AUTH_LOGIN_STATUS_CHECK`: `strict` (default) or `legacy`
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is not a positive integer or
    /// `AUTH_LOGIN_STATUS_CHECK` names an unknown mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("AUTH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeouts = Timeouts {
            request_secs: parse_timeout_secs(
                "AUTH_REQUEST_TIMEOUT_SECS",
                std::env::var("AUTH_REQUEST_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_timeout_secs(
                "AUTH_CONNECT_TIMEOUT_SECS",
                std::env::var("AUTH_CONNECT_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let login_status_check = parse_login_status_check(std::env::var("AUTH_LOGIN_STATUS_CHECK").ok().as_deref())?;

        Ok(Self { base_url: normalize_base_url(&base_url), timeouts, login_status_check })
    }

    /// Absolute URL for an API path such as [`LOGIN_PATH`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub(crate) fn parse_timeout_secs(key: &str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Parse(format!("{key} must be greater than 0"))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(ConfigError::Parse(format!("invalid {key} '{raw}' (expected whole seconds)"))),
    }
}

pub(crate) fn parse_login_status_check(raw: Option<&str>) -> Result<LoginStatusCheck, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref().unwrap_or("strict") {
        "strict" => Ok(LoginStatusCheck::Strict),
        "legacy" => Ok(LoginStatusCheck::Legacy),
        other => Err(ConfigError::Parse(format!(
            "unsupported AUTH_LOGIN_STATUS_CHECK '{other}' (expected 'strict' or 'legacy')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
