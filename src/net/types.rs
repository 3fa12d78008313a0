//! Wire DTOs and response classification for the auth endpoints.
//!
//! DESIGN
//! ======
//! Classification is a pure function of `(status, body, policy)` so the
//! success/failure rules can be tested without a server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LoginStatusCheck;
use crate::error::AuthError;

/// The authenticated user returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Classify an auth endpoint response.
///
/// An `error` field that is present and not `null` always fails the request.
/// A non-2xx status without one fails only under [`LoginStatusCheck::Strict`].
///
/// # Errors
///
/// Returns [`AuthError::Transport`] if the body is not JSON and
/// [`AuthError::Authentication`] if the server rejected the request.
pub fn classify_response(status: u16, body: &str, check: LoginStatusCheck) -> Result<Value, AuthError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| AuthError::Transport(format!("invalid JSON response: {e}")))?;

    if let Some(err) = data.get("error").filter(|v| !v.is_null()) {
        return Err(AuthError::rejected(err.as_str()));
    }

    if check == LoginStatusCheck::Strict && !(200..300).contains(&status) {
        return Err(AuthError::rejected(None));
    }

    Ok(data)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
