//! Error taxonomy for the authentication submission flow.
//!
//! Every variant is recoverable: the form returns to an editable state and
//! the user may retry immediately.

/// Message surfaced when the server rejects a request without saying why.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Errors produced while submitting credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required field was empty; the request was never sent.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// The server rejected the credentials or signup data.
    #[error("{0}")]
    Authentication(String),

    /// The request could not be completed or its body could not be parsed.
    #[error("{0}")]
    Transport(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AuthError {
    /// Stable machine-readable code for logs and callers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E_VALIDATION",
            Self::Authentication(_) => "E_AUTHENTICATION",
            Self::Transport(_) => "E_TRANSPORT",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether resubmitting the same input could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Authentication failure carrying the server message verbatim, or the
    /// fallback when the message is missing or empty.
    #[must_use]
    pub fn rejected(message: Option<&str>) -> Self {
        match message {
            Some(m) if !m.is_empty() => Self::Authentication(m.to_owned()),
            _ => Self::Authentication(FALLBACK_MESSAGE.to_owned()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
