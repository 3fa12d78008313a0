//! Credential values collected by the login and signup forms.
//!
//! DESIGN
//! ======
//! Credentials are plain immutable values. A field edit produces a new value
//! through [`Credentials::with_field`]; nothing mutates a form in place. The
//! serialized shape is exactly the JSON body the auth endpoints expect.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Recommended minimum password length, surfaced as a hint only.
pub const MIN_PASSWORD_LEN: usize = 8;
pub const PASSWORD_HINT: &str = "Password must be at least 8 characters long";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Shared shape of the values a credential form collects.
pub trait Credentials: Clone + fmt::Debug + Default + PartialEq + Serialize + Send + Sync + 'static {
    /// Field selector accepted by [`Credentials::with_field`].
    type Field: Copy + fmt::Debug + FromStr<Err = UnknownField> + Send;

    /// Whether the form also carries a required terms-of-service checkbox.
    const REQUIRES_TERMS: bool = false;

    /// Return a copy with one field replaced.
    #[must_use]
    fn with_field(self, field: Self::Field, value: String) -> Self;

    /// Wire name of the first empty required field, if any.
    fn first_missing(&self) -> Option<&'static str>;

    fn username(&self) -> &str;

    fn password(&self) -> &str;
}

/// Advisory hint for short passwords. Never blocks submission.
#[must_use]
pub fn password_hint(password: &str) -> Option<&'static str> {
    (password.chars().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_HINT)
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl FromStr for LoginField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

impl Credentials for LoginCredentials {
    type Field = LoginField;

    fn with_field(self, field: LoginField, value: String) -> Self {
        match field {
            LoginField::Username => Self { username: value, ..self },
            LoginField::Password => Self { password: value, ..self },
        }
    }

    fn first_missing(&self) -> Option<&'static str> {
        if self.username.is_empty() {
            Some(LoginField::Username.name())
        } else if self.password.is_empty() {
            Some(LoginField::Password.name())
        } else {
            None
        }
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

// =============================================================================
// SIGNUP
// =============================================================================

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCredentials {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

impl SignupCredentials {
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self { email: email.into(), username: username.into(), full_name: full_name.into(), password: password.into() }
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Username,
    FullName,
    Password,
}

impl SignupField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::FullName => "fullName",
            Self::Password => "password",
        }
    }
}

impl FromStr for SignupField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "username" => Ok(Self::Username),
            "fullName" => Ok(Self::FullName),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

impl Credentials for SignupCredentials {
    type Field = SignupField;

    const REQUIRES_TERMS: bool = true;

    fn with_field(self, field: SignupField, value: String) -> Self {
        match field {
            SignupField::Email => Self { email: value, ..self },
            SignupField::Username => Self { username: value, ..self },
            SignupField::FullName => Self { full_name: value, ..self },
            SignupField::Password => Self { password: value, ..self },
        }
    }

    fn first_missing(&self) -> Option<&'static str> {
        [
            (SignupField::Email, &self.email),
            (SignupField::Username, &self.username),
            (SignupField::FullName, &self.full_name),
            (SignupField::Password, &self.password),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field.name())
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
