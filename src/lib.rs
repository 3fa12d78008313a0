//! # authflow
//!
//! Client-side authentication submission core for the social web client.
//!
//! The login and signup screens share one flow: collect credentials into an
//! immutable form value, guard against duplicate submissions, POST the
//! credentials to the auth API, then either surface the server's error or
//! invalidate the cached current user and navigate home.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session cache, router, and notification service are owned by the
//! surrounding application. They are injected as trait objects so the flow
//! can run against a live backend (`net::api::HttpAuthApi`) or test doubles.

pub mod config;
pub mod credentials;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::{AuthConfig, LoginStatusCheck};
pub use credentials::{LoginCredentials, SignupCredentials};
pub use error::AuthError;
pub use pages::login::LoginPage;
pub use pages::signup::SignupPage;
pub use state::submission::SubmissionState;
