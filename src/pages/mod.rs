//! Screen controllers for the auth routes.
//!
//! ARCHITECTURE
//! ============
//! `form` owns the shared submission flow; `login` and `signup` bind it to
//! their credentials, endpoint, and copy.

pub mod form;
pub mod login;
pub mod signup;

pub use form::{AuthForm, AuthRequest, Collaborators, SubmitOutcome};

use crate::error::AuthError;
use crate::services::navigation::LOGIN;
use crate::services::session::AUTH_USER_KEY;

/// End the session, drop the cached user, and return to the login screen.
///
/// # Errors
///
/// Returns an error if the logout request fails; nothing is invalidated then.
pub async fn logout(deps: &Collaborators) -> Result<(), AuthError> {
    deps.api.logout().await?;
    deps.cache.invalidate(AUTH_USER_KEY);
    deps.router.navigate_to(LOGIN);
    tracing::info!("logged out");
    Ok(())
}
