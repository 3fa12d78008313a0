//! Client-side routes and the router seam.

use std::sync::{Mutex, PoisonError};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const TERMS: &str = "/terms";
pub const PRIVACY: &str = "/privacy";

pub trait Router: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// In-memory history stack, starting at a given route.
#[derive(Debug)]
pub struct MemoryRouter {
    history: Mutex<Vec<String>>,
}

impl MemoryRouter {
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self { history: Mutex::new(vec![start.to_owned()]) }
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.history().last().cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Router for MemoryRouter {
    fn navigate_to(&self, path: &str) {
        tracing::debug!(path, "navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
