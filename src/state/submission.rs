//! Per-attempt submission lifecycle.

use crate::error::AuthError;

/// Progress and outcome of the latest submission attempt.
///
/// Within one attempt transitions only move forward:
/// `Idle -> Pending -> {Succeeded | Failed}`. Starting a new attempt from a
/// settled state goes straight back to `Pending`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// State for a new attempt, or `None` while one is already in flight.
    #[must_use]
    pub fn begin(&self) -> Option<Self> {
        (!self.is_pending()).then_some(Self::Pending)
    }

    /// Settle a pending attempt. A state that is not pending is returned
    /// unchanged so a late resolution cannot rewrite a newer attempt.
    #[must_use]
    pub fn resolve<T>(&self, outcome: &Result<T, AuthError>) -> Self {
        if !self.is_pending() {
            return self.clone();
        }
        match outcome {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
