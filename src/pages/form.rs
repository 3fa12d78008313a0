//! Shared submission flow behind the login and signup screens.
//!
//! DESIGN
//! ======
//! An [`AuthForm`] is a cheap cloneable handle over one form instance. The
//! form state lives in a `tokio::sync::watch` channel: callers poll it with
//! [`AuthForm::snapshot`] or follow it with [`AuthForm::subscribe`]. Every
//! update replaces the state through the pure reducers in
//! [`crate::state::form`].
//!
//! The pending check and the `Pending` transition happen under one channel
//! lock, so a second submit while a request is in flight is ignored and never
//! reaches the network.
//!
//! ORDERING
//! ========
//! Outcome effects run only after the response has been received and
//! classified, and only on success: notice (if any), then invalidation of
//! `"authUser"`, then navigation home.

use std::sync::{Arc, Weak};

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::credentials::{Credentials, UnknownField};
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::services::navigation::{HOME, Router};
use crate::services::notify::Notifier;
use crate::services::session::{AUTH_USER_KEY, SessionCache};
use crate::state::form::FormState;
use crate::state::submission::SubmissionState;

/// External services a form drives.
#[derive(Clone)]
pub struct Collaborators {
    pub api: Arc<dyn AuthApi>,
    pub cache: Arc<dyn SessionCache>,
    pub router: Arc<dyn Router>,
    pub notifier: Arc<dyn Notifier>,
}

/// Credentials that know which endpoint they are submitted to.
#[async_trait::async_trait]
pub trait AuthRequest: Credentials {
    /// Short form name used in log events.
    const NAME: &'static str;
    /// Notice shown after a successful submission, if any.
    const SUCCESS_NOTICE: Option<&'static str>;
    const SUBMIT_LABEL: &'static str;
    const PENDING_LABEL: &'static str;

    /// Issue the request. `Some` carries a response body the endpoint returns.
    async fn send(&self, api: &dyn AuthApi) -> Result<Option<Value>, AuthError>;
}

/// Result of one call to [`AuthForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already pending; nothing was sent.
    Ignored,
    /// A required field was empty; nothing was sent.
    Blocked(AuthError),
    Succeeded(Option<Value>),
    Failed(AuthError),
}

enum Start<C> {
    Ignored,
    Blocked(AuthError),
    Begun(C),
}

struct Inner<C> {
    state: watch::Sender<FormState<C>>,
    deps: Collaborators,
}

impl<C: AuthRequest> Inner<C> {
    fn begin(&self) -> Start<C> {
        let mut start = Start::Ignored;
        self.state.send_if_modified(|form| {
            let Some(pending) = form.submission.begin() else {
                return false;
            };
            if let Err(e) = form.validate() {
                start = Start::Blocked(e);
                return false;
            }
            start = Start::Begun(form.credentials.clone());
            *form = std::mem::take(form).with_submission(pending);
            true
        });
        start
    }

    fn finish(&self, result: Result<Option<Value>, AuthError>) -> SubmitOutcome {
        self.state.send_modify(|form| {
            let next = form.submission.resolve(&result);
            *form = std::mem::take(form).with_submission(next);
        });

        match result {
            Ok(body) => {
                tracing::info!(form = C::NAME, "submission succeeded");
                if let Some(notice) = C::SUCCESS_NOTICE {
                    self.deps.notifier.notify_success(notice);
                }
                self.deps.cache.invalidate(AUTH_USER_KEY);
                self.deps.router.navigate_to(HOME);
                SubmitOutcome::Succeeded(body)
            }
            Err(e) => {
                tracing::warn!(form = C::NAME, code = e.error_code(), error = %e, "submission failed");
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Handle to one credential form instance.
pub struct AuthForm<C> {
    inner: Arc<Inner<C>>,
}

impl<C> Clone for AuthForm<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<C: AuthRequest> AuthForm<C> {
    #[must_use]
    pub fn new(deps: Collaborators) -> Self {
        Self::with_credentials(deps, C::default())
    }

    #[must_use]
    pub fn with_credentials(deps: Collaborators, credentials: C) -> Self {
        let (state, _) = watch::channel(FormState::new(credentials));
        Self { inner: Arc::new(Inner { state, deps }) }
    }

    fn update(&self, f: impl FnOnce(FormState<C>) -> FormState<C>) {
        self.inner.state.send_modify(|form| *form = f(std::mem::take(form)));
    }

    pub fn update_field(&self, field: C::Field, value: impl Into<String>) {
        let value = value.into();
        self.update(|form| form.with_field(field, value));
    }

    /// Update a field addressed by its input `name` (e.g. `"fullName"`).
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a field of this form.
    pub fn update_named_field(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<C::Field>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn toggle_password_visibility(&self) {
        self.update(|form| form.with_password_visibility_toggled());
    }

    pub fn set_terms_accepted(&self, accepted: bool) {
        self.update(|form| form.with_terms_accepted(accepted));
    }

    #[must_use]
    pub fn snapshot(&self) -> FormState<C> {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn submission(&self) -> SubmissionState {
        self.inner.state.borrow().submission.clone()
    }

    /// Receiver that observes every form state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormState<C>> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.inner.state.borrow().submission.is_pending() { C::PENDING_LABEL } else { C::SUBMIT_LABEL }
    }

    /// Validate, send, and apply the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let credentials = match self.inner.begin() {
            Start::Begun(credentials) => credentials,
            Start::Ignored => {
                tracing::debug!(form = C::NAME, "submit ignored while pending");
                return SubmitOutcome::Ignored;
            }
            Start::Blocked(e) => return SubmitOutcome::Blocked(e),
        };

        tracing::info!(form = C::NAME, username = %credentials.username(), "submitting credentials");
        let result = credentials.send(self.inner.deps.api.as_ref()).await;
        self.inner.finish(result)
    }

    /// Start a submission on the Tokio runtime without borrowing the form.
    ///
    /// The task keeps only a weak handle. If every [`AuthForm`] handle is
    /// dropped before the response arrives, the outcome effects are skipped
    /// and the task resolves to `None`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn submit_detached(&self) -> JoinHandle<Option<SubmitOutcome>> {
        let credentials = match self.inner.begin() {
            Start::Begun(credentials) => credentials,
            Start::Ignored => {
                tracing::debug!(form = C::NAME, "submit ignored while pending");
                return tokio::spawn(async { Some(SubmitOutcome::Ignored) });
            }
            Start::Blocked(e) => return tokio::spawn(async move { Some(SubmitOutcome::Blocked(e)) }),
        };

        let api = Arc::clone(&self.inner.deps.api);
        let weak: Weak<Inner<C>> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            let result = credentials.send(api.as_ref()).await;
            if let Some(inner) = weak.upgrade() {
                Some(inner.finish(result))
            } else {
                tracing::debug!(form = C::NAME, "form dropped before response; skipping outcome");
                None
            }
        })
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
