//! In-memory doubles for the auth collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::Notify;

use crate::credentials::{LoginCredentials, SignupCredentials};
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::AuthUser;
use crate::services::navigation::Router;
use crate::services::notify::Notifier;
use crate::services::session::SessionCache;

/// Pauses a stubbed call until the test releases it.
#[derive(Clone, Default)]
pub(crate) struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

pub(crate) struct StubApi {
    pub login_result: Mutex<Result<(), AuthError>>,
    pub signup_result: Mutex<Result<Value, AuthError>>,
    pub users: Mutex<VecDeque<Result<Option<AuthUser>, AuthError>>>,
    pub gate: Mutex<Option<Gate>>,
    pub login_calls: AtomicUsize,
    pub signup_calls: AtomicUsize,
    pub me_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            login_result: Mutex::new(Ok(())),
            signup_result: Mutex::new(Ok(serde_json::json!({}))),
            users: Mutex::new(VecDeque::new()),
            gate: Mutex::new(None),
            login_calls: AtomicUsize::new(0),
            signup_calls: AtomicUsize::new(0),
            me_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }
}

impl StubApi {
    pub fn gated() -> (Self, Gate) {
        let gate = Gate::default();
        let api = Self { gate: Mutex::new(Some(gate.clone())), ..Self::default() };
        (api, gate)
    }

    pub fn with_login_result(self, result: Result<(), AuthError>) -> Self {
        *self.login_result.lock().unwrap() = result;
        self
    }

    pub fn with_signup_result(self, result: Result<Value, AuthError>) -> Self {
        *self.signup_result.lock().unwrap() = result;
        self
    }

    pub fn push_user(&self, user: Option<AuthUser>) {
        self.users.lock().unwrap().push_back(Ok(user));
    }

    pub fn push_user_failure(&self, err: AuthError) {
        self.users.lock().unwrap().push_back(Err(err));
    }

    async fn maybe_wait(&self) {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.pass().await;
        }
    }
}

#[async_trait::async_trait]
impl AuthApi for StubApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<(), AuthError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait().await;
        self.login_result.lock().unwrap().clone()
    }

    async fn signup(&self, _credentials: &SignupCredentials) -> Result<Value, AuthError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait().await;
        self.signup_result.lock().unwrap().clone()
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait().await;
        self.users.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Records every collaborator call, in order, into one log.
#[derive(Default)]
pub(crate) struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionCache for Recorder {
    fn invalidate(&self, key: &str) {
        self.push(format!("invalidate:{key}"));
    }
}

impl Router for Recorder {
    fn navigate_to(&self, path: &str) {
        self.push(format!("navigate:{path}"));
    }
}

impl Notifier for Recorder {
    fn notify_success(&self, message: &str) {
        self.push(format!("notify:{message}"));
    }
}

pub(crate) fn user(id: &str, username: &str) -> AuthUser {
    AuthUser {
        id: id.to_owned(),
        username: username.to_owned(),
        full_name: String::new(),
        email: None,
        profile_img: None,
        bio: None,
    }
}

pub(crate) fn collaborators(api: &Arc<StubApi>, recorder: &Arc<Recorder>) -> crate::pages::Collaborators {
    crate::pages::Collaborators {
        api: api.clone(),
        cache: recorder.clone(),
        router: recorder.clone(),
        notifier: recorder.clone(),
    }
}
