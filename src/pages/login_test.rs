use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::*;
use crate::pages::SubmitOutcome;
use crate::state::submission::SubmissionState;
use crate::test_support::{Recorder, StubApi, collaborators};

#[tokio::test]
async fn login_success_has_no_notice() {
    let api = Arc::new(StubApi::default());
    let recorder = Arc::new(Recorder::default());
    let page = LoginPage::new(collaborators(&api, &recorder));
    page.set_username("alice");
    page.set_password("secret123");

    assert_eq!(page.submit().await, SubmitOutcome::Succeeded(None));
    assert_eq!(page.submission(), SubmissionState::Succeeded);
    assert_eq!(recorder.events(), vec!["invalidate:authUser", "navigate:/"]);
}

#[tokio::test]
async fn fresh_login_page_blocks_on_username() {
    let api = Arc::new(StubApi::default());
    let recorder = Arc::new(Recorder::default());
    let page = LoginPage::new(collaborators(&api, &recorder));

    assert!(matches!(page.submit().await, SubmitOutcome::Blocked(AuthError::Validation { field: "username" })));
    assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn login_labels() {
    assert_eq!(LoginCredentials::SUBMIT_LABEL, "Login");
    assert_eq!(LoginCredentials::PENDING_LABEL, "Logging in...");
    assert_eq!(LoginCredentials::SUCCESS_NOTICE, None);
}
