use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::FALLBACK_MESSAGE;

fn api_for(server: &MockServer, check: LoginStatusCheck) -> HttpAuthApi {
    let mut config = AuthConfig::with_base_url(&server.uri());
    config.login_status_check = check;
    HttpAuthApi::new(config).unwrap()
}

fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_posts_json_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "username": "alice", "password": "secret123" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    api.login(&LoginCredentials::new("alice", "secret123")).await.unwrap();
}

#[tokio::test]
async fn login_surfaces_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({ "error": "invalid credentials" })))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Legacy);
    let err = api.login(&LoginCredentials::new("alice", "wrong")).await.unwrap_err();
    assert_eq!(err, AuthError::Authentication("invalid credentials".to_owned()));
}

#[tokio::test]
async fn strict_login_fails_on_bare_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("{}"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    let err = api.login(&LoginCredentials::new("alice", "secret123")).await.unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn legacy_login_ignores_bare_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("{}"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Legacy);
    assert!(api.login(&LoginCredentials::new("alice", "secret123")).await.is_ok());
}

#[tokio::test]
async fn login_transport_failure_is_wrapped() {
    let api = HttpAuthApi::new(AuthConfig::with_base_url(&unreachable_base_url())).unwrap();
    let err = api.login(&LoginCredentials::new("alice", "secret123")).await.unwrap_err();
    assert_eq!(err.error_code(), "E_TRANSPORT");
    assert!(!err.to_string().is_empty());
}

// =============================================================
// signup
// =============================================================

#[tokio::test]
async fn signup_returns_body_verbatim() {
    let server = MockServer::start().await;
    let user = serde_json::json!({ "_id": "u9", "username": "bob", "fullName": "Bob B", "email": "b@x.io" });
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(serde_json::json!({
            "email": "b@x.io", "username": "bob", "fullName": "Bob B", "password": "longpass1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Legacy);
    let body = api.signup(&SignupCredentials::new("b@x.io", "bob", "Bob B", "longpass1")).await.unwrap();
    assert_eq!(body, user);
}

#[tokio::test]
async fn signup_is_strict_regardless_of_login_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{}"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Legacy);
    let err = api.signup(&SignupCredentials::new("b@x.io", "bob", "Bob B", "longpass1")).await.unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn signup_malformed_json_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    let err = api.signup(&SignupCredentials::new("b@x.io", "bob", "Bob B", "longpass1")).await.unwrap_err();
    assert!(matches!(err, AuthError::Transport(_)));
}

// =============================================================
// current user / logout
// =============================================================

#[tokio::test]
async fn current_user_parses_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "_id": "u1", "username": "alice" })))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    let user = api.current_user().await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn current_user_is_none_when_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({ "error": "Unauthorized" })))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    assert_eq!(api.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn current_user_server_error_is_not_a_signed_out_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("{}"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    let err = api.current_user().await.unwrap_err();
    assert_eq!(err, AuthError::Transport(current_user_failed_message(503)));
    assert!(err.retryable());
}

#[tokio::test]
async fn current_user_forbidden_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    assert_eq!(api.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn session_cookie_from_login_is_sent_to_me() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "jwt=token-abc; Path=/; HttpOnly")
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", "jwt=token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "_id": "u1", "username": "alice" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    api.login(&LoginCredentials::new("alice", "secret123")).await.unwrap();
    let user = api.current_user().await.unwrap();
    assert_eq!(user.map(|u| u.id), Some("u1".to_owned()));
}

#[tokio::test]
async fn logout_accepts_empty_ok_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, LoginStatusCheck::Strict);
    api.logout().await.unwrap();
}
