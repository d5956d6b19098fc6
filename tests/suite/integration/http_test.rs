//! End-to-end HTTP tests
//!
//! Each test builds a fresh router over its own in-memory store and drives it
//! with form posts and cookies the way a browser would.

use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use sessiongate::backend::auth::{SessionState, SharedCredentialStore};
use sessiongate::shared::AppConfig;

use crate::common::*;

#[tokio::test]
async fn test_first_visit_gets_anonymous_cookie() {
    let (app, _store) = sqlite_app().await;

    let response = app.get("/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = session_set_cookies(&response);
    assert_eq!(headers.len(), 1);
    let header = &headers[0];
    assert_contains!(header, "HttpOnly");
    assert_contains!(header, "Path=/");
    assert_contains!(header, "Max-Age=259200");
    assert!(!header.contains("Secure"));
    assert!(!header.contains("SameSite"));

    let body = body_text(response).await;
    assert_eq!(body, "Hello, Guest! Please log in or register.");
}

#[tokio::test]
async fn test_known_cookie_is_not_reissued() {
    let (app, _store) = sqlite_app().await;
    let token = app.anonymous_token().await;

    let response = app.get("/api/session", Some(&token)).await;

    assert!(session_set_cookies(&response).is_empty());
    assert_eq!(
        body_json(response).await,
        json!({ "username": "Guest", "isLogged": false })
    );
}

#[tokio::test]
async fn test_forms_are_served() {
    let (app, _store) = sqlite_app().await;

    let register = body_text(app.get("/register", None).await).await;
    let login = body_text(app.get("/login", None).await).await;

    assert_contains!(register, "action=\"/register\"");
    assert_contains!(login, "action=\"/login\"");
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let (app, store) = sqlite_app().await;
    let anonymous = app.anonymous_token().await;

    // register
    let response = app
        .post_form("/register", "username=alice&password=secret1", Some(&anonymous))
        .await;
    assert_redirect(&response, "/login");
    assert_eq!(assert_ok!(store.count_username("alice").await), 1);

    // login issues a new token
    let response = app
        .post_form("/login", "username=alice&password=secret1", Some(&anonymous))
        .await;
    assert_redirect(&response, "/");
    let logged = session_cookie(&response).expect("login sets the session cookie");
    assert_ne!(logged, anonymous);

    let response = app.get("/api/session", Some(&logged)).await;
    assert_eq!(
        body_json(response).await,
        json!({ "username": "alice", "isLogged": true })
    );
    assert_eq!(body_text(app.get("/", Some(&logged)).await).await, "Hello, alice!");

    // the pre-login token is dead; presenting it starts over as a guest
    let response = app.get("/api/session", Some(&anonymous)).await;
    assert!(session_cookie(&response).is_some());
    assert_eq!(body_json(response).await["isLogged"], json!(false));

    // logout clears the cookie and destroys the session
    let response = app.get("/logout", Some(&logged)).await;
    assert_redirect(&response, "/");
    assert_eq!(session_cookie(&response).as_deref(), Some(""));

    let response = app.get("/api/session", Some(&logged)).await;
    assert_ne!(session_cookie(&response).as_deref(), Some(logged.as_str()));
    assert_eq!(
        body_json(response).await,
        json!({ "username": "Guest", "isLogged": false })
    );
}

#[tokio::test]
async fn test_invalid_registration_redirects_back() {
    let (app, store) = sqlite_app().await;

    let response = app.post_form("/register", "username=bo&password=x", None).await;

    assert_redirect(&response, "/register");
    assert_eq!(assert_ok!(store.count_username("bo").await), 0);
}

#[tokio::test]
async fn test_missing_fields_are_invalid_input() {
    let (app, _store) = sqlite_app().await;

    let response = app.post_form("/register", "", None).await;

    assert_redirect(&response, "/register");
}

#[tokio::test]
async fn test_duplicate_registration_redirects_back() {
    let (app, store) = sqlite_app().await;

    let first = app
        .post_form("/register", "username=alice&password=secret1", None)
        .await;
    let second = app
        .post_form("/register", "username=alice&password=other", None)
        .await;

    assert_redirect(&first, "/login");
    assert_redirect(&second, "/register");
    assert_eq!(assert_ok!(store.count_username("alice").await), 1);
}

#[tokio::test]
async fn test_failed_login_keeps_guest_session() {
    let (app, _store) = sqlite_app().await;
    let token = app.anonymous_token().await;
    app.post_form("/register", "username=alice&password=secret1", Some(&token))
        .await;

    let wrong = app
        .post_form("/login", "username=alice&password=wrong", Some(&token))
        .await;
    let unknown = app
        .post_form("/login", "username=nobody&password=secret1", Some(&token))
        .await;

    assert_redirect(&wrong, "/login");
    assert_redirect(&unknown, "/login");
    assert!(session_set_cookies(&wrong).is_empty());

    let response = app.get("/api/session", Some(&token)).await;
    assert!(session_set_cookies(&response).is_empty());
    assert_eq!(body_json(response).await["isLogged"], json!(false));
}

#[tokio::test]
async fn test_corrupted_digest_redirects_to_login() {
    let app = app_with_store(Some(corrupted_store()));

    let response = app
        .post_form("/login", "username=alice&password=secret1", None)
        .await;

    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_unconfigured_store_is_unavailable() {
    let app = app_with_store(None);

    let response = app
        .post_form("/register", "username=alice&password=secret1", None)
        .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Service unavailable", "status": 503 })
    );

    // pages that do not touch the store still work
    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unreachable_store_is_unavailable() {
    let app = app_with_store(Some(unavailable_store()));
    let token = app.anonymous_token().await;

    let register = app
        .post_form("/register", "username=alice&password=secret1", Some(&token))
        .await;
    let login = app
        .post_form("/login", "username=alice&password=secret1", Some(&token))
        .await;

    assert_eq!(register.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(login.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.state.sessions.state(&token).await, SessionState::Anonymous);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _store) = sqlite_app().await;

    let response = app.get("/nowhere", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_idle_anonymous_session_is_replaced() {
    let config = assert_ok!(AppConfig::builder()
        .bcrypt_cost(TEST_COST)
        .session_anonymous_idle(Duration::from_millis(50))
        .build());
    let store: SharedCredentialStore = sqlite_store().await;
    let app = app_with_config(&config, Some(store));
    let token = app.anonymous_token().await;

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(app.state.sessions.purge_expired().await, 1);

    let response = app.get("/api/session", Some(&token)).await;
    let fresh = session_cookie(&response).expect("a new anonymous session is issued");
    assert_ne!(fresh, token);
}

#[tokio::test]
async fn test_overlong_password_registration_redirects_back() {
    let (app, store) = sqlite_app().await;
    let password = format!("{}x", "a".repeat(72));

    let response = app
        .post_form("/register", &format!("username=alice&password={}", password), None)
        .await;

    assert_redirect(&response, "/register");
    assert_eq!(assert_ok!(store.count_username("alice").await), 0);
}

#[tokio::test]
async fn test_password_sharing_72_byte_prefix_cannot_log_in() {
    let (app, _store) = sqlite_app().await;
    let token = app.anonymous_token().await;
    let prefix = "a".repeat(72);
    app.post_form("/register", &format!("username=alice&password={}", prefix), Some(&token))
        .await;

    let response = app
        .post_form("/login", &format!("username=alice&password={}y", prefix), Some(&token))
        .await;

    assert_redirect(&response, "/login");
    assert!(session_set_cookies(&response).is_empty());
    assert_eq!(app.state.sessions.state(&token).await, SessionState::Anonymous);
}
