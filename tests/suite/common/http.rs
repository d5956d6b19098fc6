//! HTTP helpers for driving the router in-process
//!
//! Requests go through `tower::ServiceExt::oneshot`, so the full layer stack
//! (trace, cookies, session middleware) runs exactly as in the server.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

use sessiongate::backend::auth::{SharedCredentialStore, SqliteCredentialStore};
use sessiongate::backend::routes::create_router;
use sessiongate::backend::server::AppState;
use sessiongate::shared::AppConfig;

use super::fixtures::{sqlite_store, TEST_COST};

pub const COOKIE_NAME: &str = "sid";

/// Router plus handles on what is behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn test_config() -> AppConfig {
    assert_ok!(AppConfig::builder().bcrypt_cost(TEST_COST).build())
}

/// App over the given store (or none)
pub fn app_with_store(store: Option<SharedCredentialStore>) -> TestApp {
    app_with_config(&test_config(), store)
}

pub fn app_with_config(config: &AppConfig, store: Option<SharedCredentialStore>) -> TestApp {
    let state = AppState::new(config, store);
    TestApp {
        router: create_router(state.clone()),
        state,
    }
}

/// App over a fresh SQLite store
pub async fn sqlite_app() -> (TestApp, Arc<SqliteCredentialStore>) {
    let store = sqlite_store().await;
    let shared: SharedCredentialStore = store.clone();
    (app_with_store(Some(shared)), store)
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        assert_ok!(self.router.clone().oneshot(request).await)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("{}={}", COOKIE_NAME, token));
        }
        self.send(assert_ok!(builder.body(Body::empty()))).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("{}={}", COOKIE_NAME, token));
        }
        self.send(assert_ok!(builder.body(Body::from(body.to_string())))).await
    }

    /// Token of a brand new anonymous session
    pub async fn anonymous_token(&self) -> String {
        let response = self.get("/", None).await;
        session_cookie(&response).expect("first visit sets the session cookie")
    }
}

/// All `Set-Cookie` headers for the session cookie, in order
pub fn session_set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter(|value| value.starts_with(&format!("{}=", COOKIE_NAME)))
        .map(str::to_string)
        .collect()
}

/// Value of the last session cookie set by the response, if any
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    session_set_cookies(response).last().and_then(|header| {
        header
            .split(';')
            .next()
            .and_then(|pair| pair.split_once('='))
            .map(|(_, value)| value.to_string())
    })
}

/// Redirect target
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn assert_redirect(response: &Response<Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), target);
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = assert_ok!(axum::body::to_bytes(response.into_body(), usize::MAX).await);
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    assert_ok!(serde_json::from_str(&text), "Response body is not JSON")
}
