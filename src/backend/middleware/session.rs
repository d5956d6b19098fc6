/**
 * Session Middleware
 *
 * Runs in front of every route. It resumes the session named by the session
 * cookie, or starts a new anonymous one and sets the cookie, and then attaches
 * a `SessionContext` to the request so handlers and the view layer can read
 * the display name and the logged-in flag.
 */

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::backend::auth::sessions::SessionToken;
use crate::backend::server::state::AppState;
use crate::shared::session::SessionView;

/// Session data attached to each request
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub token: SessionToken,
    pub view: SessionView,
}

impl SessionContext {
    pub fn display_name(&self) -> &str {
        &self.view.username
    }

    pub fn is_logged(&self) -> bool {
        self.view.is_logged
    }
}

/// Session middleware
///
/// This middleware:
/// 1. Reads the session token from the cookie
/// 2. Resumes the session, or creates an anonymous one (expired tokens included)
/// 3. Sets the cookie when a new token was issued
/// 4. Attaches `SessionContext` to request extensions
pub async fn session_middleware(
    State(app_state): State<AppState>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = app_state.cookie.read(&cookies);
    let session = app_state
        .sessions
        .create_or_resume(presented.as_deref())
        .await;

    if session.is_new {
        app_state.cookie.set(&cookies, &session.token);
    }

    let context = SessionContext {
        token: session.token.clone(),
        view: session.view(),
    };

    tracing::debug!(
        "Session for {} {}: user={}, logged={}, new={}",
        request.method(),
        request.uri().path(),
        context.view.username,
        context.view.is_logged,
        session.is_new
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

impl axum::extract::FromRequestParts<AppState> for SessionContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("SessionContext not found in request extensions");
                StatusCode::INTERNAL_SERVER_ERROR
            })
    }
}
