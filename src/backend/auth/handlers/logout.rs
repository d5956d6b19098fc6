/**
 * Logout Handler
 *
 * GET or POST /logout: destroys the session, clears the cookie and sends the
 * client home. Logging out twice is harmless.
 */

use axum::{
    extract::State,
    response::Redirect,
};
use tower_cookies::Cookies;

use crate::backend::auth::authentication::logout as end_session;
use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::middleware::SessionContext;

pub async fn logout(
    State(sessions): State<SessionManager>,
    State(cookie): State<SessionCookie>,
    session: SessionContext,
    cookies: Cookies,
) -> Redirect {
    end_session(&sessions, &session.token).await;
    cookie.clear(&cookies);
    Redirect::to("/")
}
