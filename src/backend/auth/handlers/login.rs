/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /login.
 *
 * # Outcomes
 *
 * - Authenticated → new session cookie, 303 to `/`
 * - Invalid credentials, corrupted digest or vanished session → 303 back to `/login`
 * - Already logged in → 303 to `/`
 * - Store or hashing fault → error response (never a redirect)
 *
 * # Security
 *
 * - Unknown user and wrong password take the same path back to the form
 * - The session token is replaced on success
 */

use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use tower_cookies::Cookies;

use crate::backend::auth::authentication::authenticate;
use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::handlers::types::LoginForm;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::auth::store::SharedCredentialStore;
use crate::backend::error::{BackendError, LoginError, SessionError};
use crate::backend::middleware::SessionContext;

/// Login handler
///
/// # Errors
///
/// * `503 Service Unavailable` - If the credential store is not configured or unreachable
/// * `500 Internal Server Error` - If password verification cannot run
pub async fn login(
    State(store): State<Option<SharedCredentialStore>>,
    State(hasher): State<PasswordHasher>,
    State(sessions): State<SessionManager>,
    State(cookie): State<SessionCookie>,
    session: SessionContext,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, BackendError> {
    let store = store.ok_or_else(|| {
        tracing::error!("Credential store not configured");
        BackendError::StoreNotConfigured
    })?;
    tracing::info!("Login request for: {}", form.username);

    let result = authenticate(
        store.as_ref(),
        &hasher,
        &sessions,
        &session.token,
        &form.username,
        &form.password,
    )
    .await;

    match result {
        Ok(authenticated) => {
            cookie.set(&cookies, &authenticated.session.token);
            Ok(Redirect::to("/"))
        }
        Err(
            LoginError::InvalidCredentials
            | LoginError::InvalidDigestFormat(_)
            | LoginError::Session(SessionError::NotFound),
        ) => {
            tracing::warn!("Login rejected, sending back to the form");
            Ok(Redirect::to("/login"))
        }
        Err(LoginError::Session(SessionError::AlreadyLoggedIn)) => Ok(Redirect::to("/")),
        Err(LoginError::StoreUnavailable(err)) => Err(err.into()),
        Err(LoginError::Hashing(err)) => Err(err.into()),
    }
}
