/**
 * Authentication Service
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Promote the caller's session to logged-in (new token)
 *
 * # Security
 *
 * - Unknown users and wrong passwords produce the same `InvalidCredentials`;
 *   only the server log tells them apart
 * - The session only ever holds `PublicUser`, never the hash
 * - Rejections are read-only
 */

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{Session, SessionManager};
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::users::PublicUser;
use crate::backend::error::LoginError;

/// A successful login
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: PublicUser,
    /// The promoted session; its token replaces the one presented
    pub session: Session,
}

/// Verify credentials and log the session identified by `token` in
pub async fn authenticate(
    store: &dyn CredentialStore,
    hasher: &PasswordHasher,
    sessions: &SessionManager,
    token: &str,
    username: &str,
    password: &str,
) -> Result<Authenticated, LoginError> {
    let user = store
        .find_by_username(username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            LoginError::InvalidCredentials
        })?;

    let valid = hasher
        .verify(password, &user.password_hash)
        .await
        .map_err(|e| {
            let err = LoginError::from(e);
            if let LoginError::InvalidDigestFormat(detail) = &err {
                tracing::error!(
                    "Stored password digest for {} ({}) is corrupted: {}",
                    user.username,
                    user.id,
                    detail
                );
            }
            err
        })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", username);
        return Err(LoginError::InvalidCredentials);
    }

    let public = PublicUser::from(user);
    let session = sessions.promote(token, public.clone()).await.map_err(|e| {
        tracing::warn!("Could not promote session for {}: {}", public.username, e);
        LoginError::from(e)
    })?;

    tracing::info!("User logged in successfully: {} ({})", public.username, public.id);

    Ok(Authenticated {
        user: public,
        session,
    })
}

/// End the session behind `token`
///
/// Safe to call for sessions that are already gone.
pub async fn logout(sessions: &SessionManager, token: &str) {
    if sessions.destroy(token).await {
        tracing::info!("Session destroyed");
    } else {
        tracing::debug!("Logout for a session that no longer exists");
    }
}
