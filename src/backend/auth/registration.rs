/**
 * Registration Service
 *
 * # Registration Process
 *
 * 1. Validate username and password length (no store access on failure);
 *    passwords bcrypt would truncate are refused here
 * 2. Advisory check: is the username already taken?
 * 3. Hash password using bcrypt
 * 4. Insert the credential
 *
 * The UNIQUE constraint decides duplicates. The advisory read only avoids a
 * hash computation in the common case; a registration that loses a race
 * against a concurrent one is rejected by the insert instead.
 */

use crate::backend::auth::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::users::PublicUser;
use crate::backend::error::RegisterError;
use crate::shared::SharedError;

/// Minimum username length, in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 3;

/// Apply the minimal length policy to a new credential
pub fn validate_credentials(username: &str, password: &str) -> Result<(), SharedError> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(SharedError::validation(
            "username",
            format!("must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Register a new user
///
/// Returns the public fields of the created user. Exactly one row is written
/// on success and none otherwise.
pub async fn register(
    store: &dyn CredentialStore,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<PublicUser, RegisterError> {
    if let Err(e) = validate_credentials(username, password) {
        tracing::warn!("Registration rejected for {:?}: {}", username, e);
        return Err(RegisterError::InvalidInput(e));
    }

    if store.find_by_username(username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(RegisterError::DuplicateUsername);
    }

    let password_hash = hasher.hash(password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        RegisterError::from(e)
    })?;

    let user = store
        .insert(username, &password_hash)
        .await
        .map_err(|e| {
            let err = RegisterError::from(e);
            match &err {
                RegisterError::DuplicateUsername => {
                    tracing::warn!("Username taken by a concurrent registration: {}", username)
                }
                _ => tracing::error!("Failed to create user: {:?}", err),
            }
            err
        })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(PublicUser::from(user))
}
