/**
 * Signup Handler
 *
 * This module implements the registration handler for POST /register.
 *
 * # Outcomes
 *
 * - Created → 303 to `/login`
 * - Invalid input or duplicate username → 303 back to `/register`
 * - Store or hashing fault → error response (never a redirect)
 */

use axum::{
    extract::State,
    response::Redirect,
    Form,
};

use crate::backend::auth::handlers::types::SignupForm;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::registration::register;
use crate::backend::auth::store::SharedCredentialStore;
use crate::backend::error::{BackendError, RegisterError};

/// Signup handler
///
/// # Errors
///
/// * `503 Service Unavailable` - If the credential store is not configured or unreachable
/// * `500 Internal Server Error` - If password hashing fails
pub async fn signup(
    State(store): State<Option<SharedCredentialStore>>,
    State(hasher): State<PasswordHasher>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect, BackendError> {
    let store = store.ok_or_else(|| {
        tracing::error!("Credential store not configured");
        BackendError::StoreNotConfigured
    })?;
    tracing::info!("Signup request for username: {}", form.username);

    match register(store.as_ref(), &hasher, &form.username, &form.password).await {
        Ok(_) => Ok(Redirect::to("/login")),
        Err(RegisterError::InvalidInput(_) | RegisterError::DuplicateUsername) => {
            Ok(Redirect::to("/register"))
        }
        Err(RegisterError::StoreUnavailable(err)) => Err(err.into()),
        Err(RegisterError::Hashing(err)) => Err(err.into()),
    }
}
