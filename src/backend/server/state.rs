/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The credential store (optional; absent when `DATABASE_URL` is unset)
 * - The password hasher
 * - The session manager
 * - The session cookie settings
 *
 * # Thread Safety
 *
 * - `Arc<dyn CredentialStore>` wraps a thread-safe connection pool
 * - `SessionManager` is a cloneable handle over `Arc<RwLock<..>>`
 * - `PasswordHasher` and `SessionCookie` are plain values
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they need, e.g. `State(sessions): State<SessionManager>`.
 */

use axum::extract::FromRef;

use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::auth::store::SharedCredentialStore;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub credential_store: Option<SharedCredentialStore>,

    pub hasher: PasswordHasher,

    pub sessions: SessionManager,

    pub cookie: SessionCookie,
}

impl AppState {
    /// Build the state for `config` around an already opened store
    pub fn new(config: &AppConfig, credential_store: Option<SharedCredentialStore>) -> Self {
        Self {
            credential_store,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            sessions: SessionManager::new(config.session_max_age)
                .with_anonymous_idle(config.session_anonymous_idle),
            cookie: SessionCookie::from_config(config),
        }
    }
}

impl FromRef<AppState> for Option<SharedCredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credential_store.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie.clone()
    }
}
