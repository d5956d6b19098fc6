//! Credential Store
//!
//! The services see persistence as an async lookup/insert service keyed by
//! username. Uniqueness of usernames is enforced by a UNIQUE constraint in the
//! database; the store reports a violation as [`StoreError::Duplicate`].
//!
//! # Implementations
//!
//! - **`postgres`** - `PgCredentialStore`, the production store
//! - **`sqlite`** - `SqliteCredentialStore`, file or in-memory database
//!
//! [`connect`] picks one from the scheme of `DATABASE_URL`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::backend::auth::users::User;
use crate::backend::error::StoreError;

pub mod postgres;

pub mod sqlite;

pub use postgres::PgCredentialStore;
pub use sqlite::SqliteCredentialStore;

/// Async access to persisted credentials
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new credential, returning the stored row
    ///
    /// Fails with [`StoreError::Duplicate`] when the username is taken.
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;
}

/// Shared handle used by the application state
pub type SharedCredentialStore = Arc<dyn CredentialStore>;

/// Open the store named by `database_url` and make sure the schema exists
pub async fn connect(
    database_url: &str,
    acquire_timeout: Duration,
) -> Result<SharedCredentialStore, sqlx::Error> {
    if database_url.starts_with("sqlite:") {
        let store = SqliteCredentialStore::connect(database_url, acquire_timeout).await?;
        Ok(Arc::new(store))
    } else {
        let store = PgCredentialStore::connect(database_url, acquire_timeout).await?;
        Ok(Arc::new(store))
    }
}
