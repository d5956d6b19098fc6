//! Store, hasher and session fixtures
//!
//! Tests run against a private in-memory SQLite database per test, so the
//! UNIQUE constraint behaves exactly as in production. Two deliberately
//! broken stores cover the fault paths.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use sessiongate::backend::auth::{
    CredentialStore, PasswordHasher, SessionManager, SharedCredentialStore,
    SqliteCredentialStore, User,
};
use sessiongate::backend::error::StoreError;

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_COST: u32 = 4;

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_COST)
}

pub fn test_sessions() -> SessionManager {
    SessionManager::new(Duration::from_millis(259_200_000))
}

/// Fresh in-memory SQLite store
pub async fn sqlite_store() -> Arc<SqliteCredentialStore> {
    Arc::new(assert_ok!(
        SqliteCredentialStore::in_memory().await,
        "Failed to open in-memory store"
    ))
}

/// Store whose every call fails as if the database were down
pub struct UnavailableStore;

#[async_trait]
impl CredentialStore for UnavailableStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _username: &str, _password_hash: &str) -> Result<User, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }
}

/// Store holding a single account whose stored digest is garbage
pub struct CorruptedDigestStore;

#[async_trait]
impl CredentialStore for CorruptedDigestStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(Some(User {
            id: uuid::Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "not-a-bcrypt-digest".to_string(),
            created_at: Utc::now(),
        }))
    }

    async fn insert(&self, _username: &str, _password_hash: &str) -> Result<User, StoreError> {
        Err(StoreError::Duplicate)
    }
}

pub fn unavailable_store() -> SharedCredentialStore {
    Arc::new(UnavailableStore)
}

pub fn corrupted_store() -> SharedCredentialStore {
    Arc::new(CorruptedDigestStore)
}
