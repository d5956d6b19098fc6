/**
 * Backend Error Types
 *
 * This module defines the error types returned by the credential store, the
 * password hasher, the session manager and the two credential services, plus
 * `BackendError`, which is what infrastructure faults become at the HTTP
 * boundary.
 *
 * # Error Categories
 *
 * ## Rejections
 *
 * Caller-recoverable outcomes that send the user back to the form:
 * - Invalid input (length policy)
 * - Duplicate username
 * - Invalid credentials
 * - Corrupted stored digest (per-account failure, logged for operators)
 *
 * ## Faults
 *
 * Infrastructure failures that must fail the request:
 * - Credential store unavailable
 * - Password hashing failure
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Credential store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The UNIQUE constraint on `username` rejected an insert
    #[error("username already registered")]
    Duplicate,

    /// Connection, query or pool failure
    #[error("credential store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if is_unique_violation {
            Self::Duplicate
        } else {
            Self::Unavailable(err)
        }
    }
}

/// Password hasher failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Salt generation or digest computation failed
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// A stored digest could not be parsed
    #[error("malformed password digest: {0}")]
    InvalidDigestFormat(String),

    /// bcrypt only reads the first 72 bytes; longer input is refused
    #[error("password is {0} bytes, the limit is 72")]
    PasswordTooLong(usize),
}

/// Session state machine violations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Token unknown, expired or already destroyed
    #[error("session not found or expired")]
    NotFound,

    /// Promotion attempted on a session that is already logged in
    #[error("session is already logged in")]
    AlreadyLoggedIn,
}

/// Outcome of a rejected or failed registration
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("invalid input: {0}")]
    InvalidInput(SharedError),

    #[error("username already registered")]
    DuplicateUsername,

    #[error(transparent)]
    StoreUnavailable(StoreError),

    #[error(transparent)]
    Hashing(HashError),
}

impl RegisterError {
    /// Infrastructure faults must fail the request instead of redirecting
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Hashing(_))
    }
}

impl From<StoreError> for RegisterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::DuplicateUsername,
            other => Self::StoreUnavailable(other),
        }
    }
}

impl From<HashError> for RegisterError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::PasswordTooLong(_) => {
                Self::InvalidInput(SharedError::validation("password", err.to_string()))
            }
            other => Self::Hashing(other),
        }
    }
}

/// Outcome of a rejected or failed authentication
#[derive(Debug, Error)]
pub enum LoginError {
    /// Unknown user or wrong password; deliberately undifferentiated
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("stored password digest is malformed: {0}")]
    InvalidDigestFormat(String),

    #[error(transparent)]
    StoreUnavailable(StoreError),

    #[error(transparent)]
    Hashing(HashError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl LoginError {
    /// Infrastructure faults must fail the request instead of redirecting
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Hashing(_))
    }
}

impl From<StoreError> for LoginError {
    fn from(err: StoreError) -> Self {
        Self::StoreUnavailable(err)
    }
}

impl From<HashError> for LoginError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::InvalidDigestFormat(detail) => Self::InvalidDigestFormat(detail),
            // no stored password can be this long
            HashError::PasswordTooLong(_) => Self::InvalidCredentials,
            other => Self::Hashing(other),
        }
    }
}

/// Infrastructure faults that terminate an HTTP request with an error response
///
/// Rejections never become a `BackendError`; handlers redirect them back to
/// the form instead.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Credential store not configured")]
    StoreNotConfigured,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hashing(#[from] HashError),
}

impl BackendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::StoreNotConfigured | Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; infrastructure details stay in the logs
    pub fn message(&self) -> String {
        match self {
            Self::StoreNotConfigured | Self::Store(_) => "Service unavailable".to_string(),
            Self::Hashing(_) => "Internal server error".to_string(),
        }
    }
}
