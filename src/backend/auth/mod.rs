//! Authentication Module
//!
//! This module handles user registration, authentication and the server-side
//! session lifecycle.
//!
//! # Architecture
//!
//! - **`users`** - User row and its public projection
//! - **`store`** - `CredentialStore` trait with PostgreSQL and SQLite backends
//! - **`password`** - bcrypt `PasswordHasher`
//! - **`sessions`** - `SessionManager`, the token → session state store
//! - **`cookie`** - Session cookie attributes
//! - **`registration`** - `register()` service
//! - **`authentication`** - `authenticate()` and `logout()` services
//! - **`handlers`** - HTTP dispatch for the services
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → length check → hash → insert
//! 2. **Login**: username + password → lookup → verify → session promoted, new token
//! 3. **Logout**: session destroyed, cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions live server-side; the cookie only carries an opaque token
//! - The token is replaced on login
//! - Invalid credentials are indistinguishable to the client

/// User data model
pub mod users;

/// Credential persistence
pub mod store;

/// Password hashing
pub mod password;

/// Server-side sessions
pub mod sessions;

/// Session cookie transport
pub mod cookie;

/// Registration service
pub mod registration;

/// Authentication service
pub mod authentication;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and services
pub use users::{PublicUser, User};
pub use store::{CredentialStore, PgCredentialStore, SharedCredentialStore, SqliteCredentialStore};
pub use password::PasswordHasher;
pub use sessions::{Session, SessionManager, SessionState, SessionToken};
pub use cookie::SessionCookie;
pub use registration::register;
pub use authentication::{authenticate, logout, Authenticated};
