//! Backend Module
//!
//! This module contains all server-side code: the authentication and session
//! core, the thin HTTP dispatch layer in front of it, and server setup.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is on by
//! default).
//!
//! # Architecture
//!
//! - **`auth`** - Credential store, password hasher, session manager,
//!   registration and authentication services, HTTP handlers
//! - **`middleware`** - Per-request session resumption
//! - **`routes`** - Route configuration and router assembly
//! - **`server`** - Application state, configuration loading, initialization
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! `AppState` holds the credential store, the hasher, the session manager and
//! the cookie settings. It is created once at startup and cloned into each
//! handler by axum; nothing is stored in globals.
//!
//! # Thread Safety
//!
//! - The database pool is thread-safe and shared without application locks;
//!   the UNIQUE constraint on `username` arbitrates concurrent registrations
//! - The session map sits behind `Arc<tokio::sync::RwLock<..>>`
//! - bcrypt runs on the blocking pool via `spawn_blocking`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and session management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use auth::{PasswordHasher, SessionManager};
