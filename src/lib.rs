//! SessionGate - Main Library
//!
//! SessionGate is a minimal web authentication gateway: it registers users,
//! authenticates them against stored bcrypt hashes, and keeps a server-side
//! session that downstream request handlers consult to personalize behavior.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Configuration model and validation
//!   - Caller-facing validation errors
//!   - `SessionView`, the only session data the view layer reads
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Credential store (PostgreSQL, SQLite), password hashing
//!   - Session manager and cookie transport
//!   - Registration and authentication services
//!   - Axum handlers, middleware, server initialization
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use sessiongate::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let (app, _state) = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Session Lifecycle
//!
//! Every request resumes the session named by its cookie or starts an
//! anonymous one. A successful login promotes the session and replaces its
//! token; logout destroys it. Sessions expire after a fixed lifetime
//! (three days by default) and expired tokens are treated as anonymous.
//!
//! # Error Handling
//!
//! Services return typed results (`RegisterError`, `LoginError`). Rejections
//! become redirects back to the originating form; infrastructure faults
//! become `BackendError` responses and are never treated as "not logged in".

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
